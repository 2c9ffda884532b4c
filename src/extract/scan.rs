//! Ad-hoc attribute scanners.
//!
//! Independent of the main pattern table: the fallback extractors use these
//! to pull whatever dosage/frequency/duration happens to sit on a line the
//! strict cascade could not parse. Each scanner returns at most one value per
//! line; the first match wins.

/// Scan `line` for a `<number> <unit>` dosage. Comma decimal separators are
/// normalized to periods and the unit is lowercased, e.g. `"2,5 MG"` →
/// `"2.5mg"`.
pub fn scan_dosage(line: &str) -> Option<String> {
    let caps = regex!(r"(?i)(\d+(?:[.,]\d+)?)\s*(mg|ml|g|mcg|ui|µg)").captures(line)?;
    let value = caps[1].replace(',', ".");
    let unit = caps[2].to_lowercase();
    Some(format!("{value}{unit}"))
}

/// Scan `line` for `<N>/<M>h` interval notation (`h`, ` h`, or `horas`
/// spellings), normalized to `"N/Mh"`.
pub fn scan_frequency(line: &str) -> Option<String> {
    let caps = regex!(r"(?i)(\d+)/(\d+)\s*h(?:oras)?").captures(line)?;
    Some(format!("{}/{}h", &caps[1], &caps[2]))
}

/// Scan `line` for a treatment duration: `<N> dias|semanas|meses`, optionally
/// preceded by "por"/"durante". Day counts take precedence over weeks, weeks
/// over months.
pub fn scan_duration(line: &str) -> Option<String> {
    let lower = line.to_lowercase();
    if let Some(caps) = regex!(r"(?:por\s*|durante\s*)?(\d+)\s*dias?").captures(&lower) {
        return Some(format!("{} dias", &caps[1]));
    }
    if let Some(caps) = regex!(r"(?:por\s*|durante\s*)?(\d+)\s*semanas?").captures(&lower) {
        return Some(format!("{} semanas", &caps[1]));
    }
    if let Some(caps) = regex!(r"(?:por\s*|durante\s*)?(\d+)\s*meses?").captures(&lower) {
        return Some(format!("{} meses", &caps[1]));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dosage_scan_normalizes_value_and_unit() {
        assert_eq!(scan_dosage("tomar 2,5 MG ao dia").as_deref(), Some("2.5mg"));
        assert_eq!(scan_dosage("500mg").as_deref(), Some("500mg"));
        assert_eq!(scan_dosage("sem dose").as_deref(), None);
    }

    #[test]
    fn frequency_scan_accepts_spelling_variants() {
        assert_eq!(scan_frequency("12/12h").as_deref(), Some("12/12h"));
        assert_eq!(scan_frequency("8/8 h").as_deref(), Some("8/8h"));
        assert_eq!(scan_frequency("6/6 horas").as_deref(), Some("6/6h"));
        assert_eq!(scan_frequency("três vezes").as_deref(), None);
    }

    #[test]
    fn duration_scan_prefers_days_then_weeks_then_months() {
        assert_eq!(scan_duration("por 5 dias").as_deref(), Some("5 dias"));
        assert_eq!(scan_duration("durante 2 semanas").as_deref(), Some("2 semanas"));
        assert_eq!(scan_duration("por 3 meses").as_deref(), Some("3 meses"));
        assert_eq!(scan_duration("uso contínuo").as_deref(), None);
    }

    #[test]
    fn scanners_take_first_match_only() {
        assert_eq!(scan_dosage("500mg e depois 250mg").as_deref(), Some("500mg"));
        assert_eq!(scan_frequency("8/8h ou 12/12h").as_deref(), Some("8/8h"));
    }
}
