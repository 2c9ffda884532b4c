//! Pattern cascade and document orchestration.

use super::classify::{self, LineSignals};
use super::normalize::canonical_name;
use super::patterns::{self, ExtractionPattern};
use super::{dedup, fallback};
use crate::api::{Medication, Options};
use once_cell::sync::Lazy;
use regex::Captures;

static DEFAULT_PATTERNS: Lazy<Vec<ExtractionPattern>> = Lazy::new(patterns::get);

/// Run the whole extraction pipeline over `text` and return the finalized
/// (deduplicated, sorted) candidate list.
pub(crate) fn run(text: &str, _options: &Options) -> Vec<Medication> {
    let debug = crate::debug_enabled();
    let mut candidates: Vec<Medication> = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if classify::is_noise_line(line) {
            continue;
        }

        let signals = LineSignals::scan(line);
        let found = match_line(line, signals);
        if debug {
            eprintln!("[matcher:line] \"{line}\" signals={signals:?} candidates={}", found.len());
        }

        if !found.is_empty() {
            candidates.extend(found);
            continue;
        }

        // Fallback chain: only for lines the strict cascade could not parse
        // and that carry no structural marker (marked lines were already
        // handled by a stricter path, even if it rejected them).
        if signals.has_marker() {
            continue;
        }
        if let Some(candidate) = fallback::alias_scan(line) {
            if debug {
                eprintln!("[fallback:alias] \"{line}\" -> {}", candidate.name);
            }
            candidates.push(candidate);
        } else if line.chars().count() > 3 {
            if let Some(candidate) = fallback::bare_word(line) {
                if debug {
                    eprintln!("[fallback:bare_word] \"{line}\" -> {}", candidate.name);
                }
                candidates.push(candidate);
            }
        }
    }

    dedup::finalize(candidates)
}

/// Apply the ordered pattern cascade to a single line.
///
/// Every pattern is tried (a line can legitimately produce more than one
/// candidate; dedup happens at the document level, not here), and for each
/// pattern every non-overlapping match in the line is considered.
pub(crate) fn match_line(line: &str, signals: LineSignals) -> Vec<Medication> {
    let mut out = Vec::new();

    for pattern in DEFAULT_PATTERNS.iter() {
        if !signals.contains(pattern.signals) {
            continue;
        }
        for caps in pattern.regex.captures_iter(line) {
            if let Some(candidate) = accept(pattern, &caps, line) {
                out.push(candidate);
            }
        }
    }

    out
}

/// Validate one raw match and convert it into a candidate.
///
/// A match is accepted only if the captured name is at least 3 characters
/// and not an excluded word. A dosage capture that does not parse as a
/// number degrades to "field absent" rather than rejecting the match.
fn accept(pattern: &ExtractionPattern, caps: &Captures<'_>, line: &str) -> Option<Medication> {
    let raw_name = caps.get(pattern.slots.name)?.as_str().trim();
    if raw_name.chars().count() < 3 || classify::is_excluded_word(&raw_name.to_lowercase()) {
        if crate::debug_enabled() {
            eprintln!("[matcher:reject] pattern=\"{}\" name=\"{raw_name}\"", pattern.name);
        }
        return None;
    }

    let slot = |idx: Option<usize>| idx.and_then(|i| caps.get(i)).map(|m| m.as_str());

    let value = slot(pattern.slots.dosage)
        .map(|digits| digits.replace(',', "."))
        .filter(|digits| digits.parse::<f64>().is_ok());
    let unit = slot(pattern.slots.unit).map(str::to_lowercase);
    let dosage = match (value, unit) {
        (Some(value), Some(unit)) => Some(format!("{value}{unit}")),
        (Some(value), None) => Some(value),
        _ => None,
    };

    let frequency = slot(pattern.slots.frequency).map(str::to_string);
    let duration = slot(pattern.slots.duration).map(|days| format!("{days} dias"));

    Some(Medication {
        name: canonical_name(raw_name),
        dosage,
        frequency,
        duration,
        source_line: line.to_string(),
        rule: pattern.name,
        latent: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_one(line: &str) -> Vec<Medication> {
        match_line(line, LineSignals::scan(line))
    }

    #[test]
    fn marker_line_matches_most_specific_pattern_first() {
        let found = match_one("#Prednesdona 40 mg (12/12h) 5 dias");
        assert!(!found.is_empty());

        // The first (highest-priority) candidate carries the full parse.
        let first = &found[0];
        assert_eq!(first.rule, "marker name+dose+interval+days");
        assert_eq!(first.name, "Prednisone");
        assert_eq!(first.dosage.as_deref(), Some("40mg"));
        assert_eq!(first.frequency.as_deref(), Some("12/12h"));
        assert_eq!(first.duration.as_deref(), Some("5 dias"));
        assert!(!first.latent);
    }

    #[test]
    fn dosage_comma_is_normalized() {
        let found = match_one("Dipirona 2,5ml 8/8h");
        assert_eq!(found[0].dosage.as_deref(), Some("2.5ml"));
    }

    #[test]
    fn excluded_and_short_names_are_rejected() {
        // "mg" both too short and excluded; "por" excluded.
        assert!(match_one("mg 500mg").is_empty());
        assert!(match_one("por 12/12h").is_empty());
    }

    #[test]
    fn rejected_matches_leave_no_partial_result() {
        let found = match_one("via 40 mg (12/12h) 5 dias");
        assert!(found.is_empty());
    }

    #[test]
    fn noise_lines_never_reach_fallbacks() {
        let meds = run("CRM 12345\nDr. João Silva", &Options::default());
        assert!(meds.is_empty());
    }

    #[test]
    fn marker_lines_are_excluded_from_fallbacks() {
        // "#ne 12/12h": the strict cascade rejects the excluded name, and the
        // marker keeps fallbacks away from the line.
        let meds = run("#ne 12/12h", &Options::default());
        assert!(meds.is_empty());
    }
}
