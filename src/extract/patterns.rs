//! The static extraction pattern table.
//!
//! Each [`ExtractionPattern`] pairs a compiled regex with a fixed
//! [`SlotLayout`]: capture groups are positional in the regex but interpreted
//! through the layout's named fields, so no stage ever looks a role up by
//! string. Absent roles are `None` in the layout and yield empty captures,
//! never errors.
//!
//! Patterns are tried in declaration order, most specific first: a
//! prescription line's most informative form should win over a degenerate
//! partial parse of the same text (dedup keeps the first candidate per name,
//! so the richest parse survives).

use super::classify::LineSignals;
use regex::Regex;

/// Capture-group indices for the roles a pattern can fill.
///
/// `name` is mandatory for every pattern; the rest are optional per pattern.
#[derive(Debug, Clone, Copy)]
pub struct SlotLayout {
    pub name: usize,
    pub dosage: Option<usize>,
    pub unit: Option<usize>,
    pub frequency: Option<usize>,
    pub duration: Option<usize>,
}

/// One entry of the ordered pattern cascade.
#[derive(Debug)]
pub struct ExtractionPattern {
    pub name: &'static str,
    pub regex: &'static Regex,
    pub slots: SlotLayout,
    /// Signals a line must carry for this pattern to be attempted.
    pub signals: LineSignals,
}

/// `#Prednesdona 40 mg (12/12h) 5 dias`
fn marker_full() -> ExtractionPattern {
    ExtractionPattern {
        name: "marker name+dose+interval+days",
        regex: regex!(
            r"(?i)#\s*([A-Za-zÀ-ÿ]+)\s+(\d+(?:[.,]\d+)?)\s*(mg|ml|g|mcg|ui|µg)?\s*\(?(\d+/\d+h?)\s*\)?\s*(?:por\s+)?(\d+)\s*dias?"
        ),
        slots: SlotLayout { name: 1, dosage: Some(2), unit: Some(3), frequency: Some(4), duration: Some(5) },
        signals: LineSignals::HAS_HASH.union(LineSignals::HAS_DIGITS).union(LineSignals::HAS_SLASH),
    }
}

/// `#Varelton 20mg (12/12h) por 30 dias`: glued dose digits+unit, explicit "por".
fn marker_glued_dose() -> ExtractionPattern {
    ExtractionPattern {
        name: "marker name+dose+interval 'por' days",
        regex: regex!(
            r"(?i)#\s*([A-Za-zÀ-ÿ]+)\s+(\d+(?:[.,]\d+)?)(mg|ml|g|mcg|ui|µg)?\s*\(?(\d+/\d+h?)\s*\)?\s*por\s+(\d+)\s*dias?"
        ),
        slots: SlotLayout { name: 1, dosage: Some(2), unit: Some(3), frequency: Some(4), duration: Some(5) },
        signals: LineSignals::HAS_HASH.union(LineSignals::HAS_DIGITS).union(LineSignals::HAS_SLASH),
    }
}

/// `Prednisone 40 mg (12/12h) 5 dias`, no marker.
fn bare_full() -> ExtractionPattern {
    ExtractionPattern {
        name: "name+dose+interval+days",
        regex: regex!(
            r"(?i)([A-Za-zÀ-ÿ]+)\s+(\d+(?:[.,]\d+)?)\s*(mg|ml|g|mcg|ui|µg)?\s*\(?(\d+/\d+h?)\s*\)?\s*(?:por\s+)?(\d+)\s*dias?"
        ),
        slots: SlotLayout { name: 1, dosage: Some(2), unit: Some(3), frequency: Some(4), duration: Some(5) },
        signals: LineSignals::HAS_DIGITS.union(LineSignals::HAS_SLASH),
    }
}

/// `ntmoxilia 12/12h por 5 dias`: interval + day count, no dosage.
fn interval_days() -> ExtractionPattern {
    ExtractionPattern {
        name: "name+interval+days",
        regex: regex!(r"(?i)([A-Za-zÀ-ÿ]+)\s+(\d+/\d+h?)\s*por\s+(\d+)\s*dias?"),
        slots: SlotLayout { name: 1, dosage: None, unit: None, frequency: Some(2), duration: Some(3) },
        signals: LineSignals::HAS_DIGITS.union(LineSignals::HAS_SLASH),
    }
}

/// `Amoxicilina 500mg 8/8h`: dosage + interval, no day count.
fn dose_interval() -> ExtractionPattern {
    ExtractionPattern {
        name: "name+dose+interval",
        regex: regex!(
            r"(?i)([A-Za-zÀ-ÿ]+)\s+(\d+(?:[.,]\d+)?)\s*(mg|ml|g|mcg|ui|µg)?\s*\(?(\d+/\d+h?)\s*\)?"
        ),
        slots: SlotLayout { name: 1, dosage: Some(2), unit: Some(3), frequency: Some(4), duration: None },
        signals: LineSignals::HAS_DIGITS.union(LineSignals::HAS_SLASH),
    }
}

/// `Paracetamol 500mg`: dosage only.
fn dose_only() -> ExtractionPattern {
    ExtractionPattern {
        name: "name+dose",
        regex: regex!(r"(?i)([A-Za-zÀ-ÿ]+)\s+(\d+(?:[.,]\d+)?)\s*(mg|ml|g|mcg|ui|µg)"),
        slots: SlotLayout { name: 1, dosage: Some(2), unit: Some(3), frequency: None, duration: None },
        signals: LineSignals::HAS_DIGITS.union(LineSignals::HAS_UNIT),
    }
}

/// `Dipirona 6/6h`: interval only.
fn interval_only() -> ExtractionPattern {
    ExtractionPattern {
        name: "name+interval",
        regex: regex!(r"(?i)([A-Za-zÀ-ÿ]+)\s+(\d+/\d+h?)"),
        slots: SlotLayout { name: 1, dosage: None, unit: None, frequency: Some(2), duration: None },
        signals: LineSignals::HAS_DIGITS.union(LineSignals::HAS_SLASH),
    }
}

/// The full cascade, most specific first. Order is load-bearing.
pub fn get() -> Vec<ExtractionPattern> {
    vec![
        marker_full(),
        marker_glued_dose(),
        bare_full(),
        interval_days(),
        dose_interval(),
        dose_only(),
        interval_only(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_names_group_one() {
        for pattern in get() {
            assert_eq!(pattern.slots.name, 1, "{}", pattern.name);
        }
    }

    #[test]
    fn slot_indices_are_within_capture_count() {
        for pattern in get() {
            let groups = pattern.regex.captures_len();
            let max = [
                Some(pattern.slots.name),
                pattern.slots.dosage,
                pattern.slots.unit,
                pattern.slots.frequency,
                pattern.slots.duration,
            ]
            .into_iter()
            .flatten()
            .max()
            .unwrap();
            assert!(max < groups, "{}: slot {} out of range {}", pattern.name, max, groups);
        }
    }

    #[test]
    fn marker_full_captures_all_groups() {
        let p = marker_full();
        let caps = p.regex.captures("#Prednesdona 40 mg (12/12h) 5 dias").unwrap();
        assert_eq!(&caps[1], "Prednesdona");
        assert_eq!(&caps[2], "40");
        assert_eq!(&caps[3], "mg");
        assert_eq!(&caps[4], "12/12h");
        assert_eq!(&caps[5], "5");
    }
}
