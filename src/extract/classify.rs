//! Line pre-classification.
//!
//! Two concerns live here:
//!
//! - **Signals** ([`LineSignals`]): cheap boolean features of a line ("has
//!   digits", "has a dose unit") used to skip extraction patterns that cannot
//!   possibly match. Like any coarse gate, false positives are fine: the
//!   pattern itself still has to match.
//! - **Exclusion matching**: the three-way word/term comparison shared by the
//!   noise-line classifier, the matcher's name acceptance check, and the
//!   bare-word fallback.
//!
//! ## Exclusion matching semantics
//!
//! OCR output truncates and pads words, so exact lookup is not enough: a term
//! matches a word when either contains the other. Containment is restricted
//! to terms of length >= 3; two-letter noise terms ("ne", "go", "em") would
//! otherwise swallow legitimate drug names ("predNEsdona").

use crate::vocab::EXCLUDED;

bitflags::bitflags! {
    /// Coarse per-line features for fast pattern gating.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineSignals: u8 {
        const HAS_DIGITS = 1 << 0;
        /// A '#' prescription-item marker.
        const HAS_HASH   = 1 << 1;
        /// A '*' prescription-item marker.
        const HAS_STAR   = 1 << 2;
        /// A '/' as in "12/12h" interval notation.
        const HAS_SLASH  = 1 << 3;
        /// A dose unit word (mg, ml, g, mcg, ui, µg).
        const HAS_UNIT   = 1 << 4;
    }
}

impl LineSignals {
    /// Scan `line` for coarse signals.
    pub fn scan(line: &str) -> Self {
        let mut signals = LineSignals::empty();

        if line.bytes().any(|b| b.is_ascii_digit()) {
            signals |= LineSignals::HAS_DIGITS;
        }
        if line.contains('#') {
            signals |= LineSignals::HAS_HASH;
        }
        if line.contains('*') {
            signals |= LineSignals::HAS_STAR;
        }
        if line.contains('/') {
            signals |= LineSignals::HAS_SLASH;
        }

        let lower = line.to_lowercase();
        const UNITS: &[&str] = &["mg", "ml", "mcg", "ui", "µg", "g"];
        for word in lower.split_whitespace() {
            let word = word.trim_matches(|c: char| !c.is_alphabetic());
            if UNITS.contains(&word) || UNITS.iter().any(|u| u.len() >= 2 && word.ends_with(u)) {
                signals |= LineSignals::HAS_UNIT;
                break;
            }
        }

        signals
    }

    /// True when the line carries a structural prescription-item marker.
    pub fn has_marker(self) -> bool {
        self.intersects(LineSignals::HAS_HASH | LineSignals::HAS_STAR)
    }
}

/// Three-way match between a lowercased `word` and one exclusion `term`.
///
/// Terms shorter than 3 characters only match exactly; longer terms also
/// match by containment in either direction (OCR truncation tolerance).
fn word_matches_term(word: &str, term: &str) -> bool {
    if term.chars().count() < 3 {
        return word == term;
    }
    word == term || word.contains(term) || term.contains(word)
}

/// True when `word` (lowercased by the caller) can never be a medication
/// name: shorter than 3 characters, or matching some exclusion term.
pub fn is_excluded_word(word: &str) -> bool {
    if word.chars().count() < 3 {
        return true;
    }
    EXCLUDED.iter().any(|&term| word_matches_term(word, term))
}

/// Decide whether `line` is pure non-medication noise (headers, signatures,
/// doctor info).
///
/// Splits on whitespace, trims non-alphabetic edge characters from each
/// token, and drops tokens that become empty (bare numbers, punctuation).
/// Noise iff at least one token remains and *every* token matches some
/// exclusion term; a single plausible word keeps the line eligible.
pub fn is_noise_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    let mut words = 0usize;
    let mut excluded = 0usize;

    for word in lower.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphabetic());
        if word.is_empty() {
            continue;
        }
        words += 1;
        if EXCLUDED.iter().any(|&term| word_matches_term(word, term)) {
            excluded += 1;
        }
    }

    let noise = words > 0 && excluded == words;
    if noise && crate::debug_enabled() {
        eprintln!("[classify:noise] \"{line}\"");
    }
    noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_scan_detects_features() {
        let s = LineSignals::scan("#Prednesdona 40 mg (12/12h) 5 dias");
        assert!(s.contains(LineSignals::HAS_DIGITS));
        assert!(s.contains(LineSignals::HAS_HASH));
        assert!(s.contains(LineSignals::HAS_SLASH));
        assert!(s.contains(LineSignals::HAS_UNIT));
        assert!(s.has_marker());

        let s = LineSignals::scan("camude dor");
        assert!(s.is_empty());
    }

    #[test]
    fn unit_detection_handles_glued_dosage() {
        assert!(LineSignals::scan("Paracetamol 500mg").contains(LineSignals::HAS_UNIT));
        assert!(LineSignals::scan("Dipirona 20 gotas").contains(LineSignals::HAS_DIGITS));
        assert!(!LineSignals::scan("Dipirona gotas").contains(LineSignals::HAS_UNIT));
    }

    #[test]
    fn header_lines_are_noise() {
        assert!(is_noise_line("Receita médica"));
        assert!(is_noise_line("Dr. João Silva"));
        // "12345" trims to nothing; "crm" is excluded; all remaining words excluded.
        assert!(is_noise_line("CRM 12345"));
        assert!(is_noise_line("Em caso de dor"));
    }

    #[test]
    fn one_plausible_word_keeps_the_line() {
        assert!(!is_noise_line("Tomar Paracetamol"));
        assert!(!is_noise_line("#Prednesdona 40 mg (12/12h) 5 dias"));
        assert!(!is_noise_line("camude dor"));
    }

    #[test]
    fn short_terms_match_exactly_only() {
        // "prednesdona" contains the two-letter noise term "ne" but must not
        // be excluded by it.
        assert!(!is_excluded_word("prednesdona"));
        assert!(is_excluded_word("ne"));
        assert!(is_excluded_word("xy")); // under 3 chars
    }

    #[test]
    fn long_terms_match_by_containment() {
        assert!(is_excluded_word("farmácia"));
        assert!(is_excluded_word("farmáci")); // truncated word inside term
        assert!(is_excluded_word("identificaçãoxx")); // term inside word
    }
}
