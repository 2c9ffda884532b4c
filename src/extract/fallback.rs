//! Fallback extractors for lines the strict cascade could not parse.
//!
//! Two strategies, tried in decreasing-confidence order by the matcher:
//! alias-substring scan first, bare-word scan second. Both produce *latent*
//! candidates (the caller knows no structured pattern vouched for them), and
//! both pull whatever attributes the ad-hoc scanners find on the line.

use super::classify;
use super::normalize::canonical_name;
use super::scan::{scan_dosage, scan_duration, scan_frequency};
use crate::api::Medication;
use crate::vocab::ALIASES;

/// Look for any known alias variant as a substring of the lowercased line.
/// First hit in declaration order wins.
pub fn alias_scan(line: &str) -> Option<Medication> {
    let lower = line.to_lowercase();
    let (_, canonical) = ALIASES.iter().find(|(variant, _)| lower.contains(variant))?;
    Some(latent(canonical.to_string(), "alias scan", line))
}

/// Take the first plausible word of the line as a medication candidate.
///
/// Tokens are stripped of non-letter characters (digits, punctuation, OCR
/// junk), so a token like `"12345"` reduces to nothing and can never become
/// a candidate. A surviving token qualifies if it is at least 3 characters
/// and not an excluded word.
pub fn bare_word(line: &str) -> Option<Medication> {
    for token in line.split_whitespace() {
        let clean: String = token.chars().filter(|c| c.is_alphabetic()).collect();
        let lower = clean.to_lowercase();
        if lower.chars().count() < 3 || classify::is_excluded_word(&lower) {
            continue;
        }
        return Some(latent(canonical_name(&clean), "bare word", line));
    }
    None
}

fn latent(name: String, rule: &'static str, line: &str) -> Medication {
    Medication {
        name,
        dosage: scan_dosage(line),
        frequency: scan_frequency(line),
        duration: scan_duration(line),
        source_line: line.to_string(),
        rule,
        latent: true,
    }
}
