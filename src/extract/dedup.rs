//! Candidate finalization: dedup and ordering.

use crate::api::Medication;

/// Collapse candidates to one per medication name and sort the survivors.
///
/// Dedup keys on the lowercased canonical name and keeps the *first*
/// candidate per key in document order. Because the matcher emits
/// higher-priority parses first, the richest parse of a medication wins;
/// fields present only on a later duplicate are dropped, not merged.
/// The final list is sorted by lowercased name for stable output.
pub fn finalize(candidates: Vec<Medication>) -> Vec<Medication> {
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<Medication> = Vec::new();

    for candidate in candidates {
        let key = candidate.name.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(candidate);
    }

    out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    out
}
