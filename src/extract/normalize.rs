//! Medication name canonicalization.

use crate::vocab::ALIASES;

/// Map a raw matched name to its canonical medication name.
///
/// Case-insensitive containment scan of the alias table in declaration order;
/// the first alias contained in `raw` wins. When no alias matches, falls back
/// to capitalization normalization (first letter uppercase, rest lowercase).
/// Total: always returns a name.
pub fn canonical_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    for (variant, canonical) in ALIASES {
        if lower.contains(variant) {
            return (*canonical).to_string();
        }
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
