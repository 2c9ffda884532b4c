//! Medication extraction pipeline.
//!
//! This module is the entry point for the extraction engine. At a high level,
//! processing an input text is a per-line cascade:
//!
//! ```text
//! raw text ── split lines, drop blanks
//!                │
//!                v
//!        classify::is_noise_line        (classify.rs)
//!                │ not noise
//!                v
//!        matcher::match_line            (matcher.rs + patterns.rs)
//!          - ordered pattern cascade, most specific first
//!          - signal gating (LineSignals) skips impossible patterns
//!          - acceptance: name length/exclusion rules
//!          - names canonicalized       (normalize.rs)
//!                │ zero candidates, no '*'/'#' marker
//!                v
//!        fallback::alias_scan, then fallback::bare_word   (fallback.rs)
//!          - ad-hoc attribute scans    (scan.rs)
//!                │
//!                v
//!        dedup::finalize               (dedup.rs)
//!          - keep first per case-insensitive name, sort
//! ```
//!
//! The cascade is a chain of responsibility over an explicit ordered list:
//! strict patterns first, then progressively looser heuristics, each stage
//! running only when every stricter stage produced nothing for the line. The
//! fallbacks are deliberately low-recall/low-precision safety nets: they
//! offer *some* candidate to a human reviewer rather than silently dropping a
//! line the strict matcher could not parse (such candidates are marked
//! `latent`).
//!
//! ## Responsibilities by module
//!
//! - `classify.rs`: per-line signal scan (`LineSignals`) and the noise-line /
//!   excluded-word predicates shared by every stage.
//! - `patterns.rs`: the static, priority-ordered pattern table with fixed
//!   per-pattern capture slot layouts.
//! - `matcher.rs`: applies the pattern cascade and orchestrates the whole
//!   document run.
//! - `normalize.rs`: alias-table name canonicalization.
//! - `fallback.rs`: the two decreasing-confidence fallback extractors.
//! - `scan.rs`: ad-hoc dosage/frequency/duration scanners used by fallbacks.
//! - `dedup.rs`: whole-document dedup + ordering of the final list.
//!
//! ## Debugging
//!
//! Set `POSOLOGIA_DEBUG=1` to print per-line classification and match traces.

#[path = "extract/classify.rs"]
mod classify;
#[path = "extract/dedup.rs"]
mod dedup;
#[path = "extract/fallback.rs"]
mod fallback;
#[path = "extract/matcher.rs"]
mod matcher;
#[path = "extract/normalize.rs"]
mod normalize;
#[path = "extract/patterns.rs"]
mod patterns;
#[path = "extract/scan.rs"]
mod scan;

#[cfg(test)]
#[path = "extract/tests.rs"]
mod tests;

pub(crate) use matcher::run;
