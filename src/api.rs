use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::time::Duration;

/// Extraction/derivation context.
///
/// Holds the environment needed to resolve relative schedule data (treatment
/// start and end dates are computed from the reference instant).
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference datetime: "today" for duration offsets and the baseline for
    /// next-occurrence queries.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            let time = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// Options that affect extraction behavior.
///
/// Intentionally minimal today; grows as locale/vocabulary configuration is
/// implemented.
#[derive(Debug, Clone, Default)]
pub struct Options {
    // later: custom vocabulary tables, locale, …
}

/// One extracted medication candidate, pending human or automatic
/// confirmation.
///
/// Produced by the pattern matcher or one of the fallback extractors; the
/// candidate list handed to callers is already deduplicated and sorted by
/// canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medication {
    /// Canonical (alias-resolved) medication name.
    pub name: String,
    /// Dosage as value + lowercased unit, e.g. `"40mg"`, when captured.
    pub dosage: Option<String>,
    /// Frequency text: either `"N vezes ao dia"` wording or `"H1/H2h"`
    /// interval form, when captured.
    pub frequency: Option<String>,
    /// Duration text, e.g. `"5 dias"` / `"2 semanas"`, when captured.
    pub duration: Option<String>,
    /// The source line this candidate was extracted from.
    pub source_line: String,
    /// Name of the extraction pattern or fallback that produced this entry.
    pub rule: &'static str,
    /// Whether this is a "latent" (low-confidence, fallback-extracted) match.
    pub latent: bool,
}

/// Result from [`extract`] and [`extract_with`].
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// The raw input text.
    pub text: String,
    /// Finalized medication candidates: unique by case-insensitive name,
    /// sorted by canonical name.
    pub medications: Vec<Medication>,
    /// Total elapsed time spent extracting.
    pub elapsed: Duration,
}

/// Extract medication candidates from `text` with default [`Options`].
///
/// # Example
/// ```
/// use posologia::extract;
///
/// let out = extract("Paracetamol 500mg");
/// assert_eq!(out.medications.len(), 1);
/// assert_eq!(out.medications[0].name, "Paracetamol");
/// ```
pub fn extract(text: &str) -> ExtractResult {
    extract_with(text, &Options::default())
}

/// Extract medication candidates from `text` with the provided `options`.
///
/// Pure function of the input and the static vocabulary tables: no state is
/// retained between calls, and concurrent calls need no coordination.
pub fn extract_with(text: &str, options: &Options) -> ExtractResult {
    let start = std::time::Instant::now();
    let medications = crate::extract::run(text, options);

    ExtractResult { text: text.to_string(), medications, elapsed: start.elapsed() }
}
