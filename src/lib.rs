extern crate self as posologia;

#[macro_use]
mod macros;
mod api;
mod extract;
mod schedule;
mod vocab;

pub use api::{Context, ExtractResult, Medication, Options, extract, extract_with};
pub use schedule::{
    DeriveOptions, DoseMode, Reminder, ScheduleRule, WeekdayMask, derive, next_due, rank_reminders,
};

/// True when `POSOLOGIA_DEBUG=1` (or any value) is set; gates stderr tracing
/// across the extraction pipeline.
pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("POSOLOGIA_DEBUG").is_some()
}
