//! Schedule derivation and occurrence computation.
//!
//! Turns an extracted [`Medication`](crate::Medication) into a recurring
//! reminder schedule, then answers "when is the next dose due?":
//!
//! ```text
//!   Medication ──▶ derive ──▶ ScheduleRule ──▶ next_due ──▶ NaiveDateTime
//!                    │                            ▲
//!              DeriveOptions                 rank_reminders
//! ```
//!
//! - `rule`: the schedule data model ([`ScheduleRule`], [`DoseMode`],
//!   [`WeekdayMask`], [`Reminder`]).
//! - `derive`: free-text frequency/duration classification into a rule.
//! - `next`: occurrence arithmetic over a rule.

#[path = "schedule/rule.rs"]
mod rule;

#[path = "schedule/derive.rs"]
mod derive;

#[path = "schedule/next.rs"]
mod next;

pub use derive::{DeriveOptions, derive};
pub use next::{next_due, rank_reminders};
pub use rule::{DoseMode, Reminder, ScheduleRule, WeekdayMask};
