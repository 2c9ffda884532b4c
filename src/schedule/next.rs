//! Next-occurrence arithmetic over schedule rules.

use super::rule::{DoseMode, Reminder, ScheduleRule};
use chrono::{Days, Duration, NaiveDateTime};

/// Compute the first dose instant of `rule` at or after `reference`.
///
/// Returns `None` once the schedule is exhausted (no occurrence on or before
/// the inclusive end date).
pub fn next_due(rule: &ScheduleRule, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    match rule.mode {
        DoseMode::OnceDaily | DoseMode::TwiceDaily => next_daily(rule, reference),
        DoseMode::Periodic => next_periodic(rule, reference),
    }
}

/// Day-aligned modes: walk active days forward from the reference date and
/// take the first dose time not yet past.
fn next_daily(rule: &ScheduleRule, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let times = rule.dose_times();
    let mut date = rule.start_date.max(reference.date());

    while date <= rule.end_date {
        if rule.active_on(date) {
            for time in &times {
                let candidate = date.and_time(*time);
                if candidate >= reference {
                    return Some(candidate);
                }
            }
        }
        date = date.checked_add_days(Days::new(1))?;
    }

    None
}

/// Interval mode: doses fall at `start + k * interval_hours` for k >= 0,
/// ignoring the weekday mask and skip rule (the interval runs around the
/// clock). The schedule ends with the last dose whose calendar day is within
/// the end date.
fn next_periodic(rule: &ScheduleRule, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let interval_hours = i64::from(rule.interval_hours.unwrap_or(24).max(1));
    let start = rule.start_date.and_time(rule.first_dose);

    let candidate = if reference <= start {
        start
    } else {
        let elapsed = (reference - start).num_seconds();
        let step = interval_hours * 3600;
        let k = elapsed / step + i64::from(elapsed % step != 0);
        start.checked_add_signed(Duration::hours(k * interval_hours))?
    };

    (candidate.date() <= rule.end_date).then_some(candidate)
}

/// Order reminders by their next occurrence at or after `reference`.
///
/// Exhausted schedules are dropped; ties keep input order.
pub fn rank_reminders<'a>(
    reminders: &'a [Reminder],
    reference: NaiveDateTime,
) -> Vec<(&'a Reminder, NaiveDateTime)> {
    let mut ranked: Vec<(&Reminder, NaiveDateTime)> = reminders
        .iter()
        .filter_map(|reminder| next_due(&reminder.rule, reference).map(|due| (reminder, due)))
        .collect();
    ranked.sort_by_key(|(_, due)| *due);
    ranked
}
