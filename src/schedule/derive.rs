//! Free-text frequency and duration classification.

use super::rule::{DoseMode, ScheduleRule, WeekdayMask};
use crate::api::{Context, Medication};
use chrono::{Days, Months, NaiveTime};

const DEFAULT_FIRST_DOSE: (u32, u32) = (8, 0);

/// Caller-tunable knobs for [`derive`].
#[derive(Debug, Clone, Copy)]
pub struct DeriveOptions {
    /// Skip interval between active days (0 = every day).
    pub skip_days: u32,
    /// Days of the week the schedule is active on.
    pub weekdays: WeekdayMask,
    /// Override for the anchor dose time; `None` lets classification decide.
    pub first_dose: Option<NaiveTime>,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        DeriveOptions { skip_days: 0, weekdays: WeekdayMask::all(), first_dose: None }
    }
}

/// Derive a recurring schedule from an extracted medication.
///
/// Total: unknown frequency text falls through to one dose per day at 08:00,
/// and a missing or unparseable duration defaults to a 30-day course. The
/// schedule starts on the reference date of `ctx`.
pub fn derive(medication: &Medication, options: &DeriveOptions, ctx: &Context) -> ScheduleRule {
    let (mode, classified_time, interval_hours) =
        classify_frequency(medication.frequency.as_deref());

    let start_date = ctx.reference_time.date();
    let end_date = course_end(start_date, medication.duration.as_deref());

    let rule = ScheduleRule {
        mode,
        first_dose: options.first_dose.unwrap_or(classified_time),
        interval_hours,
        weekdays: options.weekdays,
        start_date,
        end_date,
        skip_days: options.skip_days,
        note: build_note(medication),
    };
    if crate::debug_enabled() {
        eprintln!("[derive] {} -> {:?} {:?}", medication.name, rule.mode, rule.interval_hours);
    }
    rule
}

/// Classify a free-text frequency into (mode, anchor time, interval).
///
/// Checks run in a fixed order; the first hit wins. Absent or unrecognized
/// text lands on the once-daily default.
fn classify_frequency(frequency: Option<&str>) -> (DoseMode, NaiveTime, Option<u32>) {
    let default_time = at(DEFAULT_FIRST_DOSE.0, DEFAULT_FIRST_DOSE.1);
    let Some(frequency) = frequency else {
        return (DoseMode::OnceDaily, default_time, None);
    };
    let text = frequency.to_lowercase();

    if text.contains("1 vez") || text.contains("uma vez") {
        return (DoseMode::OnceDaily, default_time, None);
    }
    if text.contains("2 vezes") || text.contains("duas vezes") {
        return (DoseMode::TwiceDaily, default_time, None);
    }
    if text.contains("3 vezes") || text.contains("três vezes") {
        return (DoseMode::Periodic, default_time, Some(8));
    }
    if text.contains("4 vezes") || text.contains("quatro vezes") {
        return (DoseMode::Periodic, default_time, Some(6));
    }
    if text.contains("cada") || (text.contains("de") && text.contains("em")) {
        let hours = regex!(r"(\d+)\s*h(?:oras)?")
            .captures(&text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .filter(|h| *h > 0)
            .unwrap_or(8);
        return (DoseMode::Periodic, default_time, Some(hours));
    }
    if text.contains("manhã") {
        return (DoseMode::OnceDaily, at(8, 0), None);
    }
    if text.contains("tarde") {
        return (DoseMode::OnceDaily, at(14, 0), None);
    }
    if text.contains("noite") {
        return (DoseMode::OnceDaily, at(20, 0), None);
    }
    if text.contains("jejum") || text.contains("antes") {
        return (DoseMode::OnceDaily, at(7, 0), None);
    }

    (DoseMode::OnceDaily, default_time, None)
}

/// Map a free-text duration to the course's inclusive end date.
fn course_end(start: chrono::NaiveDate, duration: Option<&str>) -> chrono::NaiveDate {
    let fallback = start.checked_add_days(Days::new(30)).unwrap_or(start);
    let Some(duration) = duration else {
        return fallback;
    };
    let text = duration.to_lowercase();

    let count = |default: u64| {
        regex!(r"(\d+)")
            .captures(&text)
            .and_then(|caps| caps[1].parse::<u64>().ok())
            .unwrap_or(default)
    };

    if text.contains("dia") {
        return start.checked_add_days(Days::new(count(30))).unwrap_or(fallback);
    }
    if text.contains("semana") {
        return start.checked_add_days(Days::new(count(4) * 7)).unwrap_or(fallback);
    }
    if text.contains("mes") || text.contains("mês") {
        let months = u32::try_from(count(1)).unwrap_or(1);
        return start.checked_add_months(Months::new(months)).unwrap_or(fallback);
    }
    if text.contains("contínuo") || text.contains("continuo") {
        return start.checked_add_months(Months::new(12)).unwrap_or(fallback);
    }

    fallback
}

fn build_note(medication: &Medication) -> String {
    let mut note = String::from("Extraído da receita");
    if let Some(frequency) = &medication.frequency {
        note.push_str(&format!(" - Frequência: {frequency}"));
    }
    if let Some(duration) = &medication.duration {
        note.push_str(&format!(" - Duração: {duration}"));
    }
    if !medication.source_line.is_empty() {
        note.push_str(&format!(" - Original: {}", medication.source_line));
    }
    note
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}
