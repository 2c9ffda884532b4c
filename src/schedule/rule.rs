//! The schedule data model.

use crate::api::Medication;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};

/// How doses recur within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoseMode {
    /// One dose per day at `first_dose`.
    OnceDaily,
    /// Two doses per day, twelve hours apart.
    TwiceDaily,
    /// A dose every `interval_hours` hours, around the clock.
    Periodic,
}

bitflags::bitflags! {
    /// Days of the week a schedule is active on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WeekdayMask: u8 {
        const MONDAY    = 1 << 0;
        const TUESDAY   = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY  = 1 << 3;
        const FRIDAY    = 1 << 4;
        const SATURDAY  = 1 << 5;
        const SUNDAY    = 1 << 6;
    }
}

impl WeekdayMask {
    /// True when the mask includes `weekday`.
    pub fn includes(self, weekday: Weekday) -> bool {
        let bit = match weekday {
            Weekday::Mon => WeekdayMask::MONDAY,
            Weekday::Tue => WeekdayMask::TUESDAY,
            Weekday::Wed => WeekdayMask::WEDNESDAY,
            Weekday::Thu => WeekdayMask::THURSDAY,
            Weekday::Fri => WeekdayMask::FRIDAY,
            Weekday::Sat => WeekdayMask::SATURDAY,
            Weekday::Sun => WeekdayMask::SUNDAY,
        };
        self.contains(bit)
    }
}

impl Default for WeekdayMask {
    fn default() -> Self {
        WeekdayMask::all()
    }
}

/// A derived recurring dosing schedule.
///
/// Invariant: `interval_hours` is `Some` exactly when `mode` is
/// [`DoseMode::Periodic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRule {
    pub mode: DoseMode,
    /// Anchor time of day for the first dose.
    pub first_dose: NaiveTime,
    pub interval_hours: Option<u32>,
    pub weekdays: WeekdayMask,
    /// First calendar day of the schedule, inclusive.
    pub start_date: NaiveDate,
    /// Last calendar day of the schedule, inclusive.
    pub end_date: NaiveDate,
    /// Skip interval: 0 means every active day, 1 means every other day, etc.
    pub skip_days: u32,
    /// Human-readable provenance note.
    pub note: String,
}

impl ScheduleRule {
    /// The within-day dose times for [`DoseMode::OnceDaily`] and
    /// [`DoseMode::TwiceDaily`], ascending. [`DoseMode::Periodic`] schedules
    /// do not align to calendar days and return only the anchor time.
    pub fn dose_times(&self) -> Vec<NaiveTime> {
        match self.mode {
            DoseMode::OnceDaily | DoseMode::Periodic => vec![self.first_dose],
            DoseMode::TwiceDaily => {
                let second_secs = (self.first_dose.num_seconds_from_midnight() + 12 * 3600)
                    % (24 * 3600);
                let second = NaiveTime::from_num_seconds_from_midnight_opt(second_secs, 0)
                    .unwrap_or(self.first_dose);
                let mut times = vec![self.first_dose, second];
                times.sort();
                times
            }
        }
    }

    /// True when `date` falls inside the schedule's active window and passes
    /// the weekday mask and skip rule.
    pub fn active_on(&self, date: NaiveDate) -> bool {
        if date < self.start_date || date > self.end_date {
            return false;
        }
        if !self.weekdays.includes(date.weekday()) {
            return false;
        }
        let days_since_start = (date - self.start_date).num_days() as u64;
        days_since_start % (u64::from(self.skip_days) + 1) == 0
    }
}

/// A medication paired with its derived schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub medication: Medication,
    pub rule: ScheduleRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    fn rule(mode: DoseMode, first_dose: &str, skip_days: u32) -> ScheduleRule {
        ScheduleRule {
            mode,
            first_dose: first_dose.parse().unwrap(),
            interval_hours: if mode == DoseMode::Periodic { Some(8) } else { None },
            weekdays: WeekdayMask::all(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: "2025-06-30".parse().unwrap(),
            skip_days,
            note: String::new(),
        }
    }

    #[test]
    fn twice_daily_second_dose_is_twelve_hours_later() {
        let times = rule(DoseMode::TwiceDaily, "08:00:00", 0).dose_times();
        assert_eq!(times, vec![t("08:00:00"), t("20:00:00")]);
    }

    #[test]
    fn twice_daily_dose_times_wrap_midnight_sorted() {
        // First dose 20:00 puts the pair at 08:00 and 20:00, ascending.
        let times = rule(DoseMode::TwiceDaily, "20:00:00", 0).dose_times();
        assert_eq!(times, vec![t("08:00:00"), t("20:00:00")]);
    }

    #[test]
    fn active_on_respects_window_and_skip() {
        let r = rule(DoseMode::OnceDaily, "08:00:00", 1);
        assert!(r.active_on("2025-06-01".parse().unwrap()));
        assert!(!r.active_on("2025-06-02".parse().unwrap()));
        assert!(r.active_on("2025-06-03".parse().unwrap()));
        assert!(!r.active_on("2025-05-31".parse().unwrap()));
        assert!(!r.active_on("2025-07-01".parse().unwrap()));
    }

    #[test]
    fn active_on_respects_weekday_mask() {
        let mut r = rule(DoseMode::OnceDaily, "08:00:00", 0);
        r.weekdays = WeekdayMask::MONDAY | WeekdayMask::THURSDAY;
        // 2025-06-02 is a Monday.
        assert!(r.active_on("2025-06-02".parse().unwrap()));
        assert!(!r.active_on("2025-06-03".parse().unwrap()));
        assert!(r.active_on("2025-06-05".parse().unwrap()));
    }
}
