use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::report::ScheduleMonthReport;
use crate::model::salary::{SalaryConfig, WorkSchedule};
use crate::time::{days_between, month_bounds};

/// Work-hour accrual from a repeating shift pattern.
///
/// All results are plain numbers: an unknown or disabled schedule, an empty
/// day range, or an invalid month simply yield zero rather than an error.
/// The reference day (`today`) is passed in explicitly so callers and tests
/// control the clock.
pub struct ScheduleCalculator {
    settings: SalaryConfig,
}

impl ScheduleCalculator {
    pub fn new(settings: SalaryConfig) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SalaryConfig {
        &self.settings
    }

    pub fn update_settings(&mut self, settings: SalaryConfig) {
        self.settings = settings;
    }

    /// Pattern test for a single day.
    ///
    /// `2/2` repeats work-work-rest-rest from the anchor date in both
    /// directions; the residue is floor-normalized so days before the anchor
    /// land in the same cycle. `5/2` is plain Monday-Friday.
    pub fn is_work_day(&self, day: NaiveDate) -> bool {
        match self.settings.work_schedule {
            WorkSchedule::Off => false,
            WorkSchedule::TwoTwo => {
                let diff = (day - self.settings.schedule_start_date).num_days();
                diff.rem_euclid(4) < 2
            }
            WorkSchedule::FiveTwo => {
                !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
            }
        }
    }

    /// Hours accrued from the pattern within `(year, month)`.
    ///
    /// Counts pattern work days from the first of the month through
    /// yesterday relative to `today` (capped at the month's end). The
    /// current day never contributes: a shift still in progress has not
    /// been worked yet. A month entirely in the future yields zero.
    pub fn auto_hours(&self, year: i32, month: u32, today: NaiveDate) -> f64 {
        if self.settings.work_schedule == WorkSchedule::Off {
            return 0.0;
        }
        let Ok((first, last)) = month_bounds(year, month) else {
            return 0.0;
        };
        let end = last.min(today - Duration::days(1));
        if end < first {
            return 0.0;
        }

        let work_days = days_between(first, end)
            .filter(|d| self.is_work_day(*d))
            .count();

        work_days as f64 * self.settings.hours_per_shift
    }

    /// Every pattern work day of the full month. A planning view: unlike
    /// `auto_hours` this has no elapsed-day cutoff.
    pub fn work_days_in_month(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        let Ok((first, last)) = month_bounds(year, month) else {
            return Vec::new();
        };
        days_between(first, last)
            .filter(|d| self.is_work_day(*d))
            .collect()
    }

    /// Month summary combining manual and pattern hours against the norm.
    pub fn month_overview(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
        manual_hours: f64,
    ) -> ScheduleMonthReport {
        let auto_hours = self.auto_hours(year, month, today);
        let total_hours = manual_hours + auto_hours;
        let norm_hours = self.settings.norm_hours_per_month;

        ScheduleMonthReport {
            total_hours,
            manual_hours,
            auto_hours,
            norm_hours,
            overtime: (total_hours - norm_hours).max(0.0),
            work_days: self.work_days_in_month(year, month).len(),
            schedule: self.settings.work_schedule,
            hours_per_shift: self.settings.hours_per_shift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calc(schedule: WorkSchedule, anchor: NaiveDate, hours_per_shift: f64) -> ScheduleCalculator {
        ScheduleCalculator::new(SalaryConfig {
            work_schedule: schedule,
            schedule_start_date: anchor,
            hours_per_shift,
            ..SalaryConfig::default()
        })
    }

    #[test]
    fn off_schedule_accrues_nothing() {
        let c = calc(WorkSchedule::Off, date(2025, 9, 1), 12.0);
        assert_eq!(c.auto_hours(2025, 9, date(2025, 10, 15)), 0.0);
        assert!(c.work_days_in_month(2025, 9).is_empty());
    }

    #[test]
    fn two_two_cycle_from_anchor() {
        // Anchor day and the next are worked, then two days of rest.
        let anchor = date(2025, 9, 1);
        let c = calc(WorkSchedule::TwoTwo, anchor, 12.0);

        assert!(c.is_work_day(date(2025, 9, 1)));
        assert!(c.is_work_day(date(2025, 9, 2)));
        assert!(!c.is_work_day(date(2025, 9, 3)));
        assert!(!c.is_work_day(date(2025, 9, 4)));
        assert!(c.is_work_day(date(2025, 9, 5)));
    }

    #[test]
    fn two_two_cycle_extends_backwards() {
        // Days before the anchor follow the same period-4 cycle.
        let anchor = date(2025, 9, 5);
        let c = calc(WorkSchedule::TwoTwo, anchor, 12.0);

        assert!(c.is_work_day(date(2025, 9, 1))); // diff -4
        assert!(c.is_work_day(date(2025, 9, 2))); // diff -3
        assert!(!c.is_work_day(date(2025, 9, 3))); // diff -2
        assert!(!c.is_work_day(date(2025, 9, 4))); // diff -1
        assert!(c.is_work_day(date(2025, 9, 5)));
    }

    #[test]
    fn two_two_anchor_after_queried_month() {
        // Anchor in the following month; September phase is derived backwards.
        let anchor = date(2025, 10, 3);
        let c = calc(WorkSchedule::TwoTwo, anchor, 8.0);

        // Sep 29 has diff -4, so 29/30 work, 27/28 rest.
        assert!(c.is_work_day(date(2025, 9, 29)));
        assert!(c.is_work_day(date(2025, 9, 30)));
        assert!(!c.is_work_day(date(2025, 9, 27)));
        assert!(!c.is_work_day(date(2025, 9, 28)));
    }

    #[test]
    fn five_two_skips_weekends_regardless_of_anchor() {
        // 2025-09-06 is a Saturday, 2025-09-07 a Sunday.
        let c = calc(WorkSchedule::FiveTwo, date(2025, 9, 6), 8.0);

        assert!(!c.is_work_day(date(2025, 9, 6)));
        assert!(!c.is_work_day(date(2025, 9, 7)));
        assert!(c.is_work_day(date(2025, 9, 8))); // Monday

        // September 2025 has 22 weekdays.
        assert_eq!(c.work_days_in_month(2025, 9).len(), 22);
    }

    #[test]
    fn future_month_yields_zero() {
        let c = calc(WorkSchedule::TwoTwo, date(2025, 9, 1), 12.0);
        assert_eq!(c.auto_hours(2025, 11, date(2025, 9, 15)), 0.0);
        // The month that starts today is still entirely un-elapsed.
        assert_eq!(c.auto_hours(2025, 10, date(2025, 10, 1)), 0.0);
    }

    #[test]
    fn current_day_is_never_counted() {
        let anchor = date(2025, 9, 1);
        let c = calc(WorkSchedule::TwoTwo, anchor, 12.0);

        // As of Sep 2 only Sep 1 has elapsed: one worked day.
        assert_eq!(c.auto_hours(2025, 9, date(2025, 9, 2)), 12.0);
        // A day later Sep 2 becomes countable: both cycle days worked.
        assert_eq!(c.auto_hours(2025, 9, date(2025, 9, 3)), 24.0);
        // Sep 3 is a rest day, so the total holds as of Sep 4.
        assert_eq!(c.auto_hours(2025, 9, date(2025, 9, 4)), 24.0);
    }

    #[test]
    fn completed_month_counts_every_cycle_day() {
        let anchor = date(2025, 9, 1);
        let c = calc(WorkSchedule::TwoTwo, anchor, 12.0);

        // September 2025: cycle starting on the 1st gives 16 work days.
        assert_eq!(c.work_days_in_month(2025, 9).len(), 16);
        // Queried well after the month ended, all of them have elapsed.
        assert_eq!(c.auto_hours(2025, 9, date(2025, 11, 20)), 16.0 * 12.0);
    }

    #[test]
    fn month_overview_totals_and_overtime() {
        let anchor = date(2025, 9, 1);
        let mut c = calc(WorkSchedule::TwoTwo, anchor, 12.0);
        c.update_settings(SalaryConfig {
            norm_hours_per_month: 168.0,
            ..c.settings().clone()
        });

        let report = c.month_overview(2025, 9, date(2025, 10, 15), 10.0);
        assert_eq!(report.auto_hours, 192.0); // 16 days x 12h
        assert_eq!(report.manual_hours, 10.0);
        assert_eq!(report.total_hours, 202.0);
        assert_eq!(report.overtime, 34.0);
        assert_eq!(report.work_days, 16);
        assert_eq!(report.schedule, WorkSchedule::TwoTwo);
    }
}
