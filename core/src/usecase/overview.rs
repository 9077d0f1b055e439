use anyhow::Result;
use chrono::NaiveDate;

use crate::model::report::ScheduleMonthReport;
use crate::repository::settings::SettingsRepository;
use crate::repository::shifts::ShiftRepository;
use crate::service::schedule::ScheduleCalculator;
use crate::service::shifts::manual_hours_of;

/// Month schedule view: pattern work days plus the hours/norm/overtime
/// summary, for an arbitrary (not just the current) month.
pub struct ScheduleOverviewUseCase<'a, S: ShiftRepository, C: SettingsRepository> {
    shifts: &'a S,
    settings: &'a C,
}

impl<'a, S: ShiftRepository, C: SettingsRepository> ScheduleOverviewUseCase<'a, S, C> {
    pub fn new(shifts: &'a S, settings: &'a C) -> Self {
        Self { shifts, settings }
    }

    pub fn month_overview(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> Result<ScheduleMonthReport> {
        let manual_hours = manual_hours_of(&self.shifts.list()?, year, month);
        let calculator = ScheduleCalculator::new(self.settings.load()?.sanitized());
        Ok(calculator.month_overview(year, month, today, manual_hours))
    }

    pub fn work_days(&self, year: i32, month: u32) -> Result<Vec<NaiveDate>> {
        let calculator = ScheduleCalculator::new(self.settings.load()?.sanitized());
        Ok(calculator.work_days_in_month(year, month))
    }
}
