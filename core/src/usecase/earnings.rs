use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::model::entry::Entry;
use crate::model::report::StatisticsReport;
use crate::model::salary::SalaryConfig;
use crate::model::shift::Shift;
use crate::repository::settings::SettingsRepository;
use crate::repository::shifts::ShiftRepository;
use crate::repository::traits::EntryRepository;
use crate::service::ledger::month_income_of;
use crate::service::schedule::ScheduleCalculator;
use crate::service::shifts::manual_hours_of;

/// Monthly statistics for `today`'s month, computed from scratch on every
/// call. Pure: the ledger, shifts, configuration and reference day are all
/// explicit inputs, and the result is always a full set of numbers.
///
/// The layered pay formula:
///   hours  = manual shift hours + pattern auto hours
///   gross  = base salary + sale revenue
///   rate   = gross / hours        (0 when no hours were worked)
///   tax    = gross * tax_rate / 100
///   net    = gross - tax - advance
pub fn build_report(
    entries: &[Entry],
    shifts: &[Shift],
    salary: &SalaryConfig,
    today: NaiveDate,
) -> StatisticsReport {
    let (year, month) = (today.year(), today.month());

    let income = month_income_of(entries, year, month);
    let manual_hours = manual_hours_of(shifts, year, month);
    let auto_hours =
        ScheduleCalculator::new(salary.clone()).auto_hours(year, month, today);
    let hours_worked = manual_hours + auto_hours;

    let gross = salary.base_salary + income;
    let hourly_rate = if hours_worked > 0.0 {
        gross / hours_worked
    } else {
        0.0
    };
    let tax_amount = gross * salary.tax_rate / 100.0;
    let final_amount = gross - tax_amount - salary.advance_amount;

    StatisticsReport {
        income,
        base_salary: salary.base_salary,
        hours_worked,
        hourly_rate,
        tax_amount,
        final_amount,
    }
}

/// Feeds `build_report` from the repositories.
pub struct EarningsUseCase<'a, E: EntryRepository, S: ShiftRepository, C: SettingsRepository> {
    entries: &'a E,
    shifts: &'a S,
    settings: &'a C,
}

impl<'a, E: EntryRepository, S: ShiftRepository, C: SettingsRepository>
    EarningsUseCase<'a, E, S, C>
{
    pub fn new(entries: &'a E, shifts: &'a S, settings: &'a C) -> Self {
        Self {
            entries,
            shifts,
            settings,
        }
    }

    pub fn monthly_report(&self, today: NaiveDate) -> Result<StatisticsReport> {
        let entries = self.entries.list()?;
        let shifts = self.shifts.list()?;
        let salary = self.settings.load()?.sanitized();
        Ok(build_report(&entries, &shifts, &salary, today))
    }
}
