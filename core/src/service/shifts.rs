use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::shift::Shift;
use crate::repository::shifts::ShiftRepository;
use crate::time::next_record_id;

/// Manual shift bookkeeping. One record per calendar day: logging hours for
/// a day that already has a shift replaces it.
pub struct ShiftService<R: ShiftRepository> {
    repo: R,
}

impl<R: ShiftRepository> ShiftService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_manual(
        &self,
        date: NaiveDate,
        hours: f64,
        comment: &str,
        now: DateTime<Utc>,
    ) -> Result<Shift> {
        if !(hours.is_finite() && hours > 0.0) {
            bail!("Shift hours must be a positive number");
        }

        let taken: Vec<i64> = self.repo.list()?.iter().map(|s| s.id).collect();
        let shift = Shift::manual(
            next_record_id(&taken, now),
            date,
            hours,
            comment.trim().to_string(),
        );
        self.repo.upsert(shift.clone())?;
        Ok(shift)
    }

    /// Returns false when there was no manual shift on that date.
    pub fn remove_manual(&self, date: NaiveDate) -> Result<bool> {
        self.repo.delete_by_date(date)
    }

    pub fn list(&self) -> Result<Vec<Shift>> {
        self.repo.list()
    }

    /// Manual shifts of the month, oldest first.
    pub fn month_shifts(&self, year: i32, month: u32) -> Result<Vec<Shift>> {
        let mut shifts: Vec<Shift> = self
            .repo
            .list()?
            .into_iter()
            .filter(|s| s.in_month(year, month) && !s.auto)
            .collect();
        shifts.sort_by_key(|s| s.date);
        Ok(shifts)
    }

    pub fn manual_hours(&self, year: i32, month: u32) -> Result<f64> {
        Ok(manual_hours_of(&self.repo.list()?, year, month))
    }
}

/// Hours logged by hand for the month. Records flagged `auto` are excluded
/// so imported pattern hours are never counted twice.
pub fn manual_hours_of(shifts: &[Shift], year: i32, month: u32) -> f64 {
    shifts
        .iter()
        .filter(|s| s.in_month(year, month) && !s.auto)
        .map(|s| s.hours)
        .sum()
}
