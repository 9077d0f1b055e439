use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    Work,
}

impl Default for ShiftKind {
    fn default() -> Self {
        ShiftKind::Work
    }
}

/// A work-hour record for a single calendar day.
///
/// Only manual shifts (`auto == false`) are ever stored. Hours accrued from
/// the repeating schedule are recomputed on demand and never materialized as
/// `Shift` records; the flag exists so imported data carrying `auto == true`
/// entries is excluded from manual-hour sums rather than double counted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Shift {
    pub id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default, rename = "type")]
    pub kind: ShiftKind,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub auto: bool,
}

impl Shift {
    pub fn manual(id: i64, date: NaiveDate, hours: f64, comment: String) -> Self {
        Self {
            id,
            date,
            hours,
            kind: ShiftKind::Work,
            comment,
            auto: false,
        }
    }

    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}
