use serde::{Deserialize, Serialize};

use crate::model::salary::WorkSchedule;

/// Sign classification of a money figure, for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Income,
    Expense,
}

/// Monthly earnings figures. Derived on every request, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub income: f64,
    pub base_salary: f64,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    pub tax_amount: f64,
    pub final_amount: f64,
}

impl StatisticsReport {
    pub fn balance(&self) -> Balance {
        if self.final_amount >= 0.0 {
            Balance::Income
        } else {
            Balance::Expense
        }
    }
}

/// Month-level schedule overview: how the worked hours split between manual
/// and pattern-derived, and how they compare against the monthly norm.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduleMonthReport {
    pub total_hours: f64,
    pub manual_hours: f64,
    pub auto_hours: f64,
    pub norm_hours: f64,
    pub overtime: f64,
    pub work_days: usize,
    pub schedule: WorkSchedule,
    pub hours_per_shift: f64,
}
