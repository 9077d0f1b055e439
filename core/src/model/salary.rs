use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_BASE_SALARY: f64 = 50000.0;
pub const DEFAULT_TAX_RATE: f64 = 13.0;
pub const DEFAULT_HOURS_PER_SHIFT: f64 = 12.0;
pub const DEFAULT_NORM_HOURS_PER_MONTH: f64 = 168.0;

/// Repeating shift pattern. Unrecognized stored values deserialize to `Off`,
/// which accrues zero auto hours.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkSchedule {
    #[serde(rename = "2/2")]
    TwoTwo,
    #[serde(rename = "5/2")]
    FiveTwo,
    #[serde(rename = "off")]
    Off,
}

impl<'de> Deserialize<'de> for WorkSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // unknown patterns degrade to Off rather than failing the load
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "2/2" => WorkSchedule::TwoTwo,
            "5/2" => WorkSchedule::FiveTwo,
            _ => WorkSchedule::Off,
        })
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        WorkSchedule::Off
    }
}

impl WorkSchedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkSchedule::TwoTwo => "2/2",
            WorkSchedule::FiveTwo => "5/2",
            WorkSchedule::Off => "off",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SalaryConfig {
    pub base_salary: f64,
    /// Percent, 0..=100.
    pub tax_rate: f64,
    pub advance_amount: f64,
    pub work_schedule: WorkSchedule,
    pub hours_per_shift: f64,
    /// Pre-filled hours when logging a manual shift.
    pub manual_default_hours: f64,
    /// Monthly norm used for the overtime figure.
    pub norm_hours_per_month: f64,
    /// Phase anchor of the repeating pattern.
    pub schedule_start_date: NaiveDate,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            base_salary: DEFAULT_BASE_SALARY,
            tax_rate: DEFAULT_TAX_RATE,
            advance_amount: 0.0,
            work_schedule: WorkSchedule::Off,
            hours_per_shift: DEFAULT_HOURS_PER_SHIFT,
            manual_default_hours: DEFAULT_HOURS_PER_SHIFT,
            norm_hours_per_month: DEFAULT_NORM_HOURS_PER_MONTH,
            // Matches the seed configuration shipped with the app; replaced
            // on first settings save.
            schedule_start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        }
    }
}

impl SalaryConfig {
    /// Normalize user-supplied numbers to safe values before they reach the
    /// computation engine: NaN/negative money figures become 0, a
    /// non-positive shift length falls back to the default.
    pub fn sanitized(mut self) -> Self {
        self.base_salary = money_or_zero(self.base_salary);
        self.tax_rate = self.tax_rate.clamp(0.0, 100.0);
        if self.tax_rate.is_nan() {
            self.tax_rate = 0.0;
        }
        self.advance_amount = money_or_zero(self.advance_amount);
        if !(self.hours_per_shift.is_finite() && self.hours_per_shift > 0.0) {
            self.hours_per_shift = DEFAULT_HOURS_PER_SHIFT;
        }
        if !(self.manual_default_hours.is_finite() && self.manual_default_hours > 0.0) {
            self.manual_default_hours = self.hours_per_shift;
        }
        if !(self.norm_hours_per_month.is_finite() && self.norm_hours_per_month > 0.0) {
            self.norm_hours_per_month = DEFAULT_NORM_HOURS_PER_MONTH;
        }
        self
    }
}

fn money_or_zero(v: f64) -> f64 {
    if v.is_finite() && v >= 0.0 {
        v
    } else {
        0.0
    }
}
