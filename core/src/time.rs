use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate};

/// First and last calendar day of `(year, month)`, month 1-indexed.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid year/month: {}-{}", year, month))?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow!("Invalid year/month: {}-{}", year, month))?;
    Ok((first, next_month - Duration::days(1)))
}

/// Inclusive day range, empty when `end < start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let len = ((end - start).num_days() + 1).max(0);
    (0..len).map(move |i| start + Duration::days(i))
}

/// Time-derived identifier: epoch milliseconds, bumped past any id already
/// taken so rapid consecutive inserts stay unique.
pub fn next_record_id(taken: &[i64], now: chrono::DateTime<chrono::Utc>) -> i64 {
    let mut id = now.timestamp_millis();
    while taken.contains(&id) {
        id += 1;
    }
    id
}
