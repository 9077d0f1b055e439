use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::model::product::Product;

/// A single sale record. Immutable once created (deletes aside); `price` and
/// `sum` are snapshots taken at record time so later catalog edits do not
/// rewrite history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: i64,
    pub product_id: i64,
    /// Signed unit count; negative means defective/returned units.
    pub quantity: i64,
    pub price: f64,
    pub sum: f64,
    pub date: DateTime<Utc>,
}

impl Entry {
    pub fn new(id: i64, product: &Product, quantity: i64, date: DateTime<Utc>) -> Self {
        let unit = product.unit_price(quantity);
        Self {
            id,
            product_id: product.id,
            quantity,
            price: unit,
            // quantity carries the sign, so a defect entry is always <= 0
            sum: quantity as f64 * unit,
            date,
        }
    }

    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}
