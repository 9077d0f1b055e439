use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog item. Products referenced by ledger entries are never physically
/// deleted; `archived` hides them from the recording UI instead.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,

    // Unit price applied when a recorded quantity is negative
    // (defective/returned units). Falls back to `price` when absent.
    #[serde(default)]
    pub price_defect: Option<f64>,

    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub favorite: bool,

    pub created: DateTime<Utc>,
}

impl Product {
    pub fn new(id: i64, name: String, price: f64, created: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            price,
            price_defect: None,
            archived: false,
            favorite: false,
            created,
        }
    }

    /// Unit price for a signed quantity: negative quantities are priced at
    /// the defect rate if the product defines one.
    pub fn unit_price(&self, quantity: i64) -> f64 {
        if quantity < 0 {
            self.price_defect.unwrap_or(self.price)
        } else {
            self.price
        }
    }
}
