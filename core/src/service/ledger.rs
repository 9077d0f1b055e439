use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::model::entry::Entry;
use crate::repository::traits::{EntryRepository, ProductRepository};
use crate::time::next_record_id;

/// Sale ledger operations. Prices are snapshotted from the catalog at record
/// time; a negative quantity books the product's defect price (see
/// `Product::unit_price`).
pub struct LedgerService<P: ProductRepository, E: EntryRepository> {
    products: P,
    entries: E,
}

impl<P: ProductRepository, E: EntryRepository> LedgerService<P, E> {
    pub fn new(products: P, entries: E) -> Self {
        Self { products, entries }
    }

    pub fn add_record(&self, product_id: i64, quantity: i64, now: DateTime<Utc>) -> Result<Entry> {
        if quantity == 0 {
            bail!("Quantity must not be zero");
        }
        let product = self.products.get(product_id)?;
        if product.archived {
            bail!("Product '{}' is archived", product.name);
        }

        let taken: Vec<i64> = self.entries.list()?.iter().map(|e| e.id).collect();
        let entry = Entry::new(next_record_id(&taken, now), &product, quantity, now);
        self.entries.create(entry)
    }

    pub fn delete_record(&self, id: i64) -> Result<()> {
        self.entries.delete(id)
    }

    pub fn list(&self) -> Result<Vec<Entry>> {
        self.entries.list()
    }

    /// Entries of the month, newest first.
    pub fn month_entries(&self, year: i32, month: u32) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = self
            .entries
            .list()?
            .into_iter()
            .filter(|e| e.in_month(year, month))
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    pub fn month_income(&self, year: i32, month: u32) -> Result<f64> {
        Ok(month_income_of(&self.entries.list()?, year, month))
    }
}

/// Monthly revenue: the sum of entry sums, defect entries included with
/// their negative sign.
pub fn month_income_of(entries: &[Entry], year: i32, month: u32) -> f64 {
    entries
        .iter()
        .filter(|e| e.in_month(year, month))
        .map(|e| e.sum)
        .sum()
}
