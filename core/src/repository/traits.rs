use anyhow::Result;

use crate::model::entry::Entry;
use crate::model::product::Product;

pub trait ProductRepository {
    fn create(&self, product: Product) -> Result<Product>;
    fn get(&self, id: i64) -> Result<Product>;
    fn list(&self) -> Result<Vec<Product>>;
    fn update(&self, product: &Product) -> Result<()>;
    fn delete(&self, id: i64) -> Result<()>;
}

pub trait EntryRepository {
    fn create(&self, entry: Entry) -> Result<Entry>;
    fn list(&self) -> Result<Vec<Entry>>;
    fn delete(&self, id: i64) -> Result<()>;
}
