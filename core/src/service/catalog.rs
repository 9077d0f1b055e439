use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::model::product::Product;
use crate::repository::traits::{EntryRepository, ProductRepository};
use crate::time::next_record_id;

/// Product catalog operations. Needs the ledger as well: a product that any
/// entry still references must not be deleted, only archived.
pub struct CatalogService<P: ProductRepository, E: EntryRepository> {
    products: P,
    entries: E,
}

impl<P: ProductRepository, E: EntryRepository> CatalogService<P, E> {
    pub fn new(products: P, entries: E) -> Self {
        Self { products, entries }
    }

    pub fn add_product(
        &self,
        name: &str,
        price: f64,
        price_defect: Option<f64>,
        now: DateTime<Utc>,
    ) -> Result<Product> {
        let name = name.trim();
        validate_product(name, price, price_defect)?;

        let taken: Vec<i64> = self.products.list()?.iter().map(|p| p.id).collect();
        let mut product = Product::new(next_record_id(&taken, now), name.to_string(), price, now);
        product.price_defect = price_defect;
        self.products.create(product)
    }

    pub fn edit_product(
        &self,
        id: i64,
        name: &str,
        price: f64,
        price_defect: Option<f64>,
    ) -> Result<Product> {
        let name = name.trim();
        validate_product(name, price, price_defect)?;

        let mut product = self.products.get(id)?;
        product.name = name.to_string();
        product.price = price;
        product.price_defect = price_defect;
        self.products.update(&product)?;
        Ok(product)
    }

    pub fn toggle_archived(&self, id: i64) -> Result<Product> {
        let mut product = self.products.get(id)?;
        product.archived = !product.archived;
        self.products.update(&product)?;
        Ok(product)
    }

    pub fn toggle_favorite(&self, id: i64) -> Result<Product> {
        let mut product = self.products.get(id)?;
        product.favorite = !product.favorite;
        self.products.update(&product)?;
        Ok(product)
    }

    /// Rejected while any ledger entry references the product; archive it
    /// instead to keep recorded history resolvable.
    pub fn delete_product(&self, id: i64) -> Result<()> {
        if self.entries.list()?.iter().any(|e| e.product_id == id) {
            bail!("Product {} has recorded entries; archive it instead of deleting", id);
        }
        self.products.delete(id)
    }

    pub fn get(&self, id: i64) -> Result<Product> {
        self.products.get(id)
    }

    pub fn list(&self) -> Result<Vec<Product>> {
        self.products.list()
    }

    /// Non-archived products, favorites first.
    pub fn active(&self) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .list()?
            .into_iter()
            .filter(|p| !p.archived)
            .collect();
        products.sort_by_key(|p| !p.favorite);
        Ok(products)
    }
}

fn validate_product(name: &str, price: f64, price_defect: Option<f64>) -> Result<()> {
    if name.is_empty() {
        bail!("Product name must not be empty");
    }
    if !(price.is_finite() && price > 0.0) {
        bail!("Product price must be a positive number");
    }
    if let Some(defect) = price_defect {
        if !(defect.is_finite() && defect >= 0.0) {
            bail!("Defect price must be a non-negative number");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::Entry;
    use crate::testutil::{MockEntryRepo, MockProductRepo};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 10, 9, 0, 0).unwrap()
    }

    fn service(entries: Vec<Entry>) -> CatalogService<MockProductRepo, MockEntryRepo> {
        CatalogService::new(MockProductRepo::default(), MockEntryRepo::new(entries))
    }

    #[test]
    fn add_and_edit_product() {
        let svc = service(vec![]);
        let p = svc.add_product("  Widget A ", 100.0, Some(40.0), now()).unwrap();
        assert_eq!(p.name, "Widget A");
        assert_eq!(p.price_defect, Some(40.0));

        let edited = svc.edit_product(p.id, "Widget B", 120.0, None).unwrap();
        assert_eq!(edited.name, "Widget B");
        assert_eq!(svc.get(p.id).unwrap().price, 120.0);
    }

    #[test]
    fn rejects_invalid_products() {
        let svc = service(vec![]);
        assert!(svc.add_product("", 100.0, None, now()).is_err());
        assert!(svc.add_product("Widget", 0.0, None, now()).is_err());
        assert!(svc.add_product("Widget", f64::NAN, None, now()).is_err());
        assert!(svc.add_product("Widget", 100.0, Some(-1.0), now()).is_err());
    }

    #[test]
    fn delete_is_rejected_while_referenced() {
        let svc = service(vec![]);
        let p = svc.add_product("Widget", 100.0, None, now()).unwrap();
        let entry = Entry::new(1, &p, 2, now());

        let svc = CatalogService::new(
            MockProductRepo::with_products(vec![p.clone()]),
            MockEntryRepo::new(vec![entry]),
        );
        assert!(svc.delete_product(p.id).is_err());

        // With the ledger cleared the delete goes through.
        let svc = CatalogService::new(
            MockProductRepo::with_products(vec![p.clone()]),
            MockEntryRepo::new(vec![]),
        );
        svc.delete_product(p.id).unwrap();
        assert!(svc.list().unwrap().is_empty());
    }

    #[test]
    fn active_hides_archived_and_leads_with_favorites() {
        let svc = service(vec![]);
        let a = svc.add_product("A", 10.0, None, now()).unwrap();
        let b = svc.add_product("B", 20.0, None, now()).unwrap();
        let c = svc.add_product("C", 30.0, None, now()).unwrap();

        svc.toggle_archived(a.id).unwrap();
        svc.toggle_favorite(c.id).unwrap();

        let active = svc.active().unwrap();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, c.id);
        assert_eq!(active[1].id, b.id);
    }
}
