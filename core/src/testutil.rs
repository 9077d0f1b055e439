//! In-memory repository mocks shared by the service and usecase tests.

use std::cell::RefCell;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::model::entry::Entry;
use crate::model::journal::JournalEvent;
use crate::model::product::Product;
use crate::model::salary::SalaryConfig;
use crate::model::shift::Shift;
use crate::repository::journal::JournalRepository;
use crate::repository::settings::SettingsRepository;
use crate::repository::shifts::ShiftRepository;
use crate::repository::traits::{EntryRepository, ProductRepository};

#[derive(Default)]
pub struct MockProductRepo {
    products: RefCell<Vec<Product>>,
}

impl MockProductRepo {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RefCell::new(products),
        }
    }
}

impl ProductRepository for MockProductRepo {
    fn create(&self, product: Product) -> Result<Product> {
        self.products.borrow_mut().push(product.clone());
        Ok(product)
    }

    fn get(&self, id: i64) -> Result<Product> {
        self.products
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("Product with ID {} not found", id))
    }

    fn list(&self) -> Result<Vec<Product>> {
        Ok(self.products.borrow().clone())
    }

    fn update(&self, product: &Product) -> Result<()> {
        let mut products = self.products.borrow_mut();
        let pos = products
            .iter()
            .position(|p| p.id == product.id)
            .ok_or_else(|| anyhow!("Product with ID {} not found", product.id))?;
        products[pos] = product.clone();
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut products = self.products.borrow_mut();
        let initial_len = products.len();
        products.retain(|p| p.id != id);
        if products.len() == initial_len {
            return Err(anyhow!("Product with ID {} not found", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockEntryRepo {
    entries: RefCell<Vec<Entry>>,
}

impl MockEntryRepo {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }
}

impl EntryRepository for MockEntryRepo {
    fn create(&self, entry: Entry) -> Result<Entry> {
        self.entries.borrow_mut().push(entry.clone());
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.borrow().clone())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut entries = self.entries.borrow_mut();
        let initial_len = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == initial_len {
            return Err(anyhow!("Entry with ID {} not found", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockShiftRepo {
    shifts: RefCell<Vec<Shift>>,
}

impl MockShiftRepo {
    pub fn new(shifts: Vec<Shift>) -> Self {
        Self {
            shifts: RefCell::new(shifts),
        }
    }
}

impl ShiftRepository for MockShiftRepo {
    fn list(&self) -> Result<Vec<Shift>> {
        Ok(self.shifts.borrow().clone())
    }

    fn upsert(&self, shift: Shift) -> Result<()> {
        let mut shifts = self.shifts.borrow_mut();
        if let Some(pos) = shifts.iter().position(|s| s.date == shift.date) {
            shifts[pos] = shift;
        } else {
            shifts.push(shift);
        }
        Ok(())
    }

    fn delete_by_date(&self, date: NaiveDate) -> Result<bool> {
        let mut shifts = self.shifts.borrow_mut();
        let initial_len = shifts.len();
        shifts.retain(|s| !(s.date == date && !s.auto));
        Ok(shifts.len() != initial_len)
    }
}

pub struct MockSettingsRepo {
    config: RefCell<SalaryConfig>,
}

impl MockSettingsRepo {
    pub fn new(config: SalaryConfig) -> Self {
        Self {
            config: RefCell::new(config),
        }
    }
}

impl Default for MockSettingsRepo {
    fn default() -> Self {
        Self::new(SalaryConfig::default())
    }
}

impl SettingsRepository for MockSettingsRepo {
    fn load(&self) -> Result<SalaryConfig> {
        Ok(self.config.borrow().clone())
    }

    fn save(&self, config: &SalaryConfig) -> Result<()> {
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct MockJournalRepo {
    events: RefCell<Vec<JournalEvent>>,
}

impl JournalRepository for MockJournalRepo {
    fn list(&self) -> Result<Vec<JournalEvent>> {
        Ok(self.events.borrow().clone())
    }

    fn append(&self, event: JournalEvent) -> Result<()> {
        let mut events = self.events.borrow_mut();
        events.push(event);
        if events.len() > crate::model::journal::MAX_JOURNAL_EVENTS {
            let drop = events.len() - crate::model::journal::MAX_JOURNAL_EVENTS;
            events.drain(..drop);
        }
        Ok(())
    }
}
