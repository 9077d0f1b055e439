use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::entry::Entry;
use crate::model::product::Product;
use crate::repository::traits::{EntryRepository, ProductRepository};

const PRODUCTS_FILE_NAME: &str = "products.json";
const ENTRIES_FILE_NAME: &str = "entries.json";

/// Resolve the data directory (default `~/.piecework`) and make sure it
/// exists. Tests and alternative layouts inject their own base dir.
pub(crate) fn resolve_data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(".piecework")
        }
    };
    fs::create_dir_all(&path)?;
    Ok(path)
}

pub(crate) fn ensure_collection_file<T: serde::Serialize>(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &Vec::<T>::new())?;
        writer.flush()?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct FileProductRepository {
    file_path: PathBuf,
}

impl FileProductRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        path.push(PRODUCTS_FILE_NAME);
        ensure_collection_file::<Product>(&path)?;
        Ok(FileProductRepository { file_path: path })
    }

    fn read_products(&self) -> Result<Vec<Product>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let products = serde_json::from_reader(reader)?;
        Ok(products)
    }

    fn write_products(&self, products: &[Product]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, products)?;
        writer.flush()?;
        Ok(())
    }
}

impl ProductRepository for FileProductRepository {
    fn create(&self, product: Product) -> Result<Product> {
        let mut products = self.read_products()?;
        products.push(product.clone());
        self.write_products(&products)?;
        Ok(product)
    }

    fn get(&self, id: i64) -> Result<Product> {
        self.read_products()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| anyhow!("Product with ID {} not found", id))
    }

    fn list(&self) -> Result<Vec<Product>> {
        self.read_products()
    }

    fn update(&self, product: &Product) -> Result<()> {
        let mut products = self.read_products()?;
        if let Some(pos) = products.iter().position(|p| p.id == product.id) {
            products[pos] = product.clone();
            self.write_products(&products)?;
            Ok(())
        } else {
            Err(anyhow!("Product with ID {} not found", product.id))
        }
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut products = self.read_products()?;
        let initial_len = products.len();
        products.retain(|p| p.id != id);

        if products.len() == initial_len {
            return Err(anyhow!("Product with ID {} not found", id));
        }

        self.write_products(&products)?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct FileEntryRepository {
    file_path: PathBuf,
}

impl FileEntryRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        path.push(ENTRIES_FILE_NAME);
        ensure_collection_file::<Entry>(&path)?;
        Ok(FileEntryRepository { file_path: path })
    }

    fn read_entries(&self) -> Result<Vec<Entry>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let entries = serde_json::from_reader(reader)?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &[Entry]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}

impl EntryRepository for FileEntryRepository {
    fn create(&self, entry: Entry) -> Result<Entry> {
        let mut entries = self.read_entries()?;
        entries.push(entry.clone());
        self.write_entries(&entries)?;
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<Entry>> {
        self.read_entries()
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut entries = self.read_entries()?;
        let initial_len = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == initial_len {
            return Err(anyhow!("Entry with ID {} not found", id));
        }

        self.write_entries(&entries)?;
        Ok(())
    }
}
