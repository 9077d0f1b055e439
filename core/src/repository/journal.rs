use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::model::journal::{JournalEvent, MAX_JOURNAL_EVENTS};
use crate::repository::file::{ensure_collection_file, resolve_data_dir};

const JOURNAL_FILE_NAME: &str = "journal.json";

pub trait JournalRepository {
    fn list(&self) -> Result<Vec<JournalEvent>>;
    /// Append one event, dropping the oldest beyond `MAX_JOURNAL_EVENTS`.
    fn append(&self, event: JournalEvent) -> Result<()>;
}

pub struct FileJournalRepository {
    file_path: PathBuf,
}

impl FileJournalRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        path.push(JOURNAL_FILE_NAME);
        ensure_collection_file::<JournalEvent>(&path)?;
        Ok(FileJournalRepository { file_path: path })
    }

    fn read_events(&self) -> Result<Vec<JournalEvent>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let events: Vec<JournalEvent> = serde_json::from_reader(reader)?;
        Ok(events)
    }

    fn write_events(&self, events: &[JournalEvent]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, events)?;
        writer.flush()?;
        Ok(())
    }
}

impl JournalRepository for FileJournalRepository {
    fn list(&self) -> Result<Vec<JournalEvent>> {
        self.read_events()
    }

    fn append(&self, event: JournalEvent) -> Result<()> {
        let mut events = self.read_events()?;
        events.push(event);
        // keep only the newest MAX_JOURNAL_EVENTS
        if events.len() > MAX_JOURNAL_EVENTS {
            let drop = events.len() - MAX_JOURNAL_EVENTS;
            events.drain(..drop);
        }
        self.write_events(&events)
    }
}
