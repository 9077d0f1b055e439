use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use crate::model::shift::Shift;
use crate::repository::file::{ensure_collection_file, resolve_data_dir};

const SHIFTS_FILE_NAME: &str = "shifts.json";

pub trait ShiftRepository {
    fn list(&self) -> Result<Vec<Shift>>;
    /// Insert or replace; at most one shift record exists per calendar day.
    fn upsert(&self, shift: Shift) -> Result<()>;
    /// Returns false when no manual shift existed on that date.
    fn delete_by_date(&self, date: NaiveDate) -> Result<bool>;
}

pub struct FileShiftRepository {
    file_path: PathBuf,
}

impl FileShiftRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        path.push(SHIFTS_FILE_NAME);
        ensure_collection_file::<Shift>(&path)?;
        Ok(FileShiftRepository { file_path: path })
    }

    fn read_shifts(&self) -> Result<Vec<Shift>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let shifts: Vec<Shift> = serde_json::from_reader(reader)?;
        Ok(shifts)
    }

    fn write_shifts(&self, shifts: &[Shift]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, shifts)?;
        writer.flush()?;
        Ok(())
    }
}

impl ShiftRepository for FileShiftRepository {
    fn list(&self) -> Result<Vec<Shift>> {
        self.read_shifts()
    }

    fn upsert(&self, shift: Shift) -> Result<()> {
        let mut shifts = self.read_shifts()?;
        if let Some(pos) = shifts.iter().position(|s| s.date == shift.date) {
            shifts[pos] = shift;
        } else {
            shifts.push(shift);
        }
        self.write_shifts(&shifts)
    }

    fn delete_by_date(&self, date: NaiveDate) -> Result<bool> {
        let mut shifts = self.read_shifts()?;
        let initial_len = shifts.len();
        shifts.retain(|s| !(s.date == date && !s.auto));

        if shifts.len() == initial_len {
            return Ok(false);
        }

        self.write_shifts(&shifts)?;
        Ok(true)
    }
}
