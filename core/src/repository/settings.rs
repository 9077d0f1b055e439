use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::model::salary::SalaryConfig;
use crate::repository::file::resolve_data_dir;

const SALARY_FILE_NAME: &str = "salary.json";

pub trait SettingsRepository {
    /// Stored configuration, or the defaults when nothing was saved yet.
    fn load(&self) -> Result<SalaryConfig>;
    fn save(&self, config: &SalaryConfig) -> Result<()>;
}

pub struct FileSettingsRepository {
    file_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = resolve_data_dir(base_dir)?;
        path.push(SALARY_FILE_NAME);
        Ok(FileSettingsRepository { file_path: path })
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<SalaryConfig> {
        if !self.file_path.exists() {
            return Ok(SalaryConfig::default());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    fn save(&self, config: &SalaryConfig) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config)?;
        writer.flush()?;
        Ok(())
    }
}
