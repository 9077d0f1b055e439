use anyhow::Result;

use crate::model::salary::SalaryConfig;
use crate::repository::settings::SettingsRepository;

/// Salary configuration access. Everything handed out or persisted goes
/// through `SalaryConfig::sanitized`, so the computation engine only ever
/// sees well-formed numbers.
pub struct SettingsService<R: SettingsRepository> {
    repo: R,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn load(&self) -> Result<SalaryConfig> {
        Ok(self.repo.load()?.sanitized())
    }

    pub fn save(&self, config: SalaryConfig) -> Result<SalaryConfig> {
        let config = config.sanitized();
        self.repo.save(&config)?;
        Ok(config)
    }
}
