pub mod catalog;
pub mod journal;
pub mod ledger;
pub mod schedule;
pub mod settings;
pub mod shifts;

// Re-export
pub use catalog::CatalogService;
pub use journal::JournalService;
pub use ledger::LedgerService;
pub use schedule::ScheduleCalculator;
pub use settings::SettingsService;
pub use shifts::ShiftService;
