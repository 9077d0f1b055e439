pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

#[cfg(test)]
pub(crate) mod testutil;

pub use model::entry::Entry;
pub use model::journal::{Action, JournalEvent};
pub use model::product::Product;
pub use model::report::{Balance, ScheduleMonthReport, StatisticsReport};
pub use model::salary::{SalaryConfig, WorkSchedule};
pub use model::shift::{Shift, ShiftKind};
pub use repository::{
    EntryRepository, FileEntryRepository, FileJournalRepository, FileProductRepository,
    FileSettingsRepository, FileShiftRepository, JournalRepository, ProductRepository,
    SettingsRepository, ShiftRepository,
};
pub use service::{
    CatalogService, JournalService, LedgerService, ScheduleCalculator, SettingsService,
    ShiftService,
};
pub use usecase::earnings::{build_report, EarningsUseCase};
pub use usecase::overview::ScheduleOverviewUseCase;
