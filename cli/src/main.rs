mod history;
mod stats;

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use piecework_core::{
    Action, CatalogService, EarningsUseCase, Entry, FileEntryRepository, FileJournalRepository,
    FileProductRepository, FileSettingsRepository, FileShiftRepository, JournalService,
    LedgerService, Product, ProductRepository, SalaryConfig, ScheduleOverviewUseCase,
    SettingsService, ShiftService, WorkSchedule,
};

#[derive(Parser)]
#[command(name = "piecework")]
#[command(about = "Personal production and earnings tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a sale (negative quantity books defective/returned units)
    Add {
        product_id: i64,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// List the current month's records
    Records,
    /// Delete a sale record
    RmRecord {
        id: i64,
    },
    /// Manage the product catalog
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Manage manual work shifts
    Shift {
        #[command(subcommand)]
        command: ShiftCommands,
    },
    /// Earnings statistics for the current month
    Stats,
    /// Work-schedule overview for a month (defaults to the current one)
    Schedule {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Also list every scheduled work day of the month
        #[arg(long)]
        days: bool,
    },
    /// Show or change salary settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Action history
    History {
        /// Only events from this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Only events of this kind (e.g. add_record, settings)
        #[arg(long, value_parser = parse_action)]
        action: Option<Action>,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// Add a catalog product
    Add {
        name: String,
        price: f64,
        /// Unit price applied to negative (defect/return) quantities
        #[arg(long)]
        defect_price: Option<f64>,
    },
    /// List products (active only unless --all)
    List {
        #[arg(long)]
        all: bool,
    },
    /// Change name and prices of a product
    Edit {
        id: i64,
        name: String,
        price: f64,
        #[arg(long)]
        defect_price: Option<f64>,
    },
    /// Archive or restore a product
    Archive {
        id: i64,
    },
    /// Mark or unmark a product as favorite
    Favorite {
        id: i64,
    },
    /// Delete a product (rejected while records reference it)
    Rm {
        id: i64,
    },
}

#[derive(Subcommand)]
enum ShiftCommands {
    /// Log a manual shift (defaults: today, configured default hours)
    Add {
        hours: Option<f64>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Remove the manual shift of a date
    Rm {
        date: NaiveDate,
    },
    /// List the current month's manual shifts
    List,
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print the salary configuration
    Show,
    /// Update salary configuration fields
    Set {
        #[arg(long)]
        base_salary: Option<f64>,
        #[arg(long)]
        tax_rate: Option<f64>,
        #[arg(long)]
        advance: Option<f64>,
        /// off, 2/2 or 5/2
        #[arg(long, value_parser = parse_schedule)]
        schedule: Option<WorkSchedule>,
        #[arg(long)]
        hours_per_shift: Option<f64>,
        #[arg(long)]
        manual_hours: Option<f64>,
        #[arg(long)]
        norm_hours: Option<f64>,
        /// Pattern anchor date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
}

fn parse_schedule(s: &str) -> Result<WorkSchedule> {
    match s {
        "off" => Ok(WorkSchedule::Off),
        "2/2" => Ok(WorkSchedule::TwoTwo),
        "5/2" => Ok(WorkSchedule::FiveTwo),
        _ => Err(anyhow!("Unknown schedule '{}' (expected off, 2/2 or 5/2)", s)),
    }
}

fn parse_action(s: &str) -> Result<Action> {
    match s {
        "add_record" => Ok(Action::AddRecord),
        "delete_record" => Ok(Action::DeleteRecord),
        "add_product" => Ok(Action::AddProduct),
        "edit_product" => Ok(Action::EditProduct),
        "delete_product" => Ok(Action::DeleteProduct),
        "add_shift" => Ok(Action::AddShift),
        "delete_shift" => Ok(Action::DeleteShift),
        "settings" => Ok(Action::Settings),
        _ => Err(anyhow!("Unknown action '{}'", s)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let products = FileProductRepository::new(None)?;
    let entries = FileEntryRepository::new(None)?;
    let shifts = FileShiftRepository::new(None)?;
    let settings_repo = FileSettingsRepository::new(None)?;
    let journal = JournalService::new(FileJournalRepository::new(None)?);

    let now = Utc::now();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add { product_id, quantity } => {
            let ledger = LedgerService::new(products.clone(), entries.clone());
            let entry = ledger.add_record(product_id, quantity, now)?;
            let catalog = CatalogService::new(products, entries);
            let name = catalog.get(entry.product_id)?.name;
            journal.record(
                Action::AddRecord,
                format!("{} x{} = {:.2}", name, entry.quantity, entry.sum),
                now,
            )?;
            println!(
                "Recorded: {} x{} at {:.2} = {:.2} (ID: {})",
                name, entry.quantity, entry.price, entry.sum, entry.id
            );
        }
        Commands::Records => {
            let ledger = LedgerService::new(products.clone(), entries);
            let month_entries = ledger.month_entries(today.year(), today.month())?;
            if month_entries.is_empty() {
                println!("No records this month.");
                return Ok(());
            }
            let catalog = products;
            let rows: Vec<RecordRow> = month_entries
                .iter()
                .map(|e| RecordRow::new(e, catalog.get(e.product_id).ok().as_ref()))
                .collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
            println!(
                "Month total: {:.2}",
                ledger.month_income(today.year(), today.month())?
            );
        }
        Commands::RmRecord { id } => {
            let ledger = LedgerService::new(products, entries);
            ledger.delete_record(id)?;
            journal.record(Action::DeleteRecord, format!("record {}", id), now)?;
            println!("Record {} deleted.", id);
        }
        Commands::Product { command } => {
            run_product_command(command, products, entries, &journal, now)?;
        }
        Commands::Shift { command } => {
            let service = ShiftService::new(shifts);
            let settings = SettingsService::new(settings_repo);
            run_shift_command(command, &service, &settings, &journal, today, now)?;
        }
        Commands::Stats => {
            let usecase = EarningsUseCase::new(&entries, &shifts, &settings_repo);
            let report = usecase.monthly_report(today)?;
            stats::render_report(today, &report);
        }
        Commands::Schedule { year, month, days } => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            let usecase = ScheduleOverviewUseCase::new(&shifts, &settings_repo);
            let overview = usecase.month_overview(year, month, today)?;
            let work_days = if days {
                usecase.work_days(year, month)?
            } else {
                Vec::new()
            };
            stats::render_overview(year, month, &overview, &work_days);
        }
        Commands::Settings { command } => {
            let settings = SettingsService::new(settings_repo);
            run_settings_command(command, &settings, &journal, now)?;
        }
        Commands::History { date, action } => {
            let events = journal.events(date, action)?;
            history::show_history(&events);
        }
    }
    Ok(())
}

fn run_product_command(
    command: ProductCommands,
    products: FileProductRepository,
    entries: FileEntryRepository,
    journal: &JournalService<FileJournalRepository>,
    now: chrono::DateTime<Utc>,
) -> Result<()> {
    let catalog = CatalogService::new(products, entries);
    match command {
        ProductCommands::Add { name, price, defect_price } => {
            let p = catalog.add_product(&name, price, defect_price, now)?;
            journal.record(Action::AddProduct, p.name.clone(), now)?;
            println!("Product added: {} (ID: {})", p.name, p.id);
        }
        ProductCommands::List { all } => {
            let list = if all { catalog.list()? } else { catalog.active()? };
            if list.is_empty() {
                println!("No products found.");
                return Ok(());
            }
            println!("{:<16} {:<24} {:>10} {:>12}  {}", "ID", "Name", "Price", "Defect", "Flags");
            for p in list {
                let defect = p
                    .price_defect
                    .map(|d| format!("{:.2}", d))
                    .unwrap_or_else(|| "-".to_string());
                let mut flags = String::new();
                if p.favorite {
                    flags.push('*');
                }
                if p.archived {
                    flags.push_str(" [archived]");
                }
                println!(
                    "{:<16} {:<24} {:>10.2} {:>12}  {}",
                    p.id, p.name, p.price, defect, flags
                );
            }
        }
        ProductCommands::Edit { id, name, price, defect_price } => {
            let p = catalog.edit_product(id, &name, price, defect_price)?;
            journal.record(Action::EditProduct, p.name.clone(), now)?;
            println!("Product updated: {}", p.name);
        }
        ProductCommands::Archive { id } => {
            let p = catalog.toggle_archived(id)?;
            journal.record(Action::EditProduct, p.name.clone(), now)?;
            println!(
                "Product {} is now {}.",
                p.name,
                if p.archived { "archived" } else { "active" }
            );
        }
        ProductCommands::Favorite { id } => {
            let p = catalog.toggle_favorite(id)?;
            journal.record(Action::EditProduct, p.name.clone(), now)?;
            println!(
                "Product {} {} favorites.",
                p.name,
                if p.favorite { "added to" } else { "removed from" }
            );
        }
        ProductCommands::Rm { id } => {
            let name = catalog.get(id)?.name;
            catalog.delete_product(id)?;
            journal.record(Action::DeleteProduct, name.clone(), now)?;
            println!("Product {} deleted.", name);
        }
    }
    Ok(())
}

fn run_shift_command(
    command: ShiftCommands,
    service: &ShiftService<FileShiftRepository>,
    settings: &SettingsService<FileSettingsRepository>,
    journal: &JournalService<FileJournalRepository>,
    today: NaiveDate,
    now: chrono::DateTime<Utc>,
) -> Result<()> {
    match command {
        ShiftCommands::Add { hours, date, comment } => {
            let hours = match hours {
                Some(h) => h,
                None => settings.load()?.manual_default_hours,
            };
            let date = date.unwrap_or(today);
            let shift = service.add_manual(date, hours, &comment, now)?;
            journal.record(
                Action::AddShift,
                format!("{} ({}h)", shift.date, shift.hours),
                now,
            )?;
            println!("Shift logged: {} ({}h)", shift.date, shift.hours);
        }
        ShiftCommands::Rm { date } => {
            if service.remove_manual(date)? {
                journal.record(Action::DeleteShift, date.to_string(), now)?;
                println!("Shift on {} removed.", date);
            } else {
                println!("No manual shift on {}.", date);
            }
        }
        ShiftCommands::List => {
            let shifts = service.month_shifts(today.year(), today.month())?;
            if shifts.is_empty() {
                println!("No manual shifts this month.");
                return Ok(());
            }
            for s in &shifts {
                let comment = if s.comment.is_empty() {
                    String::new()
                } else {
                    format!("  # {}", s.comment)
                };
                println!("{}  {:>5.1}h{}", s.date, s.hours, comment);
            }
            println!(
                "Total: {:.1}h",
                service.manual_hours(today.year(), today.month())?
            );
        }
    }
    Ok(())
}

fn run_settings_command(
    command: SettingsCommands,
    settings: &SettingsService<FileSettingsRepository>,
    journal: &JournalService<FileJournalRepository>,
    now: chrono::DateTime<Utc>,
) -> Result<()> {
    match command {
        SettingsCommands::Show => {
            let config = settings.load()?;
            stats::render_settings(&config);
        }
        SettingsCommands::Set {
            base_salary,
            tax_rate,
            advance,
            schedule,
            hours_per_shift,
            manual_hours,
            norm_hours,
            start_date,
        } => {
            let current = settings.load()?;
            let updated = SalaryConfig {
                base_salary: base_salary.unwrap_or(current.base_salary),
                tax_rate: tax_rate.unwrap_or(current.tax_rate),
                advance_amount: advance.unwrap_or(current.advance_amount),
                work_schedule: schedule.unwrap_or(current.work_schedule),
                hours_per_shift: hours_per_shift.unwrap_or(current.hours_per_shift),
                manual_default_hours: manual_hours.unwrap_or(current.manual_default_hours),
                norm_hours_per_month: norm_hours.unwrap_or(current.norm_hours_per_month),
                schedule_start_date: start_date.unwrap_or(current.schedule_start_date),
            };
            let saved = settings.save(updated)?;
            journal.record(Action::Settings, "salary configuration".to_string(), now)?;
            stats::render_settings(&saved);
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Sum")]
    sum: String,
}

impl RecordRow {
    fn new(entry: &Entry, product: Option<&Product>) -> Self {
        Self {
            id: entry.id,
            date: entry.date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
            product: product
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown product".to_string()),
            quantity: entry.quantity,
            price: format!("{:.2}", entry.price),
            sum: format!("{:.2}", entry.sum),
        }
    }
}
