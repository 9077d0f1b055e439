use chrono::Local;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use piecework_core::JournalEvent;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Details")]
    details: String,
}

pub fn show_history(events: &[JournalEvent]) {
    if events.is_empty() {
        println!("No history entries.");
        return;
    }

    let rows: Vec<HistoryRow> = events
        .iter()
        .map(|e| {
            let local = e.timestamp.with_timezone(&Local);
            HistoryRow {
                date: local.format("%Y-%m-%d").to_string(),
                time: local.format("%H:%M").to_string(),
                action: e.action.label().to_string(),
                details: e.details.clone(),
            }
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));
}
