use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Only the most recent events are retained; older ones are dropped on save.
pub const MAX_JOURNAL_EVENTS: usize = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    AddRecord,
    DeleteRecord,
    AddProduct,
    EditProduct,
    DeleteProduct,
    AddShift,
    DeleteShift,
    Settings,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::AddRecord => "record added",
            Action::DeleteRecord => "record deleted",
            Action::AddProduct => "product added",
            Action::EditProduct => "product edited",
            Action::DeleteProduct => "product deleted",
            Action::AddShift => "shift added",
            Action::DeleteShift => "shift deleted",
            Action::Settings => "settings changed",
        }
    }
}

/// One line of the action history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JournalEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: Action,
    pub details: String,
}

impl JournalEvent {
    pub fn new(action: Action, details: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            action,
            details,
        }
    }
}
