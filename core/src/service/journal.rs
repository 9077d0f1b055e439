use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::journal::{Action, JournalEvent};
use crate::repository::journal::JournalRepository;

/// Action history over every mutating operation.
pub struct JournalService<R: JournalRepository> {
    repo: R,
}

impl<R: JournalRepository> JournalService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn record(&self, action: Action, details: String, now: DateTime<Utc>) -> Result<()> {
        self.repo.append(JournalEvent::new(action, details, now))
    }

    /// Events, newest first, optionally narrowed to a calendar day and/or an
    /// action kind.
    pub fn events(
        &self,
        day: Option<NaiveDate>,
        action: Option<Action>,
    ) -> Result<Vec<JournalEvent>> {
        let mut events: Vec<JournalEvent> = self
            .repo
            .list()?
            .into_iter()
            .filter(|e| day.map_or(true, |d| e.timestamp.date_naive() == d))
            .filter(|e| action.map_or(true, |a| e.action == a))
            .collect();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::journal::MAX_JOURNAL_EVENTS;
    use crate::testutil::MockJournalRepo;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn filters_by_day_and_action() {
        let svc = JournalService::new(MockJournalRepo::default());
        svc.record(Action::AddRecord, "first".into(), base()).unwrap();
        svc.record(Action::AddShift, "second".into(), base() + Duration::hours(1))
            .unwrap();
        svc.record(Action::AddRecord, "next day".into(), base() + Duration::days(1))
            .unwrap();

        let all = svc.events(None, None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].details, "next day"); // newest first

        let day_one = svc.events(Some(base().date_naive()), None).unwrap();
        assert_eq!(day_one.len(), 2);

        let records = svc.events(None, Some(Action::AddRecord)).unwrap();
        assert_eq!(records.len(), 2);

        let both = svc
            .events(Some(base().date_naive()), Some(Action::AddShift))
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].details, "second");
    }

    #[test]
    fn history_is_capped_to_newest_events() {
        let svc = JournalService::new(MockJournalRepo::default());
        for i in 0..(MAX_JOURNAL_EVENTS + 5) {
            svc.record(
                Action::AddRecord,
                format!("event {}", i),
                base() + Duration::seconds(i as i64),
            )
            .unwrap();
        }

        let events = svc.events(None, None).unwrap();
        assert_eq!(events.len(), MAX_JOURNAL_EVENTS);
        // The five oldest were dropped.
        assert_eq!(events.last().unwrap().details, "event 5");
    }
}
