//! Persistence for planner events.
//!
//! A [`Store`] is a directory holding one JSON file per key. Day keys are
//! canonical `YYYY-MM-DD` strings and hold that date's standalone events;
//! the single master key holds every repeating template. Writes replace the
//! whole key; callers load, mutate, and save (no partial merges here).
//!
//! Loads never fail: missing or undecodable data is logged and treated as an
//! empty collection, so one corrupt key degrades to "nothing scheduled"
//! without blocking the rest of the store.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::event::Event;

/// Storage key for the master collection of repeating templates.
pub const MASTER_KEY: &str = "masterRepeatingEvents";

/// Canonical storage key for a date.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// File-backed key-value store of event collections.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Standalone events stored under `date`. Empty if nothing is stored or
    /// the stored data cannot be decoded.
    pub fn load_day(&self, date: NaiveDate) -> Vec<Event> {
        self.load_key(&day_key(date))
    }

    /// Overwrite the stored list for `date`.
    pub fn save_day(&self, date: NaiveDate, events: &[Event]) -> PlannerResult<()> {
        self.save_key(&day_key(date), events)
    }

    /// All repeating templates. Empty on absence or decode failure.
    pub fn load_templates(&self) -> Vec<Event> {
        self.load_key(MASTER_KEY)
    }

    /// Overwrite the whole master collection.
    pub fn save_templates(&self, events: &[Event]) -> PlannerResult<()> {
        self.save_key(MASTER_KEY, events)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn load_key(&self, key: &str) -> Vec<Event> {
        let path = self.key_path(key);

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored events, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to decode stored events, treating as empty");
                Vec::new()
            }
        }
    }

    fn save_key(&self, key: &str, events: &[Event]) -> PlannerResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| PlannerError::Serialization(e.to_string()))?;

        tracing::debug!(key, count = events.len(), "writing event collection");
        std::fs::write(self.key_path(key), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Repeat};
    use std::collections::BTreeSet;

    fn make_event(id: &str, start_time: i64) -> Event {
        Event {
            id: id.to_string(),
            series_id: None,
            title: "Errand".to_string(),
            start_time,
            duration: 1_800,
            category: Category::Errands,
            repeat_option: Repeat::None,
            exception_dates: BTreeSet::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_key_is_canonical() {
        assert_eq!(day_key(date(2025, 6, 4)), "2025-06-04");
        assert_eq!(day_key(date(2025, 11, 30)), "2025-11-30");
    }

    #[test]
    fn test_save_and_load_day_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());
        let day = date(2025, 6, 4);

        let events = vec![make_event("a", 3_600), make_event("b", 7_200)];
        store.save_day(day, &events).unwrap();

        assert_eq!(store.load_day(day), events);
    }

    #[test]
    fn test_load_missing_day_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());

        assert!(store.load_day(date(2025, 6, 4)).is_empty());
        assert!(store.load_templates().is_empty());
    }

    #[test]
    fn test_corrupt_key_degrades_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());
        let good_day = date(2025, 6, 4);
        let bad_day = date(2025, 6, 5);

        store.save_day(good_day, &[make_event("a", 3_600)]).unwrap();
        std::fs::write(tmp.path().join("2025-06-05.json"), "{not json").unwrap();

        assert!(store.load_day(bad_day).is_empty());
        // The corrupt key does not affect its neighbors
        assert_eq!(store.load_day(good_day).len(), 1);
    }

    #[test]
    fn test_master_collection_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());

        let mut template = make_event("tpl", 32_400);
        template.series_id = Some("series-1".to_string());
        template.repeat_option = Repeat::Daily;

        store.save_templates(std::slice::from_ref(&template)).unwrap();
        assert_eq!(store.load_templates(), vec![template]);
    }

    #[test]
    fn test_save_overwrites_whole_key() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());
        let day = date(2025, 6, 4);

        store
            .save_day(day, &[make_event("a", 3_600), make_event("b", 7_200)])
            .unwrap();
        store.save_day(day, &[make_event("c", 10_800)]).unwrap();

        let loaded = store.load_day(day);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
    }
}
