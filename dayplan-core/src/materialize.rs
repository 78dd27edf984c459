//! Day materialization.
//!
//! Combines a date's standalone events with the occurrences its repeating
//! templates project onto that date. Occurrences are transient views of the
//! template as of the read; they only become stored entities when a mutation
//! detaches them.

use chrono::NaiveDate;

use crate::event::Event;
use crate::recurrence::occurs_on;
use crate::store::Store;

/// The render list for `date`: standalone events plus template occurrences,
/// sorted by start time (ties broken by title).
pub fn materialize(store: &Store, date: NaiveDate) -> Vec<Event> {
    let mut events = store.load_day(date);

    events.extend(
        store
            .load_templates()
            .into_iter()
            .filter(|template| occurs_on(template, date)),
    );

    events.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.title.cmp(&b.title))
    });
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, Repeat, Weekday};
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_single(id: &str, start_time: i64) -> Event {
        Event {
            id: id.to_string(),
            series_id: None,
            title: format!("Single {}", id),
            start_time,
            duration: 1_800,
            category: Category::Personal,
            repeat_option: Repeat::None,
            exception_dates: BTreeSet::new(),
        }
    }

    fn make_weekly_template(days: BTreeSet<Weekday>) -> Event {
        Event {
            id: "tpl-1".to_string(),
            series_id: Some("series-1".to_string()),
            title: "Standup".to_string(),
            start_time: 32_400,
            duration: 1_800,
            category: Category::Meeting,
            repeat_option: Repeat::Weekly(days),
            exception_dates: BTreeSet::new(),
        }
    }

    #[test]
    fn test_combines_singles_and_occurrences() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());
        let wednesday = date(2025, 6, 4);

        store.save_day(wednesday, &[make_single("a", 50_400)]).unwrap();
        store
            .save_templates(&[make_weekly_template(BTreeSet::from([
                Weekday::Monday,
                Weekday::Wednesday,
            ]))])
            .unwrap();

        let rendered = materialize(&store, wednesday);
        assert_eq!(rendered.len(), 2);
        // Sorted by start time: the 09:00 occurrence before the 14:00 single
        assert_eq!(rendered[0].id, "tpl-1");
        assert_eq!(rendered[0].start_time, 32_400);
        assert_eq!(rendered[1].id, "a");
    }

    #[test]
    fn test_occurrence_absent_on_non_matching_weekday() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());

        store
            .save_templates(&[make_weekly_template(BTreeSet::from([
                Weekday::Monday,
                Weekday::Wednesday,
            ]))])
            .unwrap();

        let tuesday = date(2025, 6, 3);
        assert!(materialize(&store, tuesday).is_empty());
    }

    #[test]
    fn test_occurrence_carries_template_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());

        store
            .save_templates(&[make_weekly_template(BTreeSet::from([Weekday::Wednesday]))])
            .unwrap();

        let rendered = materialize(&store, date(2025, 6, 4));
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].title, "Standup");
        assert_eq!(rendered[0].duration, 1_800);
        assert_eq!(rendered[0].series_id.as_deref(), Some("series-1"));
    }

    #[test]
    fn test_sorted_by_start_time() {
        let tmp = tempfile::tempdir().unwrap();
        let store = Store::new(tmp.path());
        let day = date(2025, 6, 3);

        store
            .save_day(
                day,
                &[
                    make_single("late", 60_000),
                    make_single("early", 28_800),
                    make_single("mid", 43_200),
                ],
            )
            .unwrap();

        let rendered = materialize(&store, day);
        let starts: Vec<i64> = rendered.iter().map(|e| e.start_time).collect();
        assert_eq!(starts, vec![28_800, 43_200, 60_000]);
    }
}
