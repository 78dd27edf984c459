//! Recurrence resolution for repeating events.
//!
//! Decides, for a template and a target date, whether an occurrence exists.
//! Exceptions win over the repeat rule; standalone events never resolve
//! through this path (they live directly in their date's collection).

use chrono::NaiveDate;

use crate::event::{Event, Repeat, Weekday};

/// Whether `event` yields an occurrence on `date`.
///
/// Pure and total; never mutates the event or its exception set.
pub fn occurs_on(event: &Event, date: NaiveDate) -> bool {
    if event.exception_dates.contains(&date) {
        return false;
    }

    match &event.repeat_option {
        Repeat::None => false,
        Repeat::Daily => true,
        Repeat::Weekly(days) => days.contains(&Weekday::from_date(date)),
    }
}
