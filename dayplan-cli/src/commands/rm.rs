//! Remove an event, an occurrence, or a whole series.

use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::{DeleteScope, Planner, Repeat};

use crate::utils::find_by_id_prefix;

pub fn run(planner: &mut Planner, id: &str, date: NaiveDate, all: bool) -> Result<()> {
    let event = find_by_id_prefix(&planner.materialize(date), id)?;

    let scope = if all {
        DeleteScope::AllOccurrences
    } else {
        DeleteScope::ThisOccurrence
    };
    planner.delete_event(&event.id, date, scope)?;

    match (event.repeat_option != Repeat::None, all) {
        (true, true) => println!("Removed series '{}'", event.title),
        (true, false) => println!(
            "Removed '{}' on {} (series keeps other days)",
            event.title,
            date.format("%Y-%m-%d")
        ),
        _ => println!("Removed '{}'", event.title),
    }
    Ok(())
}
