//! Change an event's end time.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use dayplan_core::Planner;

use crate::render::format_time_of_day;
use crate::utils::{find_by_id_prefix, parse_time_of_day};

pub fn run(planner: &mut Planner, id: &str, date: NaiveDate, end: &str) -> Result<()> {
    let event = find_by_id_prefix(&planner.materialize(date), id)?;
    let end_time = parse_time_of_day(end)?;

    if end_time <= event.start_time {
        bail!(
            "End {} is not after start {}",
            format_time_of_day(end_time),
            format_time_of_day(event.start_time)
        );
    }

    planner.commit_resize(&event.id, date, event.start_time, end_time - event.start_time)?;

    println!(
        "Resized '{}' to {}-{}",
        event.title,
        format_time_of_day(event.start_time),
        format_time_of_day(end_time),
    );
    Ok(())
}
