//! Move an event to a new start time.
//!
//! Moving a repeating occurrence detaches it: the series gains an exception
//! for this date and the moved copy becomes a standalone event.

use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::Planner;

use crate::render::format_time_of_day;
use crate::utils::{find_by_id_prefix, parse_time_of_day};

pub fn run(planner: &mut Planner, id: &str, date: NaiveDate, start: &str) -> Result<()> {
    let event = find_by_id_prefix(&planner.materialize(date), id)?;
    let start_time = parse_time_of_day(start)?;

    planner.commit_move(&event.id, date, start_time, event.duration)?;

    println!(
        "Moved '{}' to {}-{}",
        event.title,
        format_time_of_day(start_time),
        format_time_of_day(start_time + event.duration),
    );
    Ok(())
}
