//! Show the schedule for one day.

use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::Planner;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(planner: &Planner, date: NaiveDate) -> Result<()> {
    let events = planner.materialize(date);

    println!("{}", date.format("%A, %Y-%m-%d").to_string().bold());

    if events.is_empty() {
        println!("  nothing scheduled");
        return Ok(());
    }

    for event in &events {
        println!("  {}", event.render());
    }

    Ok(())
}
