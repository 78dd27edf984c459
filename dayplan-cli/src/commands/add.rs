//! Add a standalone or repeating event.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use dayplan_core::{Category, EventDraft, Planner, Repeat};

use crate::render::Render;
use crate::utils::{parse_repeat, parse_time_of_day};

pub fn run(
    planner: &mut Planner,
    title: String,
    date: NaiveDate,
    start: &str,
    end: &str,
    category: &str,
    repeat: &str,
) -> Result<()> {
    let category: Category = category.parse().map_err(|e: String| anyhow!(e))?;
    let repeat_option = parse_repeat(repeat)?;

    let draft = EventDraft {
        title,
        category,
        date,
        start_time: parse_time_of_day(start)?,
        end_time: parse_time_of_day(end)?,
        repeat_option,
    };

    let event = planner.create_event(&draft)?;

    if event.repeat_option == Repeat::None {
        println!("Added to {}:", date.format("%Y-%m-%d"));
    } else {
        println!("Added repeating event:");
    }
    println!("  {}", event.render());
    Ok(())
}
