//! Argument parsing helpers shared by the commands.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use dayplan_core::{Event, Repeat, Weekday};
use std::collections::BTreeSet;

/// Parse YYYY-MM-DD, defaulting to today's local date.
pub fn parse_date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse HH:MM into seconds from midnight.
pub fn parse_time_of_day(s: &str) -> Result<i64> {
    let (hours, minutes) = s
        .split_once(':')
        .with_context(|| format!("Invalid time '{}'. Expected HH:MM", s))?;
    let hours: i64 = hours
        .parse()
        .with_context(|| format!("Invalid hour in '{}'", s))?;
    let minutes: i64 = minutes
        .parse()
        .with_context(|| format!("Invalid minute in '{}'", s))?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        bail!("Time '{}' is out of range", s);
    }
    Ok(hours * 3600 + minutes * 60)
}

/// Parse a repeat rule: "none", "daily", or "weekly:mon,wed,fri".
pub fn parse_repeat(s: &str) -> Result<Repeat> {
    match s {
        "none" => Ok(Repeat::None),
        "daily" => Ok(Repeat::Daily),
        _ => {
            let Some(days) = s.strip_prefix("weekly:") else {
                bail!("Invalid repeat '{}'. Expected none, daily, or weekly:mon,wed", s);
            };
            let days: BTreeSet<Weekday> = days
                .split(',')
                .map(parse_weekday)
                .collect::<Result<_>>()?;
            if days.is_empty() {
                bail!("weekly repeat needs at least one weekday");
            }
            Ok(Repeat::Weekly(days))
        }
    }
}

fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.trim().to_lowercase().as_str() {
        "sun" | "sunday" => Ok(Weekday::Sunday),
        "mon" | "monday" => Ok(Weekday::Monday),
        "tue" | "tuesday" => Ok(Weekday::Tuesday),
        "wed" | "wednesday" => Ok(Weekday::Wednesday),
        "thu" | "thursday" => Ok(Weekday::Thursday),
        "fri" | "friday" => Ok(Weekday::Friday),
        "sat" | "saturday" => Ok(Weekday::Saturday),
        other => Err(anyhow!("Unknown weekday '{}'", other)),
    }
}

/// Find the event on `date` whose id starts with `prefix`.
pub fn find_by_id_prefix(events: &[Event], prefix: &str) -> Result<Event> {
    let matches: Vec<&Event> = events.iter().filter(|e| e.id.starts_with(prefix)).collect();
    match matches.as_slice() {
        [event] => Ok((*event).clone()),
        [] => bail!("No event with id starting with '{}'", prefix),
        _ => bail!("Id prefix '{}' is ambiguous", prefix),
    }
}
