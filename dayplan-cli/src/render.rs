//! Terminal rendering for planner types.
//!
//! Categories map to display colors here, at the presentation layer; only
//! the category key is ever persisted.

use dayplan_core::{Category, Event, Repeat};
use owo_colors::{AnsiColors, OwoColorize};

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            format_time_of_day(self.start_time),
            format_time_of_day(self.end_time())
        );
        let marker = if self.repeat_option != Repeat::None {
            " ↻"
        } else {
            ""
        };

        let short_id: String = self.id.chars().take(8).collect();
        format!(
            "{}  {}  {}{}  {}",
            short_id.dimmed(),
            time,
            self.title.color(category_color(self.category)),
            marker,
            format!("[{}]", self.category).dimmed(),
        )
    }
}

/// Static category → color table.
fn category_color(category: Category) -> AnsiColors {
    match category {
        Category::Appointment => AnsiColors::Cyan,
        Category::Errands => AnsiColors::Yellow,
        Category::Exercise => AnsiColors::Green,
        Category::Family => AnsiColors::Magenta,
        Category::Meal => AnsiColors::BrightYellow,
        Category::Meeting => AnsiColors::Blue,
        Category::Personal => AnsiColors::BrightMagenta,
        Category::Rest => AnsiColors::BrightBlack,
        Category::Social => AnsiColors::BrightCyan,
        Category::Study => AnsiColors::BrightBlue,
        Category::Travel => AnsiColors::BrightGreen,
        Category::Work => AnsiColors::Red,
        Category::Other => AnsiColors::White,
    }
}

/// Seconds from midnight as HH:MM. Times past the end of the day wrap for
/// display only.
pub fn format_time_of_day(seconds: i64) -> String {
    let seconds = seconds.rem_euclid(dayplan_core::SECONDS_PER_DAY);
    format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}
