//! Planner event types.
//!
//! An [`Event`] is either a *standalone* event stored under exactly one date
//! (`repeat_option == Repeat::None`) or a *template* stored once in the master
//! collection and projected onto matching dates at render time.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlannerError, PlannerResult};

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A planner event.
///
/// `start_time` and `duration` are seconds relative to local midnight of the
/// owning date, never absolute timestamps. `duration` is strictly positive
/// for every persisted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,

    /// Shared by all occurrences of one repeating series; `None` for
    /// standalone events, including occurrences detached from a series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<String>,

    pub title: String,

    /// Seconds from local midnight of the owning date.
    pub start_time: i64,

    /// Seconds, always > 0 once persisted.
    pub duration: i64,

    pub category: Category,

    pub repeat_option: Repeat,

    /// Dates on which this template is suppressed. Always empty on
    /// standalone events.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exception_dates: BTreeSet<NaiveDate>,
}

impl Event {
    /// Mint a fresh event id.
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Whether this event is a repeating template (lives in the master
    /// collection) rather than a standalone event.
    pub fn is_template(&self) -> bool {
        self.repeat_option != Repeat::None
    }

    /// End of the event, seconds from midnight.
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }
}

// =============================================================================
// Repeat rule
// =============================================================================

/// How an event repeats.
///
/// Serialized externally tagged: `"none"`, `"daily"`, or
/// `{"weekly": [weekday ints]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    None,
    Daily,
    Weekly(BTreeSet<Weekday>),
}

/// Day of the week, numbered Sunday=1 through Saturday=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// The weekday of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Weekday::Sunday),
            2 => Ok(Weekday::Monday),
            3 => Ok(Weekday::Tuesday),
            4 => Ok(Weekday::Wednesday),
            5 => Ok(Weekday::Thursday),
            6 => Ok(Weekday::Friday),
            7 => Ok(Weekday::Saturday),
            _ => Err(format!("Invalid weekday number {} (expected 1-7)", n)),
        }
    }
}

// Weekdays are persisted as plain ints (1=Sunday .. 7=Saturday).
impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        Weekday::try_from(n).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Fixed set of event categories. Display color is a presentation concern
/// derived from the category key; only the key is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appointment,
    Errands,
    Exercise,
    Family,
    Meal,
    Meeting,
    Personal,
    Rest,
    Social,
    Study,
    Travel,
    Work,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appointment => "appointment",
            Category::Errands => "errands",
            Category::Exercise => "exercise",
            Category::Family => "family",
            Category::Meal => "meal",
            Category::Meeting => "meeting",
            Category::Personal => "personal",
            Category::Rest => "rest",
            Category::Social => "social",
            Category::Study => "study",
            Category::Travel => "travel",
            Category::Work => "work",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointment" => Ok(Category::Appointment),
            "errands" => Ok(Category::Errands),
            "exercise" => Ok(Category::Exercise),
            "family" => Ok(Category::Family),
            "meal" => Ok(Category::Meal),
            "meeting" => Ok(Category::Meeting),
            "personal" => Ok(Category::Personal),
            "rest" => Ok(Category::Rest),
            "social" => Ok(Category::Social),
            "study" => Ok(Category::Study),
            "travel" => Ok(Category::Travel),
            "work" => Ok(Category::Work),
            "other" => Ok(Category::Other),
            _ => Err(format!("Unknown category '{}'", s)),
        }
    }
}

// =============================================================================
// Draft
// =============================================================================

/// In-progress form input for creating or editing an event, kept apart from
/// committed state. Times come in as start/end pairs the way the form
/// captures them; validation happens once, at commit.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub category: Category,
    /// The date the event belongs to (ignored for templates).
    pub date: NaiveDate,
    /// Seconds from midnight.
    pub start_time: i64,
    /// Seconds from midnight, exclusive end.
    pub end_time: i64,
    pub repeat_option: Repeat,
}

impl EventDraft {
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Reject drafts that would produce a non-positive duration or a start
    /// outside the day.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.end_time <= self.start_time {
            return Err(PlannerError::Validation(format!(
                "End time ({}s) must be after start time ({}s)",
                self.end_time, self.start_time
            )));
        }
        if self.start_time < 0 || self.start_time >= SECONDS_PER_DAY {
            return Err(PlannerError::Validation(format!(
                "Start time {}s is outside the day",
                self.start_time
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_template() -> Event {
        Event {
            id: "evt-1".to_string(),
            series_id: Some("series-1".to_string()),
            title: "Morning run".to_string(),
            start_time: 25_200,
            duration: 1_800,
            category: Category::Exercise,
            repeat_option: Repeat::Weekly(BTreeSet::from([Weekday::Monday, Weekday::Wednesday])),
            exception_dates: BTreeSet::new(),
        }
    }

    #[test]
    fn test_event_wire_format() {
        let event = make_template();
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        assert_eq!(json["id"], "evt-1");
        assert_eq!(json["seriesId"], "series-1");
        assert_eq!(json["startTime"], 25_200);
        assert_eq!(json["duration"], 1_800);
        assert_eq!(json["category"], "exercise");
        assert_eq!(json["repeatOption"]["weekly"][0], 2);
        assert_eq!(json["repeatOption"]["weekly"][1], 4);
        // No exceptions recorded yet, so the field is omitted entirely
        assert!(json.get("exceptionDates").is_none());
    }

    #[test]
    fn test_standalone_wire_format_omits_series_fields() {
        let event = Event {
            id: "evt-2".to_string(),
            series_id: None,
            title: "Dentist".to_string(),
            start_time: 36_000,
            duration: 3_600,
            category: Category::Appointment,
            repeat_option: Repeat::None,
            exception_dates: BTreeSet::new(),
        };
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        assert!(json.get("seriesId").is_none());
        assert_eq!(json["repeatOption"], "none");
    }

    #[test]
    fn test_repeat_roundtrip() {
        for repeat in [
            Repeat::None,
            Repeat::Daily,
            Repeat::Weekly(BTreeSet::from([Weekday::Friday])),
        ] {
            let json = serde_json::to_string(&repeat).unwrap();
            let back: Repeat = serde_json::from_str(&json).unwrap();
            assert_eq!(back, repeat);
        }
    }

    #[test]
    fn test_exception_dates_serialize_as_iso_strings() {
        let mut event = make_template();
        event
            .exception_dates
            .insert(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["exceptionDates"][0], "2025-06-04");
    }

    #[test]
    fn test_weekday_from_date() {
        // 2025-06-04 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        assert_eq!(Weekday::from_date(date), Weekday::Wednesday);
        assert_eq!(Weekday::from_date(date).number(), 4);

        // 2025-06-08 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        assert_eq!(Weekday::from_date(sunday).number(), 1);
    }

    #[test]
    fn test_weekday_rejects_out_of_range() {
        assert!(Weekday::try_from(0).is_err());
        assert!(Weekday::try_from(8).is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("meeting".parse::<Category>().unwrap(), Category::Meeting);
        assert!("brunch".parse::<Category>().is_err());
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = EventDraft {
            title: "Lunch".to_string(),
            category: Category::Meal,
            date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            start_time: 43_200,
            end_time: 45_000,
            repeat_option: Repeat::None,
        };
        assert!(draft.validate().is_ok());

        draft.end_time = draft.start_time;
        assert!(draft.validate().is_err());

        draft.end_time = draft.start_time - 600;
        assert!(draft.validate().is_err());
    }
}
