//! Event-scheduling core for the dayplan daily planner.
//!
//! This crate holds everything between the UI layer and disk:
//! - `event`: the event model (standalone events, repeating templates)
//! - `recurrence`: whether a template occurs on a given date
//! - `store`: JSON key-value persistence (one key per day, one master key)
//! - `materialize`: the render list for a date
//! - `snap` and `gesture`: drag/resize math, in-memory until commit
//! - `planner`: the mutation engine and notification wiring

pub mod config;
pub mod error;
pub mod event;
pub mod gesture;
pub mod materialize;
pub mod notify;
pub mod planner;
pub mod recurrence;
pub mod snap;
pub mod store;

pub use config::PlannerConfig;
pub use error::{PlannerError, PlannerResult};
pub use event::{Category, Event, EventDraft, Repeat, SECONDS_PER_DAY, Weekday};
pub use gesture::{Drag, DragKind, DragOutcome, SnapPolicy, Tentative};
pub use materialize::materialize;
pub use notify::{ChangeNotifier, SubscriberId};
pub use planner::{DeleteScope, EditScope, Planner};
pub use recurrence::occurs_on;
pub use store::{MASTER_KEY, Store, day_key};
