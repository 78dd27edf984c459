//! The planner: mutation engine and render-list entry point.
//!
//! All mutations are synchronous load-modify-save cycles against the
//! [`Store`], one collection at a time. Detaching an occurrence touches two
//! keys (master exception, then the day's standalone list); that pair is not
//! transactional. The master write goes first so a crash between the two
//! loses the occurrence instead of duplicating it.

use chrono::NaiveDate;

use crate::error::{PlannerError, PlannerResult};
use crate::event::{Event, EventDraft, Repeat};
use crate::materialize;
use crate::notify::{ChangeNotifier, SubscriberId};
use crate::store::Store;

/// Which occurrences an edit on a repeating event applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    /// Detach this date's occurrence and edit only it.
    ThisOccurrence,
    /// Rewrite the template, affecting every non-detached occurrence.
    AllFuture,
}

/// Which occurrences a delete on a repeating event applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
    /// Suppress only this date via an exception.
    ThisOccurrence,
    /// Remove the template and with it every remaining occurrence.
    AllOccurrences,
}

/// Owns the store and the change-notification bus; every UI-facing commit
/// operation goes through here.
#[derive(Debug)]
pub struct Planner {
    store: Store,
    notifier: ChangeNotifier,
}

impl Planner {
    pub fn new(store: Store) -> Self {
        Planner {
            store,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Register a callback invoked after every committed mutation.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriberId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.notifier.unsubscribe(id)
    }

    /// The render list for `date`: standalone events plus template
    /// occurrences, sorted by start time.
    pub fn materialize(&self, date: NaiveDate) -> Vec<Event> {
        materialize::materialize(&self.store, date)
    }

    // =========================================================================
    // Create
    // =========================================================================

    /// Create an event from a validated draft. Standalone events land in the
    /// draft's day collection, repeating events become master templates.
    pub fn create_event(&mut self, draft: &EventDraft) -> PlannerResult<Event> {
        draft.validate()?;

        let event = if draft.repeat_option == Repeat::None {
            let event = Event {
                id: Event::new_id(),
                series_id: None,
                title: draft.title.clone(),
                start_time: draft.start_time,
                duration: draft.duration(),
                category: draft.category,
                repeat_option: Repeat::None,
                exception_dates: Default::default(),
            };
            let mut day = self.store.load_day(draft.date);
            day.push(event.clone());
            self.store.save_day(draft.date, &day)?;
            event
        } else {
            let event = Event {
                id: Event::new_id(),
                series_id: Some(Event::new_id()),
                title: draft.title.clone(),
                start_time: draft.start_time,
                duration: draft.duration(),
                category: draft.category,
                repeat_option: draft.repeat_option.clone(),
                exception_dates: Default::default(),
            };
            let mut templates = self.store.load_templates();
            templates.push(event.clone());
            self.store.save_templates(&templates)?;
            event
        };

        self.notifier.notify();
        Ok(event)
    }

    // =========================================================================
    // Move / resize commit
    // =========================================================================

    /// Persist the snapped values of a finished move gesture.
    pub fn commit_move(
        &mut self,
        event_id: &str,
        date: NaiveDate,
        start_time: i64,
        duration: i64,
    ) -> PlannerResult<()> {
        self.commit_times(event_id, date, start_time, duration)
    }

    /// Persist the snapped values of a finished resize gesture.
    pub fn commit_resize(
        &mut self,
        event_id: &str,
        date: NaiveDate,
        start_time: i64,
        duration: i64,
    ) -> PlannerResult<()> {
        self.commit_times(event_id, date, start_time, duration)
    }

    fn commit_times(
        &mut self,
        event_id: &str,
        date: NaiveDate,
        start_time: i64,
        duration: i64,
    ) -> PlannerResult<()> {
        if duration <= 0 {
            return Err(PlannerError::Validation(format!(
                "Duration must be positive, got {}s",
                duration
            )));
        }

        // Standalone event: update in place within its day collection.
        let mut day = self.store.load_day(date);
        if let Some(event) = day.iter_mut().find(|e| e.id == event_id) {
            event.start_time = start_time;
            event.duration = duration;
            self.store.save_day(date, &day)?;
            self.notifier.notify();
            return Ok(());
        }

        // Template occurrence: suppress it on this date, then detach a
        // standalone copy carrying the new times.
        let mut templates = self.store.load_templates();
        if let Some(template) = templates.iter_mut().find(|t| t.id == event_id) {
            let detached = Event {
                id: Event::new_id(),
                series_id: None,
                title: template.title.clone(),
                start_time,
                duration,
                category: template.category,
                repeat_option: Repeat::None,
                exception_dates: Default::default(),
            };
            template.exception_dates.insert(date);
            self.store.save_templates(&templates)?;

            day.push(detached);
            self.store.save_day(date, &day)?;
            self.notifier.notify();
            return Ok(());
        }

        // Referenced event vanished (e.g. deleted since materialization).
        // Treated as a no-op; the next materialize shows current truth.
        tracing::warn!(event_id, %date, "commit target not found, skipping");
        Ok(())
    }

    // =========================================================================
    // Edit
    // =========================================================================

    /// Apply a form edit to the event with `event_id` as shown on `date`.
    ///
    /// For standalone events `scope` is ignored. The draft's date may differ
    /// from `date`, which moves the event between day collections.
    pub fn edit_event(
        &mut self,
        event_id: &str,
        date: NaiveDate,
        scope: EditScope,
        draft: &EventDraft,
    ) -> PlannerResult<()> {
        draft.validate()?;

        let mut day = self.store.load_day(date);
        if let Some(position) = day.iter().position(|e| e.id == event_id) {
            if draft.repeat_option == Repeat::None {
                self.edit_standalone(day, position, date, draft)?;
            } else {
                // Single event gains a repeat rule: it becomes a series.
                let mut event = day.remove(position);
                self.store.save_day(date, &day)?;

                event.series_id = Some(Event::new_id());
                event.title = draft.title.clone();
                event.category = draft.category;
                event.start_time = draft.start_time;
                event.duration = draft.duration();
                event.repeat_option = draft.repeat_option.clone();

                let mut templates = self.store.load_templates();
                templates.push(event);
                self.store.save_templates(&templates)?;
            }
            self.notifier.notify();
            return Ok(());
        }

        let mut templates = self.store.load_templates();
        let Some(position) = templates.iter().position(|t| t.id == event_id) else {
            tracing::warn!(event_id, %date, "edit target not found, skipping");
            return Ok(());
        };

        match scope {
            EditScope::ThisOccurrence => {
                templates[position].exception_dates.insert(date);
                self.store.save_templates(&templates)?;

                let detached = Event {
                    id: Event::new_id(),
                    series_id: None,
                    title: draft.title.clone(),
                    start_time: draft.start_time,
                    duration: draft.duration(),
                    category: draft.category,
                    repeat_option: Repeat::None,
                    exception_dates: Default::default(),
                };
                let mut target_day = self.store.load_day(draft.date);
                target_day.push(detached);
                self.store.save_day(draft.date, &target_day)?;
            }
            EditScope::AllFuture => {
                if draft.repeat_option == Repeat::None {
                    // The series stops repeating: it collapses into a single
                    // event on the draft's date. Already-detached events are
                    // independent and unaffected.
                    let mut event = templates.remove(position);
                    self.store.save_templates(&templates)?;

                    event.series_id = None;
                    event.title = draft.title.clone();
                    event.category = draft.category;
                    event.start_time = draft.start_time;
                    event.duration = draft.duration();
                    event.repeat_option = Repeat::None;
                    event.exception_dates.clear();

                    let mut target_day = self.store.load_day(draft.date);
                    target_day.push(event);
                    self.store.save_day(draft.date, &target_day)?;
                } else {
                    let template = &mut templates[position];
                    template.title = draft.title.clone();
                    template.category = draft.category;
                    template.start_time = draft.start_time;
                    template.duration = draft.duration();
                    template.repeat_option = draft.repeat_option.clone();
                    self.store.save_templates(&templates)?;
                }
            }
        }

        self.notifier.notify();
        Ok(())
    }

    fn edit_standalone(
        &mut self,
        mut day: Vec<Event>,
        position: usize,
        date: NaiveDate,
        draft: &EventDraft,
    ) -> PlannerResult<()> {
        let event = &mut day[position];
        event.title = draft.title.clone();
        event.category = draft.category;
        event.start_time = draft.start_time;
        event.duration = draft.duration();

        if draft.date == date {
            self.store.save_day(date, &day)?;
        } else {
            // The form moved the event to another date.
            let event = day.remove(position);
            self.store.save_day(date, &day)?;

            let mut target_day = self.store.load_day(draft.date);
            target_day.push(event);
            self.store.save_day(draft.date, &target_day)?;
        }
        Ok(())
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Delete the event with `event_id` as shown on `date`.
    ///
    /// For standalone events `scope` is ignored. Deleting all occurrences of
    /// a series leaves previously detached standalone events alone; they are
    /// independent entities by then.
    pub fn delete_event(
        &mut self,
        event_id: &str,
        date: NaiveDate,
        scope: DeleteScope,
    ) -> PlannerResult<()> {
        let mut day = self.store.load_day(date);
        if let Some(position) = day.iter().position(|e| e.id == event_id) {
            day.remove(position);
            self.store.save_day(date, &day)?;
            self.notifier.notify();
            return Ok(());
        }

        let mut templates = self.store.load_templates();
        let Some(position) = templates.iter().position(|t| t.id == event_id) else {
            tracing::warn!(event_id, %date, "delete target not found, skipping");
            return Ok(());
        };

        match scope {
            DeleteScope::ThisOccurrence => {
                templates[position].exception_dates.insert(date);
            }
            DeleteScope::AllOccurrences => {
                templates.remove(position);
            }
        }
        self.store.save_templates(&templates)?;
        self.notifier.notify();
        Ok(())
    }
}
