//! Change notification for day views.
//!
//! An explicit observer list owned by the planner, not a process-global.
//! Day views subscribe to learn that a mutation committed and re-materialize;
//! the notification carries no payload beyond "something changed".

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Callback registry signalled after every committed mutation.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut()>)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Signal every subscriber, in subscription order.
    pub fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback();
        }
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_all_subscribers() {
        let mut notifier = ChangeNotifier::new();
        let count_a = Rc::new(Cell::new(0));
        let count_b = Rc::new(Cell::new(0));

        let a = Rc::clone(&count_a);
        notifier.subscribe(move || a.set(a.get() + 1));
        let b = Rc::clone(&count_b);
        notifier.subscribe(move || b.set(b.get() + 1));

        notifier.notify();
        notifier.notify();

        assert_eq!(count_a.get(), 2);
        assert_eq!(count_b.get(), 2);
    }

    #[test]
    fn test_unsubscribed_callback_not_called() {
        let mut notifier = ChangeNotifier::new();
        let count = Rc::new(Cell::new(0));

        let c = Rc::clone(&count);
        let id = notifier.subscribe(move || c.set(c.get() + 1));

        notifier.notify();
        notifier.unsubscribe(id);
        notifier.notify();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_id_is_harmless() {
        let mut notifier = ChangeNotifier::new();
        let id = notifier.subscribe(|| {});
        notifier.unsubscribe(id);
        notifier.unsubscribe(id);
        notifier.notify();
    }
}
