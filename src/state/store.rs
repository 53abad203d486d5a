//! State container: reducer, middleware and change notifications

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};
use tracing::{debug, warn};

use super::{reduce, Action, ActionError, TimerState};

/// Observer of committed transitions, run before subscribers are notified
pub trait Middleware {
    /// Called once for every action the reducer accepted, with the new state
    fn after_commit(&mut self, action: &Action, state: &TimerState);

    /// Called when the store is about to go away
    fn flush(&mut self, _state: &TimerState) {}
}

type Listener = Box<dyn FnMut(&TimerState)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
    /// Set while `dispatch` has the entries moved out for notification
    notifying: bool,
    /// Ids unsubscribed while `notifying`
    removed: Vec<u64>,
}

impl Listeners {
    /// Detach the listener for `id`; the caller drops it once no borrow is held
    fn remove(&mut self, id: u64) -> Option<Listener> {
        if self.notifying {
            self.removed.push(id);
        }
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }
}

/// Handle returned by [`Store::subscribe`]; dropping it removes the listener
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Stop receiving notifications
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let detached = listeners.borrow_mut().remove(self.id);
            drop(detached);
        }
    }
}

/// Owns the current state and serializes every transition through the reducer
pub struct Store {
    state: TimerState,
    middleware: Vec<Box<dyn Middleware>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl Store {
    /// Create a store holding `initial_state`
    pub fn new(initial_state: TimerState) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    /// Add middleware; it sees every transition committed after this call
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Register a listener invoked synchronously after each committed transition.
    ///
    /// A listener may drop subscriptions, its own included, from inside the
    /// callback; a listener removed mid-notification is not called again.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&TimerState) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Run `action` through the reducer, then middleware, then listeners.
    ///
    /// A refused action leaves the state as it was and reaches neither
    /// middleware nor listeners.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let next = match reduce(&self.state, &action) {
            Ok(next) => next,
            Err(e) => {
                warn!("Rejected {}: {}", action.name(), e);
                return Err(e);
            }
        };

        if next != self.state {
            debug!("{} committed: time={} running={}", action.name(), next.time, next.running);
        }
        self.state = next;

        for middleware in &mut self.middleware {
            middleware.after_commit(&action, &self.state);
        }

        self.notify();
        Ok(())
    }

    fn notify(&self) {
        let mut active = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.notifying = true;
            std::mem::take(&mut listeners.entries)
        };

        for (id, listener) in active.iter_mut() {
            if self.listeners.borrow().removed.contains(id) {
                continue;
            }
            listener(&self.state);
        }

        let dropped: Vec<(u64, Listener)> = {
            let mut listeners = self.listeners.borrow_mut();
            let removed = std::mem::take(&mut listeners.removed);
            listeners.notifying = false;

            let (kept, dropped) = active
                .into_iter()
                .partition(|(id, _)| !removed.contains(id));
            let added = std::mem::replace(&mut listeners.entries, kept);
            listeners.entries.extend(added);
            dropped
        };
        // Listener closures may own subscriptions, so release them unborrowed
        drop(dropped);
    }

    /// Give middleware a chance to write out anything still pending
    pub fn flush(&mut self) {
        for middleware in &mut self.middleware {
            middleware.flush(&self.state);
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Middleware for Recorder {
        fn after_commit(&mut self, action: &Action, state: &TimerState) {
            self.0
                .borrow_mut()
                .push(format!("{}:{}", action.name(), state.time));
        }

        fn flush(&mut self, _state: &TimerState) {
            self.0.borrow_mut().push("flush".to_string());
        }
    }

    #[test]
    fn start_then_three_ticks() {
        let mut store = Store::new(TimerState::new());
        store.dispatch(Action::ToggleRunning).unwrap();
        for _ in 0..3 {
            store.dispatch(Action::DecrementSecond).unwrap();
        }
        assert_eq!(store.state().time, 297);
        assert!(store.state().running);
    }

    #[test]
    fn complete_task_keeps_current_text() {
        let mut store = Store::new(TimerState::new());
        store
            .dispatch(Action::ChangeTask("write spec".to_string()))
            .unwrap();
        store
            .dispatch(Action::CompleteTask {
                time_end: 1_700_000_000_000,
            })
            .unwrap();

        let state = store.state();
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].text, "write spec");
        assert_eq!(state.tasks[0].time_end, 1_700_000_000_000);
        assert_eq!(state.task, "write spec");
    }

    #[test]
    fn listeners_see_committed_state() {
        let mut store = Store::new(TimerState::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move |state| sink.borrow_mut().push(state.running));

        store.dispatch(Action::ToggleRunning).unwrap();
        store.dispatch(Action::ToggleRunning).unwrap();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Store::new(TimerState::new());
        let count = Rc::new(Cell::new(0));

        let counter = Rc::clone(&count);
        let first = store.subscribe(move |_| counter.set(counter.get() + 1));
        let counter = Rc::clone(&count);
        let second = store.subscribe(move |_| counter.set(counter.get() + 10));

        store.dispatch(Action::Reset).unwrap();
        assert_eq!(count.get(), 11);

        first.unsubscribe();
        store.dispatch(Action::Reset).unwrap();
        assert_eq!(count.get(), 21);

        drop(second);
        store.dispatch(Action::Reset).unwrap();
        assert_eq!(count.get(), 21);
    }

    #[test]
    fn middleware_runs_before_listeners_and_sees_new_state() {
        let mut store = Store::new(TimerState::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        store.add_middleware(Box::new(Recorder(Rc::clone(&log))));

        let sink = Rc::clone(&log);
        let _subscription = store.subscribe(move |_| sink.borrow_mut().push("listener".to_string()));

        store.dispatch(Action::ChangeStartTime(60)).unwrap();
        store.flush();

        assert_eq!(
            *log.borrow(),
            vec!["CHANGE_START_TIME:60", "listener", "flush"]
        );
    }

    #[test]
    fn rejected_action_changes_nothing() {
        let mut store = Store::new(TimerState::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        store.add_middleware(Box::new(Recorder(Rc::clone(&log))));
        let notified = Rc::new(Cell::new(false));
        let flag = Rc::clone(&notified);
        let _subscription = store.subscribe(move |_| flag.set(true));

        let result = store.dispatch(Action::RemoveTask(0));

        assert_eq!(
            result,
            Err(ActionError::TaskIndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(store.state(), &TimerState::new());
        assert!(log.borrow().is_empty());
        assert!(!notified.get());
    }

    #[test]
    fn listener_can_unsubscribe_itself() {
        let mut store = Store::new(TimerState::new());
        let calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let counter = Rc::clone(&calls);
        let own = Rc::clone(&slot);
        let subscription = store.subscribe(move |_| {
            counter.set(counter.get() + 1);
            own.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        store.dispatch(Action::Reset).unwrap();
        store.dispatch(Action::Reset).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn listener_can_unsubscribe_a_later_one() {
        let mut store = Store::new(TimerState::new());
        let later_calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let target = Rc::clone(&slot);
        let _first = store.subscribe(move |_| {
            target.borrow_mut().take();
        });
        let counter = Rc::clone(&later_calls);
        *slot.borrow_mut() = Some(store.subscribe(move |_| counter.set(counter.get() + 1)));

        store.dispatch(Action::Reset).unwrap();
        store.dispatch(Action::Reset).unwrap();

        assert_eq!(later_calls.get(), 0);
    }

    #[test]
    fn dropping_store_flushes_middleware() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut store = Store::new(TimerState::new());
            store.add_middleware(Box::new(Recorder(Rc::clone(&log))));
            store.dispatch(Action::Reset).unwrap();
        }
        assert_eq!(*log.borrow(), vec!["RESET:300", "flush"]);
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = Store::new(TimerState::new());
        let subscription = store.subscribe(|_| {});
        drop(store);
        drop(subscription);
    }
}
