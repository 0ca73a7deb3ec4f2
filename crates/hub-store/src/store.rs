//! A small observable cell.
//!
//! `Store<T>` holds one value, hands out snapshots with [`Store::get`], and
//! calls its subscribers synchronously, in registration order, every time the
//! value is replaced. A store may carry one write-through hook, fixed at
//! construction, that runs before each replacement is committed; if the hook
//! fails, the replacement is abandoned and the error goes back to the caller.
//!
//! Locks are never held while subscribers run, so a subscriber may read the
//! store or (un)subscribe from its callback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use crate::error::StoreError;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;
type WriteThrough<T> = Box<dyn Fn(&T) -> Result<(), StoreError> + Send + Sync>;

struct Shared<T> {
    value: RwLock<T>,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
    write_through: Option<WriteThrough<T>>,
}

trait Detach: Send + Sync {
    fn detach(&self, id: u64);
}

impl<T: Send + Sync> Detach for Shared<T> {
    fn detach(&self, id: u64) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listenerId, _)| *listenerId != id);
    }
}

pub struct Store<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Store<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn create(initial: T) -> Self {
        Self::build(initial, None)
    }

    /// Creates a store whose every `set`/`update` first passes the new value
    /// to `hook`.
    pub fn with_write_through<F>(initial: T, hook: F) -> Self
    where
        F: Fn(&T) -> Result<(), StoreError> + Send + Sync + 'static,
    {
        Self::build(initial, Some(Box::new(hook)))
    }

    fn build(initial: T, write_through: Option<WriteThrough<T>>) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(initial),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                write_through,
            }),
        }
    }

    pub fn get(&self) -> T {
        self.shared
            .value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the value and notifies every subscriber, even when `next`
    /// equals the current value.
    pub fn set(&self, next: T) -> Result<(), StoreError> {
        if let Some(hook) = &self.shared.write_through {
            hook(&next)?;
        }

        *self
            .shared
            .value
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next.clone();

        self.notify(&next);
        Ok(())
    }

    pub fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.get());
        self.set(next)
    }

    /// Registers `listener`, calls it once with the current value, then again
    /// after every change until the returned handle is unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener<T> = Arc::new(listener);

        self.shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::clone(&listener)));

        listener(&self.get());

        let shared: Arc<dyn Detach> = self.shared.clone();
        Subscription {
            id,
            store: Arc::downgrade(&shared),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self
            .shared
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(value);
        }
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping it does not unsubscribe; call [`Subscription::unsubscribe`].
pub struct Subscription {
    id: u64,
    store: Weak<dyn Detach>,
}

impl Subscription {
    /// Stops notifications. Calling it again, or after the store is gone, does
    /// nothing.
    pub fn unsubscribe(&self) {
        if let Some(store) = self.store.upgrade() {
            store.detach(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&String) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value: &String| {
            sink.lock().unwrap().push(value.clone())
        })
    }

    #[test]
    fn subscribe_delivers_current_value_immediately() {
        let store = Store::create("x".to_string());
        let (seen, listener) = recorder();

        let _subscription = store.subscribe(listener);

        assert_eq!(*seen.lock().unwrap(), vec!["x"]);
    }

    #[test]
    fn set_notifies_each_subscriber_once() {
        let store = Store::create("x".to_string());
        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        store.set("y".to_string()).unwrap();

        assert_eq!(store.get(), "y");
        assert_eq!(*seen.lock().unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let store = Store::create(String::new());
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&order);
        let _a = store.subscribe(move |v: &String| first.lock().unwrap().push(format!("A:{v}")));
        let second = Arc::clone(&order);
        let _b = store.subscribe(move |v: &String| second.lock().unwrap().push(format!("B:{v}")));

        order.lock().unwrap().clear();
        store.set("z".to_string()).unwrap();

        assert_eq!(*order.lock().unwrap(), vec!["A:z", "B:z"]);
    }

    #[test]
    fn setting_the_same_value_still_notifies() {
        let store = Store::create("same".to_string());
        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        store.set("same".to_string()).unwrap();
        store.set("same".to_string()).unwrap();

        assert_eq!(seen.lock().unwrap().len(), 3);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let store = Store::create(0u32);
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move |_: &u32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        subscription.unsubscribe();
        subscription.unsubscribe();
        store.set(1).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_after_store_dropped_is_a_no_op() {
        let store = Store::create(0u32);
        let subscription = store.subscribe(|_: &u32| {});
        drop(store);
        subscription.unsubscribe();
    }

    #[test]
    fn update_derives_from_current_value() {
        let store = Store::create(2u32);
        store.update(|v| v * 21).unwrap();
        assert_eq!(store.get(), 42);
    }

    #[test]
    fn listener_can_read_store_during_notification() {
        let store = Store::create("a".to_string());
        let reader = store.clone();
        let (seen, listener) = recorder();
        let _echo = store.subscribe(move |_: &String| listener(&reader.get()));

        store.set("b".to_string()).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn failed_write_through_keeps_value_and_skips_subscribers() {
        let store = Store::with_write_through("kept".to_string(), |next: &String| {
            if next == "bad" {
                Err(StorageError::Rejected("quota exceeded".into()).into())
            } else {
                Ok(())
            }
        });
        let (seen, listener) = recorder();
        let _subscription = store.subscribe(listener);

        let err = store.set("bad".to_string()).unwrap_err();

        assert!(matches!(err, StoreError::Storage(StorageError::Rejected(_))));
        assert_eq!(store.get(), "kept");
        assert_eq!(*seen.lock().unwrap(), vec!["kept"]);
    }
}
