//! LiveData Implementation
//!
//! A LiveData is an observable holder for a single value. It holds the most
//! recently posted value (or nothing, before the first post) and a list of
//! observers interested in changes.
//!
//! # How LiveData Works
//!
//! 1. A view-model creates the holder and posts values into it.
//!
//! 2. A view attaches an observer. If a value is already present, the
//!    observer receives it immediately (late-subscription replay).
//!
//! 3. Every later post is broadcast synchronously to all observers, in
//!    registration order.
//!
//! 4. Disposing the returned subscription detaches the observer; further
//!    posts no longer reach it.
//!
//! # Thread Safety
//!
//! The value and the observer list are each protected by a RwLock. No lock
//! is held while observer callbacks run, so a callback may attach, detach,
//! or post reentrantly without deadlocking or corrupting the list.
//!
//! # Broadcast Semantics
//!
//! Broadcast iterates over a snapshot of the observer list taken at post
//! time. Observers attached during a broadcast do not receive that
//! broadcast; observers detached during a broadcast may still receive it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::fmt::Debug;

use parking_lot::RwLock;
use smallvec::SmallVec;
use tracing::debug;

use super::observer::{Observer, ObserverId};
use super::subscription::Subscription;

/// Counter for generating unique holder IDs.
static LIVE_DATA_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a new unique holder ID.
fn next_live_data_id() -> u64 {
    LIVE_DATA_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Inline capacity of the observer list. Holders rarely have more than a
/// handful of observers, so the common case stays allocation-free.
type ObserverList<T> = SmallVec<[Observer<T>; 4]>;

/// An observable holder for a single value of type T.
///
/// # Type Parameters
///
/// - `T`: The type of the held value. Must be Clone + Send + Sync.
///
/// # Example
///
/// ```rust,ignore
/// let name = LiveData::new();
///
/// let subscription = name.observe(|value: &String| {
///     println!("name is now {value}");
/// });
///
/// // Broadcasts to the observer
/// name.post_value("ada".to_string());
///
/// // Detaches the observer
/// subscription.dispose();
/// ```
pub struct LiveData<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Unique identifier for this holder.
    id: u64,

    /// The current value. None until the first post.
    value: Arc<RwLock<Option<T>>>,

    /// Registered observers, in registration order.
    observers: Arc<RwLock<ObserverList<T>>>,
}

impl<T> LiveData<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new holder with no value.
    pub fn new() -> Self {
        Self {
            id: next_live_data_id(),
            value: Arc::new(RwLock::new(None)),
            observers: Arc::new(RwLock::new(SmallVec::new())),
        }
    }

    /// Create a new holder pre-seeded with a value.
    ///
    /// Observers attached afterwards receive the value immediately.
    pub fn with_value(value: T) -> Self {
        Self {
            id: next_live_data_id(),
            value: Arc::new(RwLock::new(Some(value))),
            observers: Arc::new(RwLock::new(SmallVec::new())),
        }
    }

    /// Get the holder's unique ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get a clone of the current value, if one has been posted.
    pub fn value(&self) -> Option<T> {
        self.value.read().clone()
    }

    /// Post a new value and notify observers.
    ///
    /// The value is stored first, then every observer registered at that
    /// moment is invoked with it, in registration order. Each post is an
    /// independent full broadcast; rapid successive posts are not coalesced.
    pub fn post_value(&self, value: T) {
        {
            let mut guard = self.value.write();
            *guard = Some(value.clone());
        }
        self.broadcast(&value);
    }

    /// Update the value using a function of the current value.
    ///
    /// No-op while the holder has no value yet.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = {
            let guard = self.value.read();
            match guard.as_ref() {
                Some(current) => f(current),
                None => return,
            }
        };
        self.post_value(next);
    }

    /// Return the holder to the unset state.
    ///
    /// Nothing is broadcast: there is no value to deliver. Observers stay
    /// attached, and the next post reaches them as usual. Observers
    /// attached while the holder is unset receive no replay.
    pub fn clear(&self) {
        let mut guard = self.value.write();
        if guard.take().is_some() {
            debug!(live_data = self.id, "clearing value");
        }
    }

    /// Attach an observer callback.
    ///
    /// If a value is present, the callback is invoked with it exactly once
    /// before this method returns. Returns the subscription that detaches
    /// this observer; a host lifecycle adapter should dispose it when the
    /// observing component unmounts.
    pub fn observe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.attach(Observer::new(callback))
    }

    /// Attach a pre-built observer.
    ///
    /// Same semantics as [`observe`](Self::observe).
    pub fn attach(&self, observer: Observer<T>) -> Subscription {
        let observer_id = observer.id();
        debug!(
            live_data = self.id,
            observer_id = observer_id.raw(),
            "adding observer"
        );
        self.observers.write().push(observer.clone());

        // The subscription holds only a weak reference, so it cannot keep
        // the holder's state alive past the last LiveData clone.
        let weak = Arc::downgrade(&self.observers);
        let holder_id = self.id;
        let subscription = Subscription::new(observer_id, move || {
            if let Some(observers) = weak.upgrade() {
                detach_observer::<T>(holder_id, &observers, observer_id);
            }
        });

        // Late-subscription replay, outside the locks: the callback may
        // reenter the holder.
        let current = self.value.read().clone();
        if let Some(value) = current {
            observer.notify(&value);
        }

        subscription
    }

    /// Detach an observer by ID.
    ///
    /// Silent no-op if no observer with this ID is attached. Disposing the
    /// subscription returned by [`observe`](Self::observe) is the usual
    /// detach path; this exists for hosts that track observer IDs directly.
    pub fn remove_observer(&self, observer_id: ObserverId) {
        detach_observer::<T>(self.id, &self.observers, observer_id);
    }

    /// Get the number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Get the IDs of attached observers, in registration order.
    pub fn observer_ids(&self) -> Vec<ObserverId> {
        self.observers.read().iter().map(|o| o.id()).collect()
    }

    /// Notify all observers of a value, without holding any lock.
    fn broadcast(&self, value: &T) {
        let snapshot: ObserverList<T> = self.observers.read().clone();
        debug!(
            live_data = self.id,
            observers = snapshot.len(),
            "broadcasting value"
        );
        for observer in &snapshot {
            observer.notify(value);
        }
    }
}

/// Remove one observer from a holder's list by ID.
fn detach_observer<T>(
    holder_id: u64,
    observers: &RwLock<ObserverList<T>>,
    observer_id: ObserverId,
) where
    T: Clone + Send + Sync + 'static,
{
    let mut observers = observers.write();
    let before = observers.len();
    observers.retain(|o| o.id() != observer_id);
    if observers.len() < before {
        debug!(
            live_data = holder_id,
            observer_id = observer_id.raw(),
            "removing observer"
        );
    }
}

impl<T> Clone for LiveData<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            value: Arc::clone(&self.value),
            observers: Arc::clone(&self.observers),
        }
    }
}

impl<T> Default for LiveData<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for LiveData<T>
where
    T: Clone + Send + Sync + Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveData")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("observer_count", &self.observer_count())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
