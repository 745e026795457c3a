//! Observer types for the observable holder.
//!
//! An Observer wraps the callback a consumer registers on a `LiveData`.
//! Observers are identity-comparable through their `ObserverId`, which is
//! what removal uses: the holder never compares closures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unique identifier for an observer.
///
/// Each registered callback gets a unique ID when created. The ID is the
/// identity used for removal, so registering the same closure twice yields
/// two independent observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    /// Generate a new unique observer ID.
    ///
    /// Uses an atomic counter to ensure uniqueness across threads.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered observer of a `LiveData<T>`.
///
/// The callback is stored behind an `Arc` so broadcast can iterate over a
/// cheap snapshot of the observer list without holding any lock while the
/// callbacks run.
///
/// An observer holds no reference back to the holder it is registered on.
pub struct Observer<T> {
    id: ObserverId,
    /// The callback to invoke with each new value.
    notify: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T> Observer<T> {
    /// Create a new observer wrapping the given callback.
    pub fn new<F>(notify: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            id: ObserverId::new(),
            notify: Arc::new(notify),
        }
    }

    /// Get the observer's unique ID.
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Invoke the observer's callback with a value.
    pub fn notify(&self, value: &T) {
        (self.notify)(value);
    }
}

// Manual impl: cloning shares the callback and keeps the identity, and T
// itself does not need to be Clone.
impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            notify: Arc::clone(&self.notify),
        }
    }
}

impl<T> std::fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer").field("id", &self.id).finish()
    }
}
