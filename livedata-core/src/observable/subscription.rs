//! Subscription Guard
//!
//! A Subscription is the value returned by `LiveData::observe`. It is the
//! only handle through which an observer can be detached, and it is
//! type-erased so a lifecycle adapter can retain subscriptions to holders
//! of different value types in one collection.
//!
//! # Disposal Semantics
//!
//! - `dispose` is idempotent: the detach action runs at most once, and
//!   every later call is a silent no-op.
//! - Dropping an undisposed subscription disposes it, so a forgotten
//!   subscription cannot leak notifications past its owner's lifetime.
//! - A subscription holds only a weak reference to the holder's observer
//!   list; it never keeps holder state alive, and disposing after the
//!   holder is gone is a silent no-op as well.

use parking_lot::Mutex;
use tracing::debug;

use super::observer::ObserverId;

/// A handle that detaches one registered observer when disposed.
pub struct Subscription {
    observer_id: ObserverId,
    /// One-shot detach action. `None` once disposed.
    detach: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    /// Create a subscription around a one-shot detach action.
    pub(crate) fn new<F>(observer_id: ObserverId, detach: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            observer_id,
            detach: Mutex::new(Some(Box::new(detach))),
        }
    }

    /// Get the ID of the observer this subscription controls.
    pub fn observer_id(&self) -> ObserverId {
        self.observer_id
    }

    /// Detach the observer.
    ///
    /// Only the first call has an effect; repeated disposal is a no-op.
    pub fn dispose(&self) {
        if let Some(detach) = self.detach.lock().take() {
            debug!(observer_id = self.observer_id.raw(), "disposing subscription");
            detach();
        }
    }

    /// Check whether the subscription has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.detach.lock().is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("observer_id", &self.observer_id)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
