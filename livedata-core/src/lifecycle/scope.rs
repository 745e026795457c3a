//! Component Scope
//!
//! A ComponentScope models the mount→unmount interval of one UI component
//! instance. The host framework binding opens a scope when the component
//! mounts, routes its observe calls through the scope, and unmounts the
//! scope when the component goes away. Every subscription made through the
//! scope is disposed at unmount, so a component's observers can never
//! outlive it.
//!
//! The observable holder itself knows nothing about UI lifecycles; this
//! adapter is the only place that concern lives.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::observable::{LiveData, Subscription};

/// The mount→unmount interval of one component instance.
///
/// # Example
///
/// ```rust,ignore
/// let scope = ComponentScope::mount();
///
/// // On mount: subscribe through the scope
/// scope.observe(&view_model.name, |name: &String| {
///     render_name(name);
/// });
///
/// // On unmount: every subscription made above is disposed
/// scope.unmount();
/// ```
pub struct ComponentScope {
    /// Subscriptions made during this scope, disposed at unmount.
    subscriptions: Mutex<Vec<Subscription>>,

    /// Whether the scope is still mounted.
    mounted: AtomicBool,
}

impl ComponentScope {
    /// Open a scope for a freshly mounted component instance.
    pub fn mount() -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
            mounted: AtomicBool::new(true),
        }
    }

    /// Check whether the scope is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Observe a holder for the duration of this scope.
    ///
    /// Replay semantics are those of [`LiveData::observe`]: if the holder
    /// has a value, the callback runs with it before this method returns.
    /// The subscription is retained and disposed at unmount.
    ///
    /// Observing through an already-unmounted scope is a contract violation
    /// on the host's side; it is ignored with a warning.
    pub fn observe<T, F>(&self, data: &LiveData<T>, callback: F)
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&T) + Send + Sync + 'static,
    {
        if !self.is_mounted() {
            warn!(live_data = data.id(), "observe on unmounted scope ignored");
            return;
        }

        let subscription = data.observe(callback);
        self.subscriptions.lock().push(subscription);
    }

    /// Get the number of live subscriptions held by this scope.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.lock().len()
    }

    /// Close the scope, disposing every subscription made through it.
    ///
    /// Only the first call has an effect; repeated unmounts are no-ops.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::SeqCst) {
            let subscriptions: Vec<Subscription> = {
                let mut guard = self.subscriptions.lock();
                guard.drain(..).collect()
            };
            debug!(
                subscriptions = subscriptions.len(),
                "unmounting component scope"
            );
            for subscription in &subscriptions {
                subscription.dispose();
            }
        }
    }
}

impl Drop for ComponentScope {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for ComponentScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentScope")
            .field("mounted", &self.is_mounted())
            .field("subscription_count", &self.subscription_count())
            .finish()
    }
}
