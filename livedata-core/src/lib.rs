//! LiveData Core
//!
//! This crate provides an observable value holder with lifecycle-scoped
//! subscriptions. It implements:
//!
//! - `LiveData<T>`: a container for a single current value that broadcasts
//!   every change to its observers, synchronously and in registration order
//! - Late-subscription replay: observers attached after a value was posted
//!   receive that value immediately
//! - `Subscription`: an idempotent disposal guard for one observer
//! - `ComponentScope`: a mount/unmount adapter that detaches a component's
//!   observers when the component goes away
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `observable`: the holder, observer identity, and subscription guard
//! - `lifecycle`: the host-framework binding (component scopes)
//!
//! # Example
//!
//! ```rust,ignore
//! use livedata_core::{LiveData, ComponentScope};
//!
//! // View-model side
//! let name: LiveData<String> = LiveData::new();
//!
//! // View side: subscribe for the component's lifetime
//! let scope = ComponentScope::mount();
//! scope.observe(&name, |value| {
//!     println!("name changed to {value}");
//! });
//!
//! // Broadcasts to the observer
//! name.post_value("ada".to_string());
//!
//! // Unmount detaches the observer; later posts are silent
//! scope.unmount();
//! name.post_value("grace".to_string());
//! ```

pub mod lifecycle;
pub mod observable;

pub use lifecycle::ComponentScope;
pub use observable::{LiveData, Observer, ObserverId, Subscription};
