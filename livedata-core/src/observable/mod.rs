//! Observable Primitives
//!
//! This module implements the observable holder at the heart of the crate:
//! a container for a single current value plus a list of interested
//! observers, notified synchronously on every change.
//!
//! # Concepts
//!
//! ## LiveData
//!
//! A LiveData holds the most recently posted value, or nothing before the
//! first post. Posting a value stores it and broadcasts it to every
//! attached observer, in registration order.
//!
//! ## Late-subscription replay
//!
//! An observer attached while a value is present receives that value
//! immediately, once, at attach time. Observers never miss the current
//! state just because they arrived after it was posted.
//!
//! ## Subscriptions
//!
//! Attaching an observer returns a Subscription. Disposing it detaches the
//! observer; disposal is idempotent and also happens on drop. The
//! lifecycle adapter in [`crate::lifecycle`] uses subscriptions to tie
//! observer lifetime to a component's mount/unmount interval.

mod live_data;
mod observer;
mod subscription;

pub use live_data::LiveData;
pub use observer::{Observer, ObserverId};
pub use subscription::Subscription;
