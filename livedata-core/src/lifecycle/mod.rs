//! Lifecycle Binding
//!
//! Adapter between the observable holder and a component-based host UI
//! framework. The host opens a [`ComponentScope`] when a component mounts
//! and unmounts it when the component goes away; every subscription made
//! through the scope is disposed exactly once at that point.

mod scope;

pub use scope::ComponentScope;
