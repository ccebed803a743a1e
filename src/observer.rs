//! Value-changed observer registration
//!
//! The slider reports its current value through a plain observer list:
//! closures registered here receive every value-changed notification from
//! the moment of registration, synchronously and in registration order.
//! There is no unsubscription and no replay of past values.

use std::fmt;

/// A single value-changed handler.
///
/// Wraps the boxed closure so the registry (and widget structs embedding
/// one) never spell out `Box<dyn Fn(f32)>` directly.
pub struct ValueObserver {
    f: Box<dyn Fn(f32)>,
}

impl ValueObserver {
    /// Create an observer from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f32) + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Deliver a value to this observer.
    pub fn notify(&self, value: f32) {
        (self.f)(value)
    }
}

impl fmt::Debug for ValueObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueObserver").finish()
    }
}

/// An ordered registry of value-changed observers.
#[derive(Default)]
pub struct Observers {
    observers: Vec<ValueObserver>,
}

impl Observers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. It receives all future notifications.
    pub fn register<F>(&mut self, f: F)
    where
        F: Fn(f32) + 'static,
    {
        self.observers.push(ValueObserver::new(f));
    }

    /// Notify every registered observer, in registration order.
    pub fn notify(&self, value: f32) {
        for observer in &self.observers {
            observer.notify(value);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.observers.len())
            .finish()
    }
}
