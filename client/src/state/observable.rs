//! Single-value store with ordered, named subscribers.
//!
//! DESIGN
//! ======
//! An `Observable` moves through two phases. While *configuring*, callers
//! register subscribers and may seed the value, but nothing is notified.
//! `initialize()` flips it to *initialized* and runs one notification pass so
//! every surface renders the starting value. From then on each `set_value`
//! runs a full pass, in registration order, before returning.
//!
//! Subscribers are allowed to call back into the observable. A pass works on
//! a snapshot of the subscriber list and the value it started with, so a
//! nested `set_value` runs its own complete pass immediately and the outer
//! pass then carries on where it left off. Subscribers registered during a
//! pass are first called on the next one.
//!
//! Handles are cheap `Rc` clones; all clones share one store.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Subscriber<T> {
    name: String,
    callback: Callback<T>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), callback: Rc::clone(&self.callback) }
    }
}

struct Inner<T> {
    name: String,
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    initialized: Cell<bool>,
}

/// Shared handle to one observable value.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Create an observable in the configuring phase. `name` appears in debug logs.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                name: name.into(),
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                initialized: Cell::new(false),
            }),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get_value(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the value and, once initialized, notify every subscriber.
    pub fn set_value(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        if self.inner.initialized.get() {
            self.notify();
        }
    }

    /// Register `callback` after the existing subscribers.
    pub fn subscribe(&self, name: impl Into<String>, callback: impl Fn(&T) + 'static) {
        self.inner.subscribers.borrow_mut().push(Subscriber { name: name.into(), callback: Rc::new(callback) });
    }

    /// End the configuring phase with one pass over the current value.
    ///
    /// Calling it again is a no-op.
    pub fn initialize(&self) {
        if self.inner.initialized.replace(true) {
            log::warn!("{}: initialize called twice", self.inner.name);
            return;
        }
        self.notify();
    }

    /// Whether `initialize` has run, i.e. `set_value` now notifies.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.get()
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn notify(&self) {
        let subscribers = self.inner.subscribers.borrow().clone();
        let value = self.get_value();
        log::debug!(
            "{}: notifying [{}]",
            self.inner.name,
            subscribers.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(", ")
        );
        for subscriber in &subscribers {
            (subscriber.callback)(&value);
        }
    }
}
