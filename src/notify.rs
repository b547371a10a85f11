//! Generic event fan-out.
//!
//! [`Notifier<E>`] is the one publish/subscribe primitive in the crate:
//! every watcher and the brewing cycle own one and publish their domain
//! events through it. Subscribers are plain `Rc<dyn Fn(&E)>` handles,
//! deduplicated by `Rc` identity and notified synchronously in
//! subscription order.
//!
//! [`subscribe`](Notifier::subscribe) returns a [`Subscription`] token.
//! Dropping the token removes the listener; hold it for as long as the
//! listener should stay registered.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A subscribed listener handle.
pub type Listener<E> = Rc<dyn Fn(&E)>;

type Registry<E> = RefCell<Vec<Listener<E>>>;

/// Duplicate-free, insertion-ordered fan-out for events of type `E`.
pub struct Notifier<E> {
    registry: Rc<Registry<E>>,
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register `listener` unless the same handle is already registered.
    ///
    /// Identity is the `Rc` allocation: cloning a listener handle and
    /// subscribing it twice stores it once; two distinct closures with
    /// identical code are distinct listeners.
    pub fn subscribe(&self, listener: Listener<E>) -> Subscription<E> {
        {
            let mut listeners = self.registry.borrow_mut();
            if !listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
                listeners.push(Rc::clone(&listener));
            }
        }
        Subscription {
            registry: Rc::downgrade(&self.registry),
            listener,
        }
    }

    /// Synchronously invoke every currently-subscribed listener, in
    /// subscription order.
    ///
    /// The listener list is snapshotted first, so a listener may freely
    /// subscribe, unsubscribe, or publish from inside its callback.
    /// Listener panics are not caught: an unwinding listener skips the
    /// remaining ones.
    pub fn publish(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = self.registry.borrow().clone();
        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of currently-subscribed listeners.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsubscribe token returned by [`Notifier::subscribe`].
///
/// The listener stays registered while this token is alive. Dropping it
/// (or calling [`unsubscribe`](Subscription::unsubscribe)) removes the
/// listener from the registry; dropping after the notifier itself is gone
/// is a no-op.
pub struct Subscription<E> {
    registry: Weak<Registry<E>>,
    listener: Listener<E>,
}

impl<E> Subscription<E> {
    /// Explicitly remove the listener now.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .retain(|l| !Rc::ptr_eq(l, &self.listener));
        }
    }
}
