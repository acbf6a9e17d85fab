//! Detached store handles
//!
//! `Dispatcher` and `GetState` let host event sources, middleware and
//! deferred work reach a store without owning it. Both hold a weak reference:
//! they never keep the store alive, and an action dispatched through a handle
//! whose store has been dropped is logged and discarded (the `try_` variants
//! report the condition instead).

use std::rc::Rc;

use crate::error::StoreDropped;

/// Cloneable dispatch handle for a single store.
///
/// Actions dispatched while another dispatch is in flight re-enter the full
/// pipeline once the outer dispatch drains its queue, so every middleware
/// observes them.
pub struct Dispatcher<A> {
    send: Rc<dyn Fn(A) -> Result<(), StoreDropped>>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            send: Rc::clone(&self.send),
        }
    }
}

impl<A> Dispatcher<A> {
    pub(crate) fn new(send: impl Fn(A) -> Result<(), StoreDropped> + 'static) -> Self {
        Self { send: Rc::new(send) }
    }

    /// Dispatch an action, logging and discarding it if the store is gone.
    pub fn dispatch(&self, action: A) {
        if let Err(e) = (*self.send)(action) {
            log::error!("Dispatcher: failed to dispatch action: {}", e);
        }
    }

    /// Dispatch an action, reporting a dropped store to the caller.
    pub fn try_dispatch(&self, action: A) -> Result<(), StoreDropped> {
        (*self.send)(action)
    }
}

/// Cloneable state-reading handle for a single store.
///
/// Reads are live: each call observes the state as of that moment, never a
/// snapshot taken when the handle was created.
pub struct GetState<S> {
    read: Rc<dyn Fn() -> Result<S, StoreDropped>>,
}

impl<S> Clone for GetState<S> {
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
        }
    }
}

impl<S> GetState<S> {
    pub(crate) fn new(read: impl Fn() -> Result<S, StoreDropped> + 'static) -> Self {
        Self { read: Rc::new(read) }
    }

    /// Current state.
    ///
    /// Panics if the store has been dropped; use [`GetState::try_get`] when
    /// the handle may outlive the store.
    pub fn get(&self) -> S {
        self.try_get().expect("store has been dropped")
    }

    /// Current state, reporting a dropped store to the caller.
    pub fn try_get(&self) -> Result<S, StoreDropped> {
        (*self.read)()
    }
}
