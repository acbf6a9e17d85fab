//! Store engine
//!
//! The store owns the single mutable state cell and the listener registry.
//! State only changes through `dispatch`: the installed dispatch pipeline runs
//! the reducer, replaces the state, then notifies every listener in
//! registration order.
//!
//! A dispatch that arrives while another is in flight (from a listener, a
//! middleware or a thunk) is queued and drained by the outermost dispatch
//! before it returns, so listener notifications never interleave with nested
//! state changes.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::dispatcher::{Dispatcher, GetState};
use crate::enhancer::{Enhancer, StoreCreator};
use crate::error::StoreDropped;
use crate::reducer::Reducer;

/// A dispatch function installed on a store.
///
/// The store starts with its base dispatch (reduce, commit, notify) installed;
/// enhancers such as `apply_middleware` replace it with a wrapped one.
pub type DispatchFn<A> = Rc<dyn Fn(A)>;

struct StoreInner<S, A> {
    state: RefCell<S>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
    reducer: Box<dyn Reducer<S, A>>,
    // Always Some after construction.
    pipeline: RefCell<Option<DispatchFn<A>>>,
    queue: RefCell<VecDeque<A>>,
    dispatching: Cell<bool>,
}

/// Predictable-state container.
///
/// `Store` is a cheaply cloneable handle to a single store instance: cloning
/// the handle does not create a new store. `state()` and `subscribe()` stay
/// stable for the store's lifetime even when an enhancer replaces the
/// dispatch pipeline.
///
/// # Example
///
/// ```
/// use pawl_core::{FnReducer, Store};
///
/// #[derive(Debug)]
/// enum Action { Add, Minus }
///
/// let counter = FnReducer::new(10, |state: i32, action: &Action| match action {
///     Action::Add => state + 1,
///     Action::Minus => state - 1,
/// });
///
/// let store = Store::new(Box::new(counter));
/// assert_eq!(store.state(), 10);
/// store.dispatch(Action::Add);
/// assert_eq!(store.state(), 11);
/// ```
pub struct Store<S, A> {
    inner: Rc<StoreInner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Clone + 'static, A: 'static> Store<S, A> {
    /// Create a store bootstrapped from the reducer's initial state.
    ///
    /// A reducer that panics while producing its initial state propagates out
    /// of construction; no store is created.
    pub fn new(reducer: Box<dyn Reducer<S, A>>) -> Self {
        Self::create(reducer, None)
    }

    /// Create a store with preloaded state instead of the reducer's initial.
    pub fn with_state(reducer: Box<dyn Reducer<S, A>>, preloaded: S) -> Self {
        Self::create(reducer, Some(preloaded))
    }

    /// Create a store through an enhancer.
    ///
    /// Construction is delegated: the enhancer receives the unenhanced
    /// creation function and must invoke it (directly or via further
    /// wrapping) to obtain the base store.
    pub fn with_enhancer(
        reducer: Box<dyn Reducer<S, A>>,
        enhancer: impl Enhancer<S, A>,
    ) -> Self {
        let create: StoreCreator<S, A> = Box::new(|reducer, preloaded| match preloaded {
            Some(state) => Store::with_state(reducer, state),
            None => Store::new(reducer),
        });
        (enhancer.enhance(create))(reducer, None)
    }

    fn create(reducer: Box<dyn Reducer<S, A>>, preloaded: Option<S>) -> Self {
        // Bootstrap: the cell is populated before any action can be observed,
        // so state is never absent after construction.
        let seed = match preloaded {
            Some(state) => state,
            None => reducer.initial(),
        };
        let store = Store {
            inner: Rc::new(StoreInner {
                state: RefCell::new(seed),
                listeners: RefCell::new(Vec::new()),
                reducer,
                pipeline: RefCell::new(None),
                queue: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        };
        let base = store.base_dispatch_fn();
        store.install_dispatch(base);
        store
    }

    /// Current state, as a clone of the cell. No side effects; callable any
    /// time, including from inside middleware and listeners.
    pub fn state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Dispatch an action through the installed pipeline.
    ///
    /// Runs synchronously to completion: reducer, state replacement, then
    /// every listener in registration order with no arguments. If a dispatch
    /// is already in flight, the action is queued and applied by the
    /// outermost dispatch before it returns.
    ///
    /// A panicking reducer or listener propagates to the caller; the state
    /// cell keeps the last successfully committed value and any queued
    /// actions are discarded.
    pub fn dispatch(&self, action: A) {
        if self.inner.dispatching.get() {
            log::trace!("dispatch in flight, queueing action");
            self.inner.queue.borrow_mut().push_back(action);
            return;
        }

        self.inner.dispatching.set(true);
        let _guard = DispatchGuard(&*self.inner);

        self.run_pipeline(action);
        loop {
            let queued = self.inner.queue.borrow_mut().pop_front();
            match queued {
                Some(next) => self.run_pipeline(next),
                None => break,
            }
        }
    }

    /// Register a listener, called after every dispatch with no arguments.
    ///
    /// Listeners run in registration order. The same listener may be
    /// registered multiple times, each registration independent. There is no
    /// unsubscribe primitive: registrations live as long as the store (a
    /// known limitation of this core).
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// A detached dispatch handle holding a weak reference to this store.
    ///
    /// Suitable for host event sources and deferred work: it does not keep
    /// the store alive, and dispatching after the store is gone logs an error
    /// and discards the action (`try_dispatch` reports it instead).
    pub fn dispatcher(&self) -> Dispatcher<A> {
        let weak = Rc::downgrade(&self.inner);
        Dispatcher::new(move |action| match weak.upgrade() {
            Some(inner) => {
                Store { inner }.dispatch(action);
                Ok(())
            }
            None => Err(StoreDropped),
        })
    }

    /// A detached state-reading handle holding a weak reference to this store.
    pub fn get_state(&self) -> GetState<S> {
        let weak = Rc::downgrade(&self.inner);
        GetState::new(move || match weak.upgrade() {
            Some(inner) => Ok(inner.state.borrow().clone()),
            None => Err(StoreDropped),
        })
    }

    /// The currently installed dispatch function.
    ///
    /// Enhancers capture this as the innermost terminal before installing a
    /// wrapped pipeline around it.
    pub fn installed_dispatch(&self) -> DispatchFn<A> {
        Rc::clone(
            self.inner
                .pipeline
                .borrow()
                .as_ref()
                .expect("dispatch pipeline installed at construction"),
        )
    }

    /// Replace the installed dispatch function.
    ///
    /// The store identity and its `state`/`subscribe` surface are unaffected;
    /// only the path an action travels changes.
    pub fn install_dispatch(&self, dispatch: DispatchFn<A>) {
        *self.inner.pipeline.borrow_mut() = Some(dispatch);
    }

    fn run_pipeline(&self, action: A) {
        let pipeline = self.installed_dispatch();
        (*pipeline)(action);
    }

    // The innermost terminal: reduce, commit, notify. Holds a weak reference
    // so an installed pipeline never keeps its own store alive.
    fn base_dispatch_fn(&self) -> DispatchFn<A> {
        let weak = Rc::downgrade(&self.inner);
        Rc::new(move |action: A| {
            if let Some(inner) = weak.upgrade() {
                Store { inner }.base_dispatch(action);
            }
        })
    }

    fn base_dispatch(&self, action: A) {
        let prev = self.inner.state.borrow().clone();
        let next = self.inner.reducer.reduce(prev, &action);
        // No equality short-circuit: the state is replaced and listeners are
        // notified even when the reducer returned an equal value.
        *self.inner.state.borrow_mut() = next;

        // Snapshot the registry so a listener may subscribe during
        // notification without invalidating the iteration; listeners added
        // mid-notification are not called for this dispatch.
        let listeners: Vec<Rc<dyn Fn()>> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            (*listener)();
        }
    }
}

// Resets the in-flight flag and discards queued actions, also when a reducer
// or listener panics mid-dispatch.
struct DispatchGuard<'a, S, A>(&'a StoreInner<S, A>);

impl<S, A> Drop for DispatchGuard<'_, S, A> {
    fn drop(&mut self) {
        self.0.dispatching.set(false);
        self.0.queue.borrow_mut().clear();
    }
}
