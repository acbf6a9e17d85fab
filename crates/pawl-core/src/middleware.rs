//! Middleware pipeline
//!
//! Middleware sits between action dispatch and the reducer, intercepting
//! every action in a composable way:
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Listeners
//! ```
//!
//! Each middleware can inspect the action and current state, dispatch new
//! actions, perform side effects, or decline to call `next` and stop the
//! action from going further. `apply_middleware` folds a list of middlewares
//! into an enhancer: the first middleware in the list becomes the outermost
//! wrapper around the base dispatch, so it observes an action before any
//! middleware listed after it.

use std::rc::Rc;

use crate::compose::compose;
use crate::dispatcher::{Dispatcher, GetState};
use crate::enhancer::{Enhancer, StoreCreator};
use crate::store::DispatchFn;

/// Intercepts actions on their way to the reducer.
///
/// `next` is the rest of the chain, ending in the base dispatch. A middleware
/// forwards the action by calling `next(action)`; not calling it halts the
/// chain silently, which is a valid use (that is how a thunk middleware
/// consumes function-typed actions), not a fault.
pub trait Middleware<S, A> {
    fn handle(&self, ctx: &MiddlewareContext<S, A>, action: A, next: &dyn Fn(A));
}

/// Store access handed to every middleware invocation.
///
/// State reads are live, never a snapshot from composition time. Dispatching
/// through the context re-enters the full pipeline; during an in-flight
/// dispatch the action is queued and applied before the outer dispatch
/// returns.
pub struct MiddlewareContext<S, A> {
    dispatcher: Dispatcher<A>,
    get_state: GetState<S>,
}

impl<S, A> MiddlewareContext<S, A> {
    pub(crate) fn new(dispatcher: Dispatcher<A>, get_state: GetState<S>) -> Self {
        Self {
            dispatcher,
            get_state,
        }
    }

    /// Current state of the store this pipeline is installed on.
    pub fn state(&self) -> S {
        self.get_state.get()
    }

    /// Dispatch an action through the full pipeline.
    pub fn dispatch(&self, action: A) {
        self.dispatcher.dispatch(action);
    }

    /// Detached dispatch handle, for work that outlives this invocation.
    pub fn dispatcher(&self) -> Dispatcher<A> {
        self.dispatcher.clone()
    }

    /// Detached state-reading handle, for work that outlives this invocation.
    pub fn get_state(&self) -> GetState<S> {
        self.get_state.clone()
    }
}

/// Fold middlewares into an [`Enhancer`] that replaces the store's dispatch.
///
/// # Example
///
/// ```
/// use pawl_core::{apply_middleware, FnReducer, Middleware, MiddlewareContext, Store};
///
/// #[derive(Debug)]
/// enum Action { Add }
///
/// struct PassThrough;
///
/// impl Middleware<i32, Action> for PassThrough {
///     fn handle(&self, _ctx: &MiddlewareContext<i32, Action>, action: Action, next: &dyn Fn(Action)) {
///         next(action);
///     }
/// }
///
/// let counter = FnReducer::new(10, |s: i32, a: &Action| match a {
///     Action::Add => s + 1,
/// });
/// let store = Store::with_enhancer(
///     Box::new(counter),
///     apply_middleware(vec![Box::new(PassThrough)]),
/// );
/// store.dispatch(Action::Add);
/// assert_eq!(store.state(), 11);
/// ```
pub fn apply_middleware<S, A>(
    middlewares: Vec<Box<dyn Middleware<S, A>>>,
) -> ApplyMiddleware<S, A> {
    ApplyMiddleware { middlewares }
}

/// The enhancer built by [`apply_middleware`].
pub struct ApplyMiddleware<S, A> {
    middlewares: Vec<Box<dyn Middleware<S, A>>>,
}

impl<S: Clone + 'static, A: 'static> Enhancer<S, A> for ApplyMiddleware<S, A> {
    fn enhance(self, create: StoreCreator<S, A>) -> StoreCreator<S, A> {
        Box::new(move |reducer, preloaded| {
            // The base store has already gone through its bootstrap by the
            // time the pipeline is installed.
            let store = create(reducer, preloaded);
            let base = store.installed_dispatch();
            let ctx = Rc::new(MiddlewareContext::new(store.dispatcher(), store.get_state()));

            let mut wrappers: Vec<Box<dyn FnOnce(DispatchFn<A>) -> DispatchFn<A>>> = Vec::new();
            for middleware in self.middlewares {
                let middleware: Rc<dyn Middleware<S, A>> = Rc::from(middleware);
                let ctx = Rc::clone(&ctx);
                wrappers.push(Box::new(move |next: DispatchFn<A>| {
                    Rc::new(move |action: A| middleware.handle(&ctx, action, &*next))
                        as DispatchFn<A>
                }));
            }

            // Right-to-left composition puts the first middleware outermost.
            // With no middlewares this reinstalls the base dispatch itself.
            let dispatch = compose(wrappers)(base);
            store.install_dispatch(dispatch);
            store
        })
    }
}
