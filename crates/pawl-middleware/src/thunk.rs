//! Thunk middleware
//!
//! Lets an action be a deferred computation instead of plain data. A thunk is
//! handed the store's dispatch and state-reading handles and is itself
//! responsible for dispatching zero or more real actions, synchronously or
//! after a delay. The store engine never sees the thunk: the middleware
//! consumes it without forwarding.

use std::fmt;

use pawl_core::{Dispatcher, GetState, Middleware, MiddlewareContext, Reducer};

/// An action that is either plain data or a deferred computation.
///
/// The closure variant replaces the untyped "is this a function" check with
/// an explicit sum type: the dispatch signature states up front that both
/// shapes exist.
pub enum Thunkable<S, A> {
    Plain(A),
    Thunk(Box<dyn FnOnce(Dispatcher<Thunkable<S, A>>, GetState<S>)>),
}

impl<S, A> Thunkable<S, A> {
    /// Wrap a closure as a thunk action.
    pub fn thunk(f: impl FnOnce(Dispatcher<Thunkable<S, A>>, GetState<S>) + 'static) -> Self {
        Thunkable::Thunk(Box::new(f))
    }
}

impl<S, A> From<A> for Thunkable<S, A> {
    fn from(action: A) -> Self {
        Thunkable::Plain(action)
    }
}

impl<S, A: fmt::Debug> fmt::Debug for Thunkable<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thunkable::Plain(action) => f.debug_tuple("Plain").field(action).finish(),
            Thunkable::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}

/// Middleware that intercepts [`Thunkable::Thunk`] actions.
///
/// Plain actions are forwarded untouched. A thunk is consumed, never
/// forwarded, and invoked with detached `(dispatch, get_state)` handles; an
/// action it dispatches re-enters the full pipeline exactly as a direct
/// dispatch would, whether it dispatches synchronously or from a deferred
/// callback.
pub struct ThunkMiddleware;

impl<S: Clone + 'static, A: 'static> Middleware<S, Thunkable<S, A>> for ThunkMiddleware {
    fn handle(
        &self,
        ctx: &MiddlewareContext<S, Thunkable<S, A>>,
        action: Thunkable<S, A>,
        next: &dyn Fn(Thunkable<S, A>),
    ) {
        match action {
            Thunkable::Thunk(thunk) => thunk(ctx.dispatcher(), ctx.get_state()),
            plain => next(plain),
        }
    }
}

/// Adapts a reducer over plain actions to one over [`Thunkable`] actions.
///
/// Thunk actions reduce to the unchanged state; they only ever reach the
/// reducer if no thunk middleware is installed, and then fall through like
/// any unhandled action.
pub struct PlainReducer<R> {
    inner: R,
}

impl<R> PlainReducer<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<S, A, R: Reducer<S, A>> Reducer<S, Thunkable<S, A>> for PlainReducer<R> {
    fn initial(&self) -> S {
        self.inner.initial()
    }

    fn reduce(&self, state: S, action: &Thunkable<S, A>) -> S {
        match action {
            Thunkable::Plain(action) => self.inner.reduce(state, action),
            Thunkable::Thunk(_) => state,
        }
    }
}
