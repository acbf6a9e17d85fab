//! Reducer contract
//!
//! A reducer is a pure state-transition function: given the current state and
//! an action, it returns the next state. Reducers must not have side effects,
//! and must return the current state unchanged for actions they do not handle.

use std::marker::PhantomData;

/// Pure state-transition function `(state, action) -> state`.
///
/// `initial` supplies the value the store is populated with at construction
/// (the bootstrap), before any action has been dispatched. `reduce` must be
/// pure: same `(state, action)` in, equal state out, no side effects.
pub trait Reducer<S, A> {
    /// The default state this reducer starts from.
    fn initial(&self) -> S;

    /// Compute the next state for `action`. Unhandled actions must return
    /// `state` unchanged.
    fn reduce(&self, state: S, action: &A) -> S;
}

/// Adapts a plain closure plus an initial value to the [`Reducer`] trait.
///
/// # Example
///
/// ```
/// use pawl_core::{FnReducer, Reducer};
///
/// #[derive(Debug)]
/// enum Action { Add, Minus }
///
/// let counter = FnReducer::new(10, |state: i32, action: &Action| match action {
///     Action::Add => state + 1,
///     Action::Minus => state - 1,
/// });
/// assert_eq!(counter.initial(), 10);
/// assert_eq!(counter.reduce(10, &Action::Add), 11);
/// ```
pub struct FnReducer<S, A, F> {
    initial: S,
    f: F,
    _marker: PhantomData<fn(&A)>,
}

impl<S: Clone, A, F: Fn(S, &A) -> S> FnReducer<S, A, F> {
    pub fn new(initial: S, f: F) -> Self {
        Self {
            initial,
            f,
            _marker: PhantomData,
        }
    }
}

impl<S: Clone, A, F: Fn(S, &A) -> S> Reducer<S, A> for FnReducer<S, A, F> {
    fn initial(&self) -> S {
        self.initial.clone()
    }

    fn reduce(&self, state: S, action: &A) -> S {
        (self.f)(state, action)
    }
}
