//! pawl-core — a minimal predictable-state container
//!
//! A single mutable store whose state only changes through pure transition
//! functions (reducers), observed through a subscription mechanism, with a
//! dispatch path that can be intercepted by a chain of composable middleware.
//!
//! # Example
//!
//! ```
//! use pawl_core::{FnReducer, Store};
//!
//! #[derive(Debug)]
//! enum Action { Add, Minus }
//!
//! let counter = FnReducer::new(10, |state: i32, action: &Action| match action {
//!     Action::Add => state + 1,
//!     Action::Minus => state - 1,
//! });
//!
//! let store = Store::new(Box::new(counter));
//! store.subscribe(|| { /* re-render */ });
//! store.dispatch(Action::Add);
//! assert_eq!(store.state(), 11);
//! ```
//!
//! Middleware is injected at store creation through an enhancer:
//!
//! ```ignore
//! let store = Store::with_enhancer(reducer, apply_middleware(vec![logger, thunk]));
//! ```

mod combine;
mod compose;
mod dispatcher;
mod enhancer;
mod error;
mod middleware;
mod reducer;
mod store;

pub use combine::{combine_reducers, CombinedReducer};
pub use compose::compose;
pub use dispatcher::{Dispatcher, GetState};
pub use enhancer::{Enhancer, StoreCreator};
pub use error::StoreDropped;
pub use middleware::{apply_middleware, ApplyMiddleware, Middleware, MiddlewareContext};
pub use reducer::{FnReducer, Reducer};
pub use store::{DispatchFn, Store};
