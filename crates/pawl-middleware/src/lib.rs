//! pawl-middleware — reference middlewares for pawl-core
//!
//! Two concrete instances of the middleware contract:
//!
//! - [`LoggingMiddleware`] observes every dispatched action together with the
//!   pre-dispatch state and always forwards.
//! - [`ThunkMiddleware`] lets an action be a deferred computation
//!   ([`Thunkable::Thunk`]) that receives the store's dispatch and
//!   state-reading handles instead of reaching the reducer.
//!
//! # Example
//!
//! ```
//! use pawl_core::{apply_middleware, FnReducer, Store};
//! use pawl_middleware::{LoggingMiddleware, PlainReducer, Thunkable, ThunkMiddleware};
//!
//! #[derive(Debug)]
//! enum Action { Add }
//!
//! let counter = FnReducer::new(10, |s: i32, a: &Action| match a {
//!     Action::Add => s + 1,
//! });
//! let store = Store::with_enhancer(
//!     Box::new(PlainReducer::new(counter)),
//!     apply_middleware(vec![
//!         Box::new(LoggingMiddleware::new()),
//!         Box::new(ThunkMiddleware),
//!     ]),
//! );
//!
//! store.dispatch(Thunkable::thunk(|dispatch, get_state| {
//!     if get_state.get() < 20 {
//!         dispatch.dispatch(Thunkable::Plain(Action::Add));
//!     }
//! }));
//! assert_eq!(store.state(), 11);
//! ```

mod logger;
mod thunk;

pub use logger::{LogLevel, LoggerConfig, LoggingMiddleware};
pub use thunk::{PlainReducer, Thunkable, ThunkMiddleware};

#[cfg(test)]
mod tests {
    use super::*;
    use pawl_core::{apply_middleware, FnReducer, Middleware, MiddlewareContext, Store};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        Add,
    }

    // Records every action it sees, then forwards.
    struct Recorder {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl<S, A: std::fmt::Debug> Middleware<S, A> for Recorder {
        fn handle(&self, _ctx: &MiddlewareContext<S, A>, action: A, next: &dyn Fn(A)) {
            self.seen.borrow_mut().push(format!("{:?}", action));
            next(action);
        }
    }

    #[test]
    fn test_logger_before_thunk_chain() {
        let counter = FnReducer::new(10, |s: i32, a: &Action| match a {
            Action::Add => s + 1,
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let store = Store::with_enhancer(
            Box::new(PlainReducer::new(counter)),
            apply_middleware(vec![
                Box::new(LoggingMiddleware::new()),
                Box::new(Recorder {
                    seen: Rc::clone(&seen),
                }),
                Box::new(ThunkMiddleware),
            ]),
        );

        store.dispatch(Thunkable::thunk(|dispatch, _get_state| {
            dispatch.dispatch(Thunkable::Plain(Action::Add));
        }));

        // Every action, including the one the thunk dispatched, travelled the
        // whole chain from the first middleware.
        assert_eq!(store.state(), 11);
        assert_eq!(*seen.borrow(), vec!["Thunk(..)", "Plain(Add)"]);
    }
}
