//! Function composition
//!
//! `compose` folds an ordered sequence of unary functions into one, applying
//! them right to left. The middleware pipeline uses it to link the per-middleware
//! dispatch wrappers into a single dispatch function: the first function in the
//! list ends up outermost, so the first middleware sees an action before any
//! middleware listed after it.

/// Compose `f1, f2, ..., fn` into `f1(f2(...fn(x)...))`.
///
/// Zero functions compose to the identity: the input is returned unchanged.
/// One function is returned as-is.
///
/// # Example
///
/// ```
/// use pawl_core::compose;
///
/// let add_one: Box<dyn FnOnce(i32) -> i32> = Box::new(|x| x + 1);
/// let double: Box<dyn FnOnce(i32) -> i32> = Box::new(|x| x * 2);
/// // double runs first, add_one wraps it
/// assert_eq!(compose(vec![add_one, double])(3), 7);
/// ```
pub fn compose<T: 'static>(mut fns: Vec<Box<dyn FnOnce(T) -> T>>) -> Box<dyn FnOnce(T) -> T> {
    match fns.len() {
        0 => Box::new(|x| x),
        1 => fns.pop().expect("length checked above"),
        _ => fns
            .into_iter()
            .rev()
            .fold(Box::new(|x| x) as Box<dyn FnOnce(T) -> T>, |inner, f| {
                Box::new(move |x| f(inner(x)))
            }),
    }
}
