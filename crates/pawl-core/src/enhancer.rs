//! Enhancer protocol
//!
//! An enhancer wraps store creation to inject cross-cutting behavior without
//! changing the store engine itself. `Store::with_enhancer` hands the
//! unenhanced creation function to the enhancer, which must invoke it
//! (directly or via further wrapping) to obtain the base store.

use crate::reducer::Reducer;
use crate::store::Store;

/// Store-creation function: `(reducer, preloaded_state?) -> Store`.
pub type StoreCreator<S, A> = Box<dyn FnOnce(Box<dyn Reducer<S, A>>, Option<S>) -> Store<S, A>>;

/// Wraps a store-creation function, returning one with the same signature.
///
/// The canonical enhancer is [`crate::apply_middleware`]; custom enhancers
/// typically create the base store through the received creator and then
/// replace its dispatch via [`Store::install_dispatch`].
pub trait Enhancer<S, A>: Sized {
    fn enhance(self, create: StoreCreator<S, A>) -> StoreCreator<S, A>;
}
