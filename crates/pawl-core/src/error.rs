//! Error types for detached store handles

use thiserror::Error;

/// The store behind a detached handle has been dropped.
///
/// Returned by [`crate::Dispatcher::try_dispatch`] and
/// [`crate::GetState::try_get`] when every [`crate::Store`] handle for the
/// underlying store has gone away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("store has been dropped")]
pub struct StoreDropped;
