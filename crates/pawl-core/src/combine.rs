//! Reducer combinator
//!
//! Builds one aggregate reducer out of named state slices, each owned by its
//! own slice reducer. Every dispatched action is offered to every slice; a
//! slice reducer that does not handle the action returns its slice unchanged.

use std::collections::BTreeMap;

use crate::reducer::Reducer;

/// Combine named slice reducers into one reducer over a keyed state map.
///
/// Each entry pairs a slice key with the reducer that owns that slice. Keys
/// are expected to be unique; action discriminants are conventionally unique
/// across independently authored slice reducers, but that is a usage
/// convention, not enforced here.
///
/// # Example
///
/// ```
/// use pawl_core::{combine_reducers, FnReducer, Reducer, Store};
///
/// #[derive(Debug)]
/// enum Action { Add }
///
/// let combined = combine_reducers(vec![
///     (
///         "count1".to_string(),
///         Box::new(FnReducer::new(10, |s: i32, a: &Action| match a {
///             Action::Add => s + 1,
///         })) as Box<dyn Reducer<i32, Action>>,
///     ),
///     (
///         "count2".to_string(),
///         Box::new(FnReducer::new(20, |s: i32, a: &Action| match a {
///             Action::Add => s + 1,
///         })),
///     ),
/// ]);
///
/// let store = Store::new(Box::new(combined));
/// store.dispatch(Action::Add);
/// assert_eq!(store.state()["count1"], 11);
/// assert_eq!(store.state()["count2"], 21);
/// ```
pub fn combine_reducers<V, A>(
    slices: Vec<(String, Box<dyn Reducer<V, A>>)>,
) -> CombinedReducer<V, A> {
    CombinedReducer { slices }
}

/// Aggregate reducer over a `BTreeMap<String, V>` of state slices.
///
/// Built by [`combine_reducers`]. When no slice changed for an action, the
/// incoming state map is returned unchanged rather than reassembled.
pub struct CombinedReducer<V, A> {
    slices: Vec<(String, Box<dyn Reducer<V, A>>)>,
}

impl<V: Clone + PartialEq, A> Reducer<BTreeMap<String, V>, A> for CombinedReducer<V, A> {
    fn initial(&self) -> BTreeMap<String, V> {
        self.slices
            .iter()
            .map(|(key, reducer)| (key.clone(), reducer.initial()))
            .collect()
    }

    fn reduce(&self, state: BTreeMap<String, V>, action: &A) -> BTreeMap<String, V> {
        let mut next = BTreeMap::new();
        let mut has_changed = false;

        for (key, reducer) in &self.slices {
            let prev = state.get(key).cloned();
            // A slice missing from the incoming map (possible with preloaded
            // state) reduces from its own initial value.
            let seed = prev.clone().unwrap_or_else(|| reducer.initial());
            let next_slice = reducer.reduce(seed, action);
            if prev.as_ref() != Some(&next_slice) {
                has_changed = true;
            }
            next.insert(key.clone(), next_slice);
        }

        if has_changed {
            next
        } else {
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::FnReducer;

    #[derive(Debug)]
    enum Action {
        Add,
        Minus,
        Noop,
    }

    fn counter(initial: i32) -> Box<dyn Reducer<i32, Action>> {
        Box::new(FnReducer::new(initial, |state: i32, action: &Action| {
            match action {
                Action::Add => state + 1,
                Action::Minus => state - 1,
                Action::Noop => state,
            }
        }))
    }

    fn combined() -> CombinedReducer<i32, Action> {
        combine_reducers(vec![
            ("count1".to_string(), counter(10)),
            ("count2".to_string(), counter(20)),
        ])
    }

    #[test]
    fn test_initial_assembles_all_slices() {
        let state = combined().initial();
        assert_eq!(state["count1"], 10);
        assert_eq!(state["count2"], 20);
    }

    #[test]
    fn test_reduce_updates_every_responding_slice() {
        let combined = combined();
        let state = combined.reduce(combined.initial(), &Action::Add);
        assert_eq!(state["count1"], 11);
        assert_eq!(state["count2"], 21);
    }

    #[test]
    fn test_unmatched_action_returns_state_unchanged() {
        let combined = combined();
        let before = combined.initial();
        let after = combined.reduce(before.clone(), &Action::Noop);
        assert_eq!(after, before);
    }

    #[test]
    fn test_missing_slice_reduces_from_its_initial() {
        let combined = combined();
        let mut partial = BTreeMap::new();
        partial.insert("count1".to_string(), 100);

        let state = combined.reduce(partial, &Action::Noop);
        assert_eq!(state["count1"], 100);
        assert_eq!(state["count2"], 20);
    }

    #[test]
    fn test_only_one_slice_responds() {
        let minus_only = Box::new(FnReducer::new(0, |state: i32, action: &Action| {
            match action {
                Action::Minus => state - 1,
                _ => state,
            }
        }));
        let combined = combine_reducers(vec![
            ("a".to_string(), counter(10)),
            ("b".to_string(), minus_only as Box<dyn Reducer<i32, Action>>),
        ]);

        let state = combined.reduce(combined.initial(), &Action::Add);
        assert_eq!(state["a"], 11);
        assert_eq!(state["b"], 0);
    }
}
