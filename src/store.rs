// src/store.rs
// =============================================================================
// This module implements the predictable-state-container the views read
// from: a store holding keyed state slices, each paired with the pure
// reducer that owns its transitions.
//
// There is no global singleton — the store is constructed where the
// application starts and passed down explicitly. Route activation
// registers a reducer under a fixed key (idempotently), dispatch folds
// actions through the reducer, and unregistering a key on navigation away
// drops its slice.
//
// The store is the single writer: it processes one dispatched action at a
// time, so state transitions never interleave.
//
// Rust concepts:
// - Generics: Store<S, A> works for any (state, action) pair
// - Function pointers: A reducer is just fn(&S, &A) -> S
// - HashMap entry API: For insert-if-absent registration
// =============================================================================

use std::collections::HashMap;

/// Pure transition function mapping (current state, action) to next state
pub type Reducer<S, A> = fn(&S, &A) -> S;

// One registered slice: the current state and the reducer that rewrites it
struct Slice<S, A> {
    state: S,
    reducer: Reducer<S, A>,
}

// The state container
//
// S is the slice state type and A the action type. At this scale every
// slice shares one (S, A) pair; the keys exist so routes can register and
// unregister their slices independently.
pub struct Store<S, A> {
    slices: HashMap<&'static str, Slice<S, A>>,
}

impl<S, A> Store<S, A> {
    pub fn new() -> Self {
        Self {
            slices: HashMap::new(),
        }
    }

    // Registers a reducer under a key, seeding it with an initial state
    //
    // Idempotent: if the key is already registered the call is a no-op,
    // so re-activating a route keeps the slice's current state.
    pub fn register(&mut self, key: &'static str, reducer: Reducer<S, A>, initial: S) {
        self.slices
            .entry(key)
            .or_insert(Slice {
                state: initial,
                reducer,
            });
    }

    // Submits an action to a slice for reduction
    //
    // Returns true if the key had a registered reducer; dispatching to an
    // unknown key is a no-op returning false.
    pub fn dispatch(&mut self, key: &str, action: &A) -> bool {
        match self.slices.get_mut(key) {
            Some(slice) => {
                slice.state = (slice.reducer)(&slice.state, action);
                true
            }
            None => false,
        }
    }

    /// The current state of a slice, if registered
    pub fn state(&self, key: &str) -> Option<&S> {
        self.slices.get(key).map(|slice| &slice.state)
    }

    /// Whether a reducer is registered under a key
    pub fn is_registered(&self, key: &str) -> bool {
        self.slices.contains_key(key)
    }

    // Drops a slice, as happens on navigation away from its view
    //
    // Returns true if the key was registered.
    pub fn unregister(&mut self, key: &str) -> bool {
        self.slices.remove(key).is_some()
    }
}

impl<S, A> Default for Store<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is fn(&S, &A) -> S?
//    - A plain function pointer type: any top-level function with that
//      signature fits, no boxing or closures needed
//    - Reducers are pure, so a stateless function pointer is exactly right
//
// 2. What does entry(key).or_insert(..) do?
//    - Looks up the key; inserts the value only if the key is absent
//    - That one call is what makes registration idempotent
//
// 3. Why &'static str keys?
//    - Slice keys are fixed at compile time (each route owns one)
//    - 'static means the string lives for the whole program, so the map
//      never has to own or copy key data
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // A tiny counter machine keeps these tests independent of FileState
    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        value: i64,
    }

    enum CounterAction {
        Add(i64),
        Reset,
    }

    fn reduce(state: &Counter, action: &CounterAction) -> Counter {
        match action {
            CounterAction::Add(n) => Counter {
                value: state.value + n,
            },
            CounterAction::Reset => Counter { value: 0 },
        }
    }

    #[test]
    fn test_register_and_dispatch() {
        let mut store: Store<Counter, CounterAction> = Store::new();
        store.register("counter", reduce, Counter { value: 0 });

        assert!(store.dispatch("counter", &CounterAction::Add(2)));
        assert!(store.dispatch("counter", &CounterAction::Add(3)));
        assert_eq!(store.state("counter"), Some(&Counter { value: 5 }));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut store: Store<Counter, CounterAction> = Store::new();
        store.register("counter", reduce, Counter { value: 0 });
        store.dispatch("counter", &CounterAction::Add(7));

        // Re-registering must not reset the slice's state
        store.register("counter", reduce, Counter { value: 0 });
        assert_eq!(store.state("counter"), Some(&Counter { value: 7 }));
    }

    #[test]
    fn test_dispatch_unknown_key_is_noop() {
        let mut store: Store<Counter, CounterAction> = Store::new();
        assert!(!store.dispatch("missing", &CounterAction::Reset));
        assert_eq!(store.state("missing"), None);
    }

    #[test]
    fn test_unregister_drops_slice() {
        let mut store: Store<Counter, CounterAction> = Store::new();
        store.register("counter", reduce, Counter { value: 1 });
        assert!(store.is_registered("counter"));

        assert!(store.unregister("counter"));
        assert!(!store.is_registered("counter"));
        assert_eq!(store.state("counter"), None);
        assert!(!store.unregister("counter"));
    }
}
