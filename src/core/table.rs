//! Transition table and the pure reduce step.
//!
//! The table is a two-level mapping, state-tag → action-tag → handler, plus
//! a flat global fallback keyed by action-tag alone. It is built once and
//! treated as immutable for the life of the machine.

use crate::core::action::Action;
use crate::core::effect::{Effect, Next};
use crate::core::state::State;
use std::collections::HashMap;
use std::sync::Arc;

/// Type alias for transition handler functions.
///
/// A handler receives the current state and the incoming action and returns
/// a complete replacement state, optionally carrying a fresh effect queue.
/// Handlers must be pure: all side effects go through declared effects.
pub type TransitionFn<S, A, E> = Arc<dyn Fn(&S, &A) -> Next<S, E> + Send + Sync>;

/// Two-level transition lookup table with a global fallback.
///
/// Lookup precedence, highest to lowest:
///
/// 1. the handler registered for this exact (state-tag, action-tag) pair
/// 2. the global handler registered for this action-tag, applicable from
///    any state
/// 3. neither exists: identity — the dispatch is a defined no-op, not an
///    error
///
/// # Example
///
/// ```rust
/// use reflux::core::{Action, Effect, Next, State, TransitionTable};
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl State for Light {
///     fn tag(&self) -> &str {
///         match self {
///             Self::Red => "red",
///             Self::Green => "green",
///         }
///     }
/// }
///
/// #[derive(Clone, Debug)]
/// struct Tick;
///
/// impl Action for Tick {
///     fn tag(&self) -> &str {
///         "tick"
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum NoEffect {}
///
/// impl Effect for NoEffect {
///     fn tag(&self) -> &str {
///         match *self {}
///     }
/// }
///
/// let mut table: TransitionTable<Light, Tick, NoEffect> = TransitionTable::new();
/// table.insert("red", "tick", Arc::new(|_, _| Next::new(Light::Green)));
///
/// let next = table.reduce(&Light::Red, &Tick).unwrap();
/// assert_eq!(next.state, Light::Green);
///
/// // No handler in Green, no global fallback: identity.
/// assert!(table.reduce(&Light::Green, &Tick).is_none());
/// ```
pub struct TransitionTable<S: State, A: Action, E: Effect> {
    states: HashMap<String, HashMap<String, TransitionFn<S, A, E>>>,
    global: HashMap<String, TransitionFn<S, A, E>>,
}

impl<S: State, A: Action, E: Effect> TransitionTable<S, A, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            global: HashMap::new(),
        }
    }

    /// Register a handler for an exact (state-tag, action-tag) pair.
    ///
    /// Returns the previously registered handler for that pair, if any.
    pub fn insert(
        &mut self,
        state_tag: &str,
        action_tag: &str,
        handler: TransitionFn<S, A, E>,
    ) -> Option<TransitionFn<S, A, E>> {
        self.states
            .entry(state_tag.to_string())
            .or_default()
            .insert(action_tag.to_string(), handler)
    }

    /// Register a global fallback handler for an action-tag, applicable
    /// from any state whose per-state table has no entry for it.
    ///
    /// Returns the previously registered global handler, if any.
    pub fn insert_global(
        &mut self,
        action_tag: &str,
        handler: TransitionFn<S, A, E>,
    ) -> Option<TransitionFn<S, A, E>> {
        self.global.insert(action_tag.to_string(), handler)
    }

    /// Look up the handler that would run for this (state-tag, action-tag)
    /// pair, honoring precedence.
    pub fn lookup(&self, state_tag: &str, action_tag: &str) -> Option<&TransitionFn<S, A, E>> {
        self.states
            .get(state_tag)
            .and_then(|actions| actions.get(action_tag))
            .or_else(|| self.global.get(action_tag))
    }

    /// Compute the next state for a (state, action) pair.
    ///
    /// This is the pure core of the engine. It is total: a missing handler
    /// yields `None`, which callers interpret as identity (the input state
    /// is unchanged). It never fails.
    pub fn reduce(&self, state: &S, action: &A) -> Option<Next<S, E>> {
        self.lookup(state.tag(), action.tag())
            .map(|handler| handler(state, action))
    }
}

impl<S: State, A: Action, E: Effect> Default for TransitionTable<S, A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action, E: Effect> Clone for TransitionTable<S, A, E> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            global: self.global.clone(),
        }
    }
}
