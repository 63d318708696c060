//! Declarative effects and the transition return value.
//!
//! Effects describe side effects to perform ("submit the form", "navigate
//! away") without performing them. Transition handlers attach a fresh queue
//! of effects to the state they return; the host binding detects the fresh
//! queue and invokes one registered handler per effect, outside the pure
//! transition step.

use std::fmt::Debug;

/// Trait for declarative effect payloads.
///
/// An effect is a tagged value produced only by transition handlers, never
/// by the caller directly. It is owned by the state it is attached to and
/// discarded wholesale when the next transition replaces the queue.
///
/// # Example
///
/// ```rust
/// use reflux::core::Effect;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum FormEffect {
///     SubmitForm { email: String },
///     NavigateAwayFromPage,
/// }
///
/// impl Effect for FormEffect {
///     fn tag(&self) -> &str {
///         match self {
///             Self::SubmitForm { .. } => "submitForm",
///             Self::NavigateAwayFromPage { .. } => "navigateAwayFromPage",
///         }
///     }
/// }
/// ```
pub trait Effect: Clone + PartialEq + Debug + Send + Sync {
    /// Get the effect's tag discriminant, keying the effect handler table.
    fn tag(&self) -> &str;
}

/// The value returned by a transition handler: a complete replacement state
/// plus an optional fresh effect queue.
///
/// `effects: None` means no queue is attached — previous effects are never
/// carried forward, and no handler fires. `effects: Some(..)` attaches a
/// fresh queue, which fires handlers even if its contents happen to equal
/// the previous queue's.
#[derive(Clone, Debug, PartialEq)]
pub struct Next<S, E> {
    /// The complete replacement state (any tag).
    pub state: S,
    /// Fresh effect queue, if the handler attached one.
    pub effects: Option<Vec<E>>,
}

impl<S, E> Next<S, E> {
    /// A transition to `state` with no effects attached.
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: None,
        }
    }

    /// A transition to `state` carrying a fresh effect queue.
    pub fn with_effects(state: S, effects: Vec<E>) -> Self {
        Self {
            state,
            effects: Some(effects),
        }
    }
}

impl<S, E> From<S> for Next<S, E> {
    fn from(state: S) -> Self {
        Next::new(state)
    }
}

/// Queue of effects attached to the current state, with a generation
/// counter implementing identity-based change detection.
///
/// Handlers fire only when the generation advances. Replacing the queue
/// (a handler returned `Some(effects)`) advances it; clearing the queue (a
/// handler returned `None`) does not; an unhandled dispatch leaves the
/// queue untouched. This makes "fresh queue instance" explicit rather than
/// relying on pointer identity or structural equality.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectQueue<E> {
    items: Vec<E>,
    generation: u64,
}

impl<E> EffectQueue<E> {
    /// Create an empty queue at generation zero.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
        }
    }

    /// Replace the queue contents, advancing the generation.
    ///
    /// An empty `items` still advances the generation: a fresh empty queue
    /// is a distinct instance, it just has no handlers to fire.
    pub fn replace(&mut self, items: Vec<E>) {
        self.items = items;
        self.generation += 1;
    }

    /// Drop the queued effects without advancing the generation.
    ///
    /// Used when a transition omits the effect queue: old effects must not
    /// leak forward, and nothing fires.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The queued effects, in firing order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// The current generation. Advances once per fresh queue.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check whether the queue holds no effects.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<E> Default for EffectQueue<E> {
    fn default() -> Self {
        Self::empty()
    }
}
