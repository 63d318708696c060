//! Builder for constructing machines.

use crate::binding::{EffectContext, EffectHandler, EffectHandlers, Machine};
use crate::builder::error::BuildError;
use crate::core::{Action, Effect, Next, State, TransitionFn, TransitionTable};
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
///
/// The whole configuration is supplied here: the initial state, the
/// per-state transition table, the optional global fallback table, the
/// effect handler table, and the optional mount-time effect queue.
///
/// # Example
///
/// ```rust
/// use reflux::builder::MachineBuilder;
/// use reflux::core::Next;
/// use reflux::{impl_action_tags, impl_effect_tags, impl_state_tags};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl_state_tags! {
///     Door {
///         Open => "open",
///         Closed => "closed",
///     }
/// }
///
/// #[derive(Clone, Debug)]
/// enum DoorAction {
///     Toggle,
/// }
///
/// impl_action_tags! {
///     DoorAction {
///         Toggle => "toggle",
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum DoorEffect {
///     Creak,
/// }
///
/// impl_effect_tags! {
///     DoorEffect {
///         Creak => "creak",
///     }
/// }
///
/// let mut machine = MachineBuilder::<Door, DoorAction, DoorEffect>::new()
///     .initial(Door::Closed)
///     .on("closed", "toggle", |_, _| {
///         Next::with_effects(Door::Open, vec![DoorEffect::Creak])
///     })
///     .on("open", "toggle", |_, _| Next::new(Door::Closed))
///     .effect("creak", |_ctx| { /* play a sound */ })
///     .build()
///     .unwrap();
///
/// machine.dispatch(DoorAction::Toggle);
/// assert_eq!(machine.state(), &Door::Open);
/// ```
pub struct MachineBuilder<S: State + 'static, A: Action + 'static, E: Effect + 'static> {
    initial: Option<S>,
    transitions: Vec<(String, String, TransitionFn<S, A, E>)>,
    global: Vec<(String, TransitionFn<S, A, E>)>,
    effects: Vec<(String, EffectHandler<A, E>)>,
    run_effects_on_mount: Option<Vec<E>>,
}

impl<S: State + 'static, A: Action + 'static, E: Effect + 'static> MachineBuilder<S, A, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            global: Vec::new(),
            effects: Vec::new(),
            run_effects_on_mount: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a transition handler for an exact (state-tag, action-tag)
    /// pair.
    pub fn on<F>(mut self, state_tag: &str, action_tag: &str, handler: F) -> Self
    where
        F: Fn(&S, &A) -> Next<S, E> + Send + Sync + 'static,
    {
        self.transitions.push((
            state_tag.to_string(),
            action_tag.to_string(),
            Arc::new(handler),
        ));
        self
    }

    /// Register a global fallback handler for an action-tag, applicable
    /// from any state without a per-state entry for it.
    pub fn on_any<F>(mut self, action_tag: &str, handler: F) -> Self
    where
        F: Fn(&S, &A) -> Next<S, E> + Send + Sync + 'static,
    {
        self.global
            .push((action_tag.to_string(), Arc::new(handler)));
        self
    }

    /// Register an effect handler for an effect-tag.
    ///
    /// Required only if some transition enqueues that effect; an enqueued
    /// effect with no handler here is silently dropped at dispatch time.
    pub fn effect<F>(mut self, effect_tag: &str, handler: F) -> Self
    where
        F: Fn(&mut EffectContext<'_, A, E>) + Send + Sync + 'static,
    {
        self.effects.push((effect_tag.to_string(), Arc::new(handler)));
        self
    }

    /// Set an initial effect queue fired immediately when `build` seeds
    /// the machine, without any externally triggered action.
    pub fn run_effects_on_mount(mut self, effects: Vec<E>) -> Self {
        self.run_effects_on_mount = Some(effects);
        self
    }

    /// Build the machine.
    ///
    /// Fails on a missing initial state or duplicate registrations. Table
    /// completeness is not validated. If a mount-time effect queue was
    /// configured, its handlers fire before this returns.
    pub fn build(self) -> Result<Machine<S, A, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut table = TransitionTable::new();
        for (state, action, handler) in self.transitions {
            if table.insert(&state, &action, handler).is_some() {
                return Err(BuildError::DuplicateTransition { state, action });
            }
        }
        for (action, handler) in self.global {
            if table.insert_global(&action, handler).is_some() {
                return Err(BuildError::DuplicateGlobalTransition { action });
            }
        }

        let mut handlers = EffectHandlers::new();
        for (effect, handler) in self.effects {
            if handlers.insert_handler(&effect, handler).is_some() {
                return Err(BuildError::DuplicateEffectHandler { effect });
            }
        }

        let mut machine = Machine::new(initial, table, handlers);
        if let Some(effects) = self.run_effects_on_mount {
            machine.run_effects_on_mount(effects);
        }

        Ok(machine)
    }
}

impl<S: State + 'static, A: Action + 'static, E: Effect + 'static> Default
    for MachineBuilder<S, A, E>
{
    fn default() -> Self {
        Self::new()
    }
}
