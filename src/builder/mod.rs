//! Builder API for ergonomic machine construction.
//!
//! This module provides the fluent builder and macros for creating
//! machines with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{Action, Effect, Next, State};

/// Create a transition handler that ignores its inputs and moves to a
/// fixed state, with no effects.
///
/// # Example
///
/// ```
/// use reflux::builder::{goto, MachineBuilder};
/// use reflux::{impl_action_tags, impl_effect_tags, impl_state_tags};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl_state_tags! {
///     Light {
///         Red => "red",
///         Green => "green",
///     }
/// }
///
/// #[derive(Clone, Debug)]
/// enum Signal {
///     Tick,
/// }
///
/// impl_action_tags! {
///     Signal {
///         Tick => "tick",
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum NoEffect {}
///
/// impl_effect_tags! { NoEffect {} }
///
/// let mut machine = MachineBuilder::<Light, Signal, NoEffect>::new()
///     .initial(Light::Red)
///     .on("red", "tick", goto(Light::Green))
///     .on("green", "tick", goto(Light::Red))
///     .build()
///     .unwrap();
///
/// machine.dispatch(Signal::Tick);
/// assert_eq!(machine.state(), &Light::Green);
/// ```
pub fn goto<S, A, E>(to: S) -> impl Fn(&S, &A) -> Next<S, E> + Send + Sync
where
    S: State,
    A: Action,
    E: Effect,
{
    move |_, _| Next::new(to.clone())
}

/// Create a transition handler that ignores its inputs and moves to a
/// fixed state, attaching a fresh copy of the given effect queue.
pub fn goto_with_effects<S, A, E>(
    to: S,
    effects: Vec<E>,
) -> impl Fn(&S, &A) -> Next<S, E> + Send + Sync
where
    S: State,
    A: Action,
    E: Effect,
{
    move |_, _| Next::with_effects(to.clone(), effects.clone())
}
