//! Core engine types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - `State`, `Action`, `Effect` tag traits
//! - The transition table and the total `reduce` step
//! - Immutable dispatch log tracking
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy. Side effects are described by
//! `Effect` values and performed by the host binding in `crate::binding`.

mod action;
mod effect;
mod history;
mod state;
mod table;

pub use action::Action;
pub use effect::{Effect, EffectQueue, Next};
pub use history::{DispatchLog, DispatchRecord};
pub use state::State;
pub use table::{TransitionFn, TransitionTable};
