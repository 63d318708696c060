//! Reflux: a finite-state-machine reducer with declarative queued effects
//!
//! Reflux pairs pure state transitions with declarative, queued side
//! effects. The core is a total `reduce(state, action) -> state'` built
//! from a lookup table; the host binding owns the current state in a
//! single mutable cell and, whenever a transition attaches a fresh effect
//! queue, triggers exactly one registered handler per effect - passing it
//! a dispatch callback that feeds actions back into the machine.
//!
//! # Core Concepts
//!
//! - **State / Action / Effect**: tagged variants via small tag traits
//! - **Transition table**: per-state handlers plus a global fallback;
//!   missing handler means identity, never an error
//! - **Effect queue**: replaced wholesale by each transition; handlers
//!   fire once per fresh queue, in queue order
//! - **Deferred dispatch**: handlers dispatch safely; their actions are
//!   processed FIFO after the handler returns
//!
//! # Example
//!
//! ```rust
//! use reflux::builder::MachineBuilder;
//! use reflux::core::{Next, State};
//! use reflux::{impl_action_tags, impl_effect_tags, impl_state_tags};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! enum SearchState {
//!     Idle,
//!     Searching { query: String },
//! }
//!
//! impl_state_tags! {
//!     SearchState {
//!         Idle => "idle",
//!         Searching => "searching",
//!     }
//! }
//!
//! #[derive(Clone, Debug)]
//! enum SearchAction {
//!     Search { query: String },
//!     Cancel,
//! }
//!
//! impl_action_tags! {
//!     SearchAction {
//!         Search => "search",
//!         Cancel => "cancel",
//!     }
//! }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum SearchEffect {
//!     FetchResults { query: String },
//! }
//!
//! impl_effect_tags! {
//!     SearchEffect {
//!         FetchResults => "fetchResults",
//!     }
//! }
//!
//! let mut machine = MachineBuilder::<SearchState, SearchAction, SearchEffect>::new()
//!     .initial(SearchState::Idle)
//!     .on("idle", "search", |_, action| {
//!         let SearchAction::Search { query } = action else {
//!             unreachable!("registered for search only");
//!         };
//!         Next::with_effects(
//!             SearchState::Searching { query: query.clone() },
//!             vec![SearchEffect::FetchResults { query: query.clone() }],
//!         )
//!     })
//!     .on_any("cancel", |_, _| Next::new(SearchState::Idle))
//!     .effect("fetchResults", |_ctx| { /* issue the request */ })
//!     .build()
//!     .unwrap();
//!
//! machine.dispatch(SearchAction::Search { query: "reflux".to_string() });
//! assert_eq!(machine.state().tag(), "searching");
//! ```

pub mod binding;
pub mod builder;
pub mod core;

// Re-export commonly used types
pub use binding::{EffectContext, EffectHandlers, Machine};
pub use builder::{BuildError, MachineBuilder};
pub use core::{Action, DispatchLog, DispatchRecord, Effect, Next, State, TransitionTable};
