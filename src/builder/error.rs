//! Build errors for machine construction.

use thiserror::Error;

/// Errors that can occur when building a machine.
///
/// These cover construction shape only. Completeness of the transition
/// table is deliberately not validated: a missing handler at dispatch time
/// is a defined no-op, not a fault.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Duplicate transition handler for state '{state}' and action '{action}'")]
    DuplicateTransition { state: String, action: String },

    #[error("Duplicate global transition handler for action '{action}'")]
    DuplicateGlobalTransition { action: String },

    #[error("Duplicate effect handler for effect '{effect}'")]
    DuplicateEffectHandler { effect: String },
}
