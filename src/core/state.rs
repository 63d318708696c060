//! Core State trait for machine states.
//!
//! All machine states must implement this trait, which exposes the
//! state's tag discriminant without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// A state is a tagged variant: the tag selects which transition handlers
/// are applicable, and the variant's fields carry the data for that tag.
/// States are immutable values, replaced wholesale on every transition.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for snapshots and log tracking
/// - `PartialEq`: states must be comparable for transition logic and tests
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for log export
///
/// # Example
///
/// ```rust
/// use reflux::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum FormState {
///     Editing { draft: String },
///     Submitted,
///     Failed { error: String },
/// }
///
/// impl State for FormState {
///     fn tag(&self) -> &str {
///         match self {
///             Self::Editing { .. } => "editing",
///             Self::Submitted { .. } => "submitted",
///             Self::Failed { .. } => "failed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Submitted)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Failed { .. })
///     }
/// }
///
/// let state = FormState::Editing { draft: String::new() };
/// assert_eq!(state.tag(), "editing");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's tag discriminant.
    ///
    /// The tag keys the transition table lookup: handlers registered for
    /// this tag are the only per-state handlers considered while the
    /// machine sits in this state.
    fn tag(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states represent completion points where no further
    /// transitions are expected. The engine does not enforce this; it is
    /// advisory for callers.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
