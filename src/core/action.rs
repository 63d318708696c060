//! Core Action trait for machine actions.

use std::fmt::Debug;

/// Trait for machine actions.
///
/// An action is a tagged event value that may trigger a transition. Actions
/// are ephemeral: the reducer consumes them immediately and they are never
/// stored, so the bounds are lighter than [`State`](crate::core::State).
///
/// # Example
///
/// ```rust
/// use reflux::core::Action;
///
/// #[derive(Clone, Debug)]
/// enum FormAction {
///     ChangeValue { value: String },
///     SubmitForm,
/// }
///
/// impl Action for FormAction {
///     fn tag(&self) -> &str {
///         match self {
///             Self::ChangeValue { .. } => "changeValue",
///             Self::SubmitForm { .. } => "submitForm",
///         }
///     }
/// }
///
/// assert_eq!(FormAction::SubmitForm.tag(), "submitForm");
/// ```
pub trait Action: Clone + Debug + Send + Sync {
    /// Get the action's tag discriminant.
    ///
    /// The tag keys the second level of the transition table lookup.
    fn tag(&self) -> &str;
}
