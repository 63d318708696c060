//! Macros for ergonomic tag trait implementations.
//!
//! State variants usually carry data fields, so these macros implement the
//! tag traits for an existing enum rather than generating the enum itself.
//! Variants of any shape (unit, tuple, struct) are matched with `{ .. }`
//! patterns.

/// Generate a `State` trait implementation from a variant-to-tag list.
///
/// # Example
///
/// ```
/// use reflux::impl_state_tags;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum FormState {
///     Initial { email: String },
///     Pending,
///     Errored { error: String },
///     Success,
/// }
///
/// impl_state_tags! {
///     FormState {
///         Initial => "initial",
///         Pending => "pending",
///         Errored => "errored",
///         Success => "success",
///     }
///     final: [Success]
///     error: [Errored]
/// }
///
/// use reflux::core::State;
/// assert_eq!(FormState::Pending.tag(), "pending");
/// assert!(FormState::Success.is_final());
/// ```
#[macro_export]
macro_rules! impl_state_tags {
    (
        $name:ident {
            $($variant:ident => $tag:literal),+ $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        impl $crate::core::State for $name {
            fn tag(&self) -> &str {
                match *self {
                    $(Self::$variant { .. } => $tag),+
                }
            }

            fn is_final(&self) -> bool {
                match *self {
                    $($(Self::$final { .. } => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match *self {
                    $($(Self::$error { .. } => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Action` trait implementation from a variant-to-tag list.
///
/// # Example
///
/// ```
/// use reflux::impl_action_tags;
///
/// #[derive(Clone, Debug)]
/// enum FormAction {
///     ChangeValue { value: String },
///     SubmitForm,
/// }
///
/// impl_action_tags! {
///     FormAction {
///         ChangeValue => "changeValue",
///         SubmitForm => "submitForm",
///     }
/// }
///
/// use reflux::core::Action;
/// assert_eq!(FormAction::SubmitForm.tag(), "submitForm");
/// ```
#[macro_export]
macro_rules! impl_action_tags {
    (
        $name:ident {
            $($variant:ident => $tag:literal),* $(,)?
        }
    ) => {
        impl $crate::core::Action for $name {
            fn tag(&self) -> &str {
                match *self {
                    $(Self::$variant { .. } => $tag),*
                }
            }
        }
    };
}

/// Generate an `Effect` trait implementation from a variant-to-tag list.
///
/// An empty list is allowed for machines that declare no effects:
/// `impl_effect_tags! { NoEffect {} }` on an empty enum.
#[macro_export]
macro_rules! impl_effect_tags {
    (
        $name:ident {
            $($variant:ident => $tag:literal),* $(,)?
        }
    ) => {
        impl $crate::core::Effect for $name {
            fn tag(&self) -> &str {
                match *self {
                    $(Self::$variant { .. } => $tag),*
                }
            }
        }
    };
}
