//! Login Form Machine
//!
//! This example demonstrates the full dispatch loop on a login form:
//! field edits, validation, a pending submit carrying a declarative
//! submit effect, and effect handlers reporting back through dispatch.
//!
//! Key concepts:
//! - Tagged state/action/effect enums with data-carrying variants
//! - Transition handlers returning complete replacement states
//! - Effects as declarative payloads handled outside the pure step
//! - Effect handlers dispatching follow-up actions
//!
//! Run with: cargo run --example form

use reflux::builder::MachineBuilder;
use reflux::core::{Next, State};
use reflux::{impl_action_tags, impl_effect_tags, impl_state_tags};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum FormState {
    Initial {
        email: String,
        password: String,
        form_error: String,
    },
    Pending {
        email: String,
        password: String,
    },
    Errored {
        error: String,
    },
    Success,
}

impl_state_tags! {
    FormState {
        Initial => "initial",
        Pending => "pending",
        Errored => "errored",
        Success => "success",
    }
    final: [Success]
    error: [Errored]
}

#[derive(Clone, Copy, Debug)]
enum Field {
    Email,
    Password,
}

#[derive(Clone, Debug)]
enum FormAction {
    ChangeValue { input: Field, value: String },
    SubmitForm,
    ReportSubmitSuccess,
    ClickBackButton,
}

impl_action_tags! {
    FormAction {
        ChangeValue => "changeValue",
        SubmitForm => "submitForm",
        ReportSubmitSuccess => "reportSubmitSuccess",
        ClickBackButton => "clickBackButton",
    }
}

#[derive(Clone, PartialEq, Debug)]
enum FormEffect {
    SubmitForm { email: String, password: String },
    NavigateAwayFromPage,
}

impl_effect_tags! {
    FormEffect {
        SubmitForm => "submitForm",
        NavigateAwayFromPage => "navigateAwayFromPage",
    }
}

fn main() {
    println!("=== Login Form Machine ===\n");

    let mut machine = MachineBuilder::new()
        .initial(FormState::Initial {
            email: String::new(),
            password: String::new(),
            form_error: String::new(),
        })
        .on("initial", "changeValue", |state, action| {
            let FormState::Initial {
                email, password, ..
            } = state
            else {
                unreachable!();
            };
            let FormAction::ChangeValue { input, value } = action else {
                unreachable!();
            };
            let (email, password) = match input {
                Field::Email => (value.clone(), password.clone()),
                Field::Password => (email.clone(), value.clone()),
            };
            Next::new(FormState::Initial {
                email,
                password,
                form_error: String::new(),
            })
        })
        .on("initial", "submitForm", |state, _| {
            let FormState::Initial {
                email, password, ..
            } = state
            else {
                unreachable!();
            };
            if email.is_empty() || password.is_empty() {
                return Next::new(FormState::Initial {
                    email: email.clone(),
                    password: password.clone(),
                    form_error: "You must include all values above.".to_string(),
                });
            }
            Next::with_effects(
                FormState::Pending {
                    email: email.clone(),
                    password: password.clone(),
                },
                vec![FormEffect::SubmitForm {
                    email: email.clone(),
                    password: password.clone(),
                }],
            )
        })
        .on("pending", "reportSubmitSuccess", |_, _| {
            Next::new(FormState::Success)
        })
        .on("success", "clickBackButton", |state: &FormState, _| {
            Next::with_effects(state.clone(), vec![FormEffect::NavigateAwayFromPage])
        })
        .effect("submitForm", |ctx| {
            // A real handler would issue the network request here and
            // report the outcome back through dispatch.
            if let FormEffect::SubmitForm { email, .. } = ctx.effect() {
                println!("  [Network] Requesting token for {email}");
            }
            ctx.dispatch(FormAction::ReportSubmitSuccess);
        })
        .effect("navigateAwayFromPage", |_| {
            println!("  [Browser] Navigating to /");
        })
        .build()
        .expect("form machine builds");

    println!("Filling in the form:");
    machine.dispatch(FormAction::ChangeValue {
        input: Field::Email,
        value: "a@b.com".to_string(),
    });
    machine.dispatch(FormAction::ChangeValue {
        input: Field::Password,
        value: "hunter2".to_string(),
    });
    println!("  State: {:?}\n", machine.state());

    println!("Submitting:");
    machine.dispatch(FormAction::SubmitForm);
    println!("  State: {:?}\n", machine.state());

    println!("Pressing back:");
    machine.dispatch(FormAction::ClickBackButton);
    println!("  State: {:?}\n", machine.state());

    println!("Transitions committed:");
    for record in machine.log().records() {
        println!(
            "  {:>20}  {} -> {}  ({} effect(s))",
            record.action,
            record.from.tag(),
            record.to.tag(),
            record.effects
        );
    }

    println!("\n=== Example Complete ===");
}
