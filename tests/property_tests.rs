//! Property-based tests for the dispatch engine.
//!
//! These tests use proptest to verify the engine's laws hold across many
//! randomly generated inputs: identity for unhandled dispatches, per-state
//! precedence over the global fallback, once-per-queue effect firing, and
//! FIFO processing of handler-issued dispatches.

use proptest::prelude::*;
use reflux::builder::MachineBuilder;
use reflux::core::{DispatchLog, Next, TransitionTable};
use reflux::{impl_action_tags, impl_effect_tags, impl_state_tags, Machine};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum TestState {
    Alpha { n: u32 },
    Beta { n: u32 },
}

impl_state_tags! {
    TestState {
        Alpha => "alpha",
        Beta => "beta",
    }
}

impl TestState {
    fn n(&self) -> u32 {
        match self {
            Self::Alpha { n } | Self::Beta { n } => *n,
        }
    }
}

#[derive(Clone, Debug)]
enum TestAction {
    Step,
    Append { digit: u32 },
    Emit { count: u32 },
    Noop,
}

impl_action_tags! {
    TestAction {
        Step => "step",
        Append => "append",
        Emit => "emit",
        Noop => "noop",
    }
}

#[derive(Clone, PartialEq, Debug)]
enum TestEffect {
    Pulse { seq: u32 },
}

impl_effect_tags! {
    TestEffect {
        Pulse => "pulse",
    }
}

prop_compose! {
    fn arbitrary_state()(beta in any::<bool>(), n in 0..1_000_000u32) -> TestState {
        if beta {
            TestState::Beta { n }
        } else {
            TestState::Alpha { n }
        }
    }
}

proptest! {
    #[test]
    fn unhandled_dispatch_is_identity(initial in arbitrary_state()) {
        let mut machine: Machine<TestState, TestAction, TestEffect> = MachineBuilder::new()
            .initial(initial.clone())
            .build()
            .unwrap();

        machine.dispatch(TestAction::Noop);

        prop_assert_eq!(machine.state(), &initial);
        prop_assert!(machine.effects().is_empty());
        prop_assert!(machine.log().records().is_empty());
    }

    #[test]
    fn reduce_without_handler_is_none(state in arbitrary_state()) {
        let table: TransitionTable<TestState, TestAction, TestEffect> = TransitionTable::new();
        prop_assert!(table.reduce(&state, &TestAction::Noop).is_none());
    }

    #[test]
    fn per_state_handler_beats_global_fallback(n in 0..1_000_000u32) {
        let mut machine: Machine<TestState, TestAction, TestEffect> = MachineBuilder::new()
            .initial(TestState::Alpha { n })
            .on("alpha", "step", |state: &TestState, _: &TestAction| {
                Next::new(TestState::Beta { n: state.n() })
            })
            .on_any("step", |_, _| Next::new(TestState::Alpha { n: 0 }))
            .build()
            .unwrap();

        // From alpha the per-state handler wins and preserves n.
        machine.dispatch(TestAction::Step);
        prop_assert_eq!(machine.state(), &TestState::Beta { n });

        // From beta there is no per-state entry, so the global runs.
        machine.dispatch(TestAction::Step);
        prop_assert_eq!(machine.state(), &TestState::Alpha { n: 0 });
    }

    #[test]
    fn effects_fire_once_each_in_queue_order(count in 0..20u32) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let fired_clone = Arc::clone(&fired);

        let mut machine: Machine<TestState, TestAction, TestEffect> = MachineBuilder::new()
            .initial(TestState::Alpha { n: 0 })
            .on("alpha", "emit", move |state: &TestState, action: &TestAction| {
                let TestAction::Emit { count } = action else {
                    unreachable!();
                };
                let pulses = (0..*count).map(|seq| TestEffect::Pulse { seq }).collect();
                Next::with_effects(state.clone(), pulses)
            })
            .effect("pulse", move |ctx| {
                let TestEffect::Pulse { seq } = ctx.effect();
                fired_clone.lock().unwrap().push(*seq);
            })
            .build()
            .unwrap();

        machine.dispatch(TestAction::Emit { count });

        let expected: Vec<u32> = (0..count).collect();
        prop_assert_eq!(&*fired.lock().unwrap(), &expected);

        // A later unhandled dispatch must not replay the queue.
        machine.dispatch(TestAction::Noop);
        prop_assert_eq!(&*fired.lock().unwrap(), &expected);
    }

    #[test]
    fn handler_dispatches_are_processed_fifo(digits in prop::collection::vec(0..10u32, 0..8)) {
        let digits_clone = digits.clone();

        let mut machine: Machine<TestState, TestAction, TestEffect> = MachineBuilder::new()
            .initial(TestState::Alpha { n: 0 })
            .on("alpha", "emit", |state: &TestState, _: &TestAction| {
                Next::with_effects(state.clone(), vec![TestEffect::Pulse { seq: 0 }])
            })
            .on("alpha", "append", |state: &TestState, action: &TestAction| {
                let TestAction::Append { digit } = action else {
                    unreachable!();
                };
                Next::new(TestState::Alpha {
                    n: state.n() * 10 + digit,
                })
            })
            .effect("pulse", move |ctx| {
                for digit in &digits_clone {
                    ctx.dispatch(TestAction::Append { digit: *digit });
                }
            })
            .build()
            .unwrap();

        machine.dispatch(TestAction::Emit { count: 1 });

        // Each deferred append lands in issue order, so the digits end up
        // positionally encoded in n.
        let expected = digits.iter().fold(0u32, |acc, d| acc * 10 + d);
        prop_assert_eq!(machine.state().n(), expected);
    }

    #[test]
    fn log_chains_committed_transitions(steps in 1..10u32) {
        let mut machine: Machine<TestState, TestAction, TestEffect> = MachineBuilder::new()
            .initial(TestState::Alpha { n: 0 })
            .on_any("step", |state: &TestState, _: &TestAction| {
                Next::new(TestState::Alpha { n: state.n() + 1 })
            })
            .build()
            .unwrap();

        for _ in 0..steps {
            machine.dispatch(TestAction::Step);
        }

        let records = machine.log().records();
        prop_assert_eq!(records.len() as u32, steps);

        let path = machine.log().get_path();
        prop_assert_eq!(path[0], &TestState::Alpha { n: 0 });
        for pair in records.windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
        prop_assert_eq!(machine.state(), &TestState::Alpha { n: steps });
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }

    #[test]
    fn log_roundtrip_serialization(steps in 0..5u32) {
        let mut machine: Machine<TestState, TestAction, TestEffect> = MachineBuilder::new()
            .initial(TestState::Alpha { n: 0 })
            .on_any("step", |state: &TestState, _: &TestAction| {
                Next::new(TestState::Alpha { n: state.n() + 1 })
            })
            .build()
            .unwrap();

        for _ in 0..steps {
            machine.dispatch(TestAction::Step);
        }

        let json = serde_json::to_string(machine.log()).unwrap();
        let deserialized: DispatchLog<TestState> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(deserialized.records().len(), machine.log().records().len());
    }
}
