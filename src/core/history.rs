//! Dispatch log tracking.
//!
//! Provides immutable tracking of committed transitions over time,
//! following functional programming principles. Identity dispatches (no
//! matching handler) commit nothing and are not recorded.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// Records are immutable values representing a move from one state to
/// another at a specific point in time, driven by a specific action.
///
/// # Example
///
/// ```rust
/// use reflux::core::{DispatchRecord, State};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// impl State for TaskState {
///     fn tag(&self) -> &str {
///         match self {
///             Self::Pending => "pending",
///             Self::Running => "running",
///         }
///     }
/// }
///
/// let record = DispatchRecord {
///     from: TaskState::Pending,
///     to: TaskState::Running,
///     action: "start".to_string(),
///     effects: 0,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Tag of the action that drove the transition
    pub action: String,
    /// Number of effects the transition queued
    pub effects: usize,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of committed transitions.
///
/// The log is immutable - `record` returns a new log with the entry added,
/// leaving the original unchanged.
///
/// # Example
///
/// ```rust
/// use reflux::core::{DispatchLog, DispatchRecord, State};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     One,
///     Two,
/// }
///
/// impl State for Phase {
///     fn tag(&self) -> &str {
///         match self {
///             Self::One => "one",
///             Self::Two => "two",
///         }
///     }
/// }
///
/// let log = DispatchLog::new();
/// let log = log.record(DispatchRecord {
///     from: Phase::One,
///     to: Phase::Two,
///     action: "advance".to_string(),
///     effects: 0,
///     timestamp: Utc::now(),
/// });
///
/// let path = log.get_path();
/// assert_eq!(path.len(), 2); // One -> Two
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchLog<S: State> {
    records: Vec<DispatchRecord<S>>,
}

impl<S: State> Default for DispatchLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> DispatchLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log but
    /// returns a new one with the record added.
    pub fn record(&self, record: DispatchRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first record's `from`
    /// state, then the `to` state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last committed transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in commit order.
    pub fn records(&self) -> &[DispatchRecord<S>] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Pending,
        Success,
    }

    impl State for TestState {
        fn tag(&self) -> &str {
            match self {
                Self::Initial => "initial",
                Self::Pending => "pending",
                Self::Success => "success",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Success)
        }
    }

    fn record(from: TestState, to: TestState, action: &str) -> DispatchRecord<TestState> {
        DispatchRecord {
            from,
            to,
            action: action.to_string(),
            effects: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: DispatchLog<TestState> = DispatchLog::new();
        assert_eq!(log.records().len(), 0);
        assert!(log.get_path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_adds_entry() {
        let log = DispatchLog::new();
        let log = log.record(record(TestState::Initial, TestState::Pending, "submitForm"));

        assert_eq!(log.records().len(), 1);
        assert_eq!(log.records()[0].action, "submitForm");
    }

    #[test]
    fn record_is_immutable() {
        let log = DispatchLog::new();
        let new_log = log.record(record(TestState::Initial, TestState::Pending, "submitForm"));

        assert_eq!(log.records().len(), 0);
        assert_eq!(new_log.records().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let log = DispatchLog::new()
            .record(record(TestState::Initial, TestState::Pending, "submitForm"))
            .record(record(
                TestState::Pending,
                TestState::Success,
                "reportSubmitSuccess",
            ));

        let path = log.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Pending);
        assert_eq!(path[2], &TestState::Success);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let log = DispatchLog::new().record(record(
            TestState::Initial,
            TestState::Pending,
            "submitForm",
        ));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let log = log.record(record(
            TestState::Pending,
            TestState::Success,
            "reportSubmitSuccess",
        ));

        let duration = log.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let log = DispatchLog::new().record(record(
            TestState::Initial,
            TestState::Pending,
            "submitForm",
        ));

        assert_eq!(log.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = DispatchLog::new().record(record(
            TestState::Initial,
            TestState::Pending,
            "submitForm",
        ));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: DispatchLog<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(log.records().len(), deserialized.records().len());
        assert_eq!(deserialized.records()[0].from, TestState::Initial);
    }

    #[test]
    fn effects_count_is_tracked() {
        let entry = DispatchRecord {
            from: TestState::Initial,
            to: TestState::Pending,
            action: "submitForm".to_string(),
            effects: 1,
            timestamp: Utc::now(),
        };

        assert_eq!(entry.effects, 1);
    }
}
