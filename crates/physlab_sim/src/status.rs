//! Run status shared by every scenario stepper

use serde::{Deserialize, Serialize};

/// Why a run ended in failure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The cart was too slow to hold the track in the upper half of the loop
    InsufficientSpeed,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::InsufficientSpeed => write!(f, "insufficient speed"),
        }
    }
}

/// Lifecycle of a scenario run
///
/// `Succeeded` and `Failed` are terminal: the stepper ignores further
/// `run`/`pause`/`toggle`/`tick` calls until `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Succeeded,
    Failed(StopReason),
}

impl RunStatus {
    pub fn is_running(self) -> bool {
        self == RunStatus::Running
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Succeeded | RunStatus::Failed(_))
    }

    /// Status after a `run` command
    pub fn on_run(self) -> Self {
        match self {
            RunStatus::Idle | RunStatus::Paused | RunStatus::Running => RunStatus::Running,
            terminal => terminal,
        }
    }

    /// Status after a `pause` command
    pub fn on_pause(self) -> Self {
        match self {
            RunStatus::Running => RunStatus::Paused,
            other => other,
        }
    }

    /// Status after a `toggle` command
    pub fn on_toggle(self) -> Self {
        match self {
            RunStatus::Running => RunStatus::Paused,
            RunStatus::Idle | RunStatus::Paused => RunStatus::Running,
            terminal => terminal,
        }
    }
}
