use std::fmt;

/// Observable workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// Waiting for the user; confirm is possible.
    Idle,
    /// Idle, but confirm is refused (empty selection or missing second passphrase).
    Invalid,
    /// The vote call is outstanding.
    Submitting,
    /// The network accepted the votes; side effects are firing.
    Confirmed,
    /// Waiting for the timer that clears the selection.
    CoolingDown,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Invalid => "invalid",
            WorkflowState::Submitting => "submitting",
            WorkflowState::Confirmed => "confirmed",
            WorkflowState::CoolingDown => "cooling-down",
        };
        f.write_str(name)
    }
}
