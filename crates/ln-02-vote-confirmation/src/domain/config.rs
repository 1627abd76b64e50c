use std::time::Duration;

/// Time between a confirmed submission and the automatic selection clear.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(10);

/// Workflow tuning.
#[derive(Debug, Clone)]
pub struct VoteConfirmationConfig {
    pub cooldown: Duration,
}

impl Default for VoteConfirmationConfig {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}
