//! Error types for the host shell.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Not a valid deep link: {0}")]
    InvalidDeepLink(String),

    #[error("Deep link scheme {found} is not {expected}")]
    UnsupportedScheme { expected: String, found: String },

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Update failed: {0}")]
    Update(String),

    #[error("Host signal channel closed")]
    SignalChannelClosed,
}
