//! Domain layer for the vote confirmation workflow.

pub mod config;
pub mod errors;
pub mod request;
pub mod selection;
pub mod state;

pub use config::VoteConfirmationConfig;
pub use errors::VoteError;
pub use request::ConfirmationRequest;
pub use selection::VoteSelection;
pub use state::WorkflowState;
