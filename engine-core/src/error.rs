//! Error type shared by all environments
//!
//! Every variant is a local contract violation. Environments report them
//! synchronously and leave their state untouched when they do.

/// Runtime error for environment operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid action {action}: expected a value in [0, {max}]")]
    InvalidAction { action: i64, max: i64 },
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
