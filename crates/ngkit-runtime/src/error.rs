//! Runtime error types.

use thiserror::Error;

use ngkit_core::ComposeError;

use crate::config::ConfigError;

/// Errors that can occur during runtime operations.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// An annotation was misconfigured or misordered.
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `bootstrap` was called on a module that already ran.
    #[error("Module '{module}' is already bootstrapped")]
    AlreadyBootstrapped { module: String },
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
