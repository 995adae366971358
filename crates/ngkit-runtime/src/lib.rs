//! ngkit Runtime - hosting layer for the ngkit annotation composer.
//!
//! This crate provides:
//! - Configuration loading and validation (`config`)
//! - Logging setup (`LoggingBuilder`, `init_from_config`)
//! - An in-memory host module with a bootstrap phase (`ToolkitModule`)
//! - Runtime orchestration (`ToolkitRuntime`)
//!
//! ```ignore
//! use ngkit_runtime::ToolkitRuntime;
//! use ngkit_framework::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let runtime = ToolkitRuntime::new();
//!
//!     let home = Target::class("HomeCtrl");
//!     runtime.composer().apply(&home, &route_config("home", json!({ "url": "/" })))?;
//!
//!     runtime.bootstrap()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod module;
pub mod runtime;

pub use config::{
    ConfigError, ConfigLoader, ConfigResult, LoggingConfig, ModuleConfig, ToolkitConfig,
};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::{LoggingBuilder, SpanEvents, init_from_config};
pub use module::{Invocation, ModuleStats, Phase, ToolkitModule};
pub use runtime::{RuntimeBuilder, RuntimeStats, ToolkitRuntime};

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides the runtime entry points and the logging macros.
pub mod prelude {
    pub use super::{ModuleStats, RuntimeError, RuntimeResult, ToolkitModule, ToolkitRuntime};
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
