//! Runtime orchestration.
//!
//! [`ToolkitRuntime`] ties configuration, logging, the host module and the
//! composer together.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ngkit_runtime::ToolkitRuntime;
//!
//! // Auto-loads ngkit.toml from the current directory
//! let runtime = ToolkitRuntime::new();
//!
//! // Custom configuration path
//! let runtime = ToolkitRuntime::builder()
//!     .config_file("config/ngkit.yaml")
//!     .build()?;
//!
//! runtime.composer().apply(&target, &service("api"))?;
//! runtime.bootstrap()?;
//! ```

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use ngkit_framework::{AdapterStats, Composer};

use crate::config::{ConfigLoader, ToolkitConfig};
use crate::error::RuntimeResult;
use crate::logging;
use crate::module::{ModuleStats, ToolkitModule};

/// Owns the host module and the composer that registers into it.
pub struct ToolkitRuntime {
    config: ToolkitConfig,
    module: Arc<ToolkitModule>,
    composer: Composer,
}

impl ToolkitRuntime {
    /// Creates a runtime from `ngkit.toml` / `ngkit.yaml` in the current
    /// directory, falling back to defaults if loading fails.
    pub fn new() -> Self {
        let config = ConfigLoader::new()
            .with_current_dir()
            .load()
            .unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config ({e}), using defaults");
                ToolkitConfig::default()
            });

        Self::from_config(&config)
    }

    /// Creates a runtime from the default config locations, failing on a
    /// config error.
    pub fn load() -> RuntimeResult<Self> {
        Self::builder().build()
    }

    /// Creates a runtime builder for custom configuration.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Creates a runtime from configuration.
    ///
    /// Initializes logging, then builds the module named in `config.module`.
    pub fn from_config(config: &ToolkitConfig) -> Self {
        logging::init_from_config(&config.logging);

        let module = Arc::new(ToolkitModule::from_config(&config.module));
        let composer = Composer::new(module.clone());

        info!(
            module = %config.module.name,
            requires = ?config.module.requires,
            log_level = %config.logging.level,
            "Runtime initialized from configuration"
        );

        Self {
            config: config.clone(),
            module,
            composer,
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// The host module.
    pub fn module(&self) -> &Arc<ToolkitModule> {
        &self.module
    }

    /// The composer that applies annotations to this runtime's module.
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Runs the module's config and run phases.
    pub fn bootstrap(&self) -> RuntimeResult<ModuleStats> {
        self.module.bootstrap()?;
        let stats = self.module.stats();
        info!("{stats}");
        Ok(stats)
    }

    /// Returns runtime statistics.
    pub fn stats(&self) -> RuntimeStats {
        RuntimeStats {
            module: self.module.stats(),
            registrations: self.composer.stats(),
        }
    }
}

impl Default for ToolkitRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Runtime statistics.
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    /// What the module holds.
    pub module: ModuleStats,
    /// What the composer's adapter forwarded.
    pub registrations: AdapterStats,
}

// =============================================================================
// RuntimeBuilder
// =============================================================================

/// Builder for creating a [`ToolkitRuntime`] with custom configuration.
pub struct RuntimeBuilder {
    config_loader: ConfigLoader,
}

impl RuntimeBuilder {
    /// Creates a new runtime builder searching the current directory.
    pub fn new() -> Self {
        Self {
            config_loader: ConfigLoader::new().with_current_dir(),
        }
    }

    /// Sets a specific configuration file to load.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.file(path);
        self
    }

    /// Sets the configuration profile (e.g., "development", "production").
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config_loader = self.config_loader.profile(profile);
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.search_path(path);
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.config_loader = self.config_loader.without_env();
        self
    }

    /// Merges additional configuration programmatically.
    pub fn merge(mut self, config: ToolkitConfig) -> Self {
        self.config_loader = self.config_loader.merge(config);
        self
    }

    /// Builds the runtime.
    pub fn build(self) -> RuntimeResult<ToolkitRuntime> {
        let config = self.config_loader.load()?;
        Ok(ToolkitRuntime::from_config(&config))
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
