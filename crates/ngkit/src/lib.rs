//! # ngkit
//!
//! Declarative registration of services, filters, directives, components and
//! routing states into a host module registry.
//!
//! ## Overview
//!
//! Annotations are applied to [`Target`](ngkit_core::Target)s (classes,
//! functions, or members of a class). Each annotation translates its options
//! into one or more registry calls, with View and Component cooperating so a
//! component's directive is only registered once both have been applied.
//!
//! ```text
//! ┌───────────────┐     ┌──────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │  Annotations  │────▶│ Composer │────▶│ RegistryAdapter │────▶│  ModuleRegistry  │
//! │ (per target)  │     │          │     │   (counts, log) │     │ (host / Toolkit) │
//! └───────────────┘     └──────────┘     └─────────────────┘     └──────────────────┘
//! ```
//!
//! - **Core**: targets, definitions, registry traits, name casing
//! - **Framework**: the annotations and their composition rules
//! - **Runtime**: configuration, logging, an in-memory module with bootstrap
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ngkit::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> anyhow::Result<()> {
//!     let runtime = ToolkitRuntime::new();
//!     let composer = runtime.composer();
//!
//!     let widget = Target::class("WidgetCtrl");
//!     decorate!(composer, widget => [
//!         view(ViewOptions::new().template("<div>{{vm.title}}</div>")),
//!         component("my-widget"),
//!     ])?;
//!
//!     runtime.bootstrap()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config`: load `ngkit.toml` (default)
//! - `yaml-config`: load `ngkit.yaml`
//! - `json-log`: JSON log format

pub use ngkit_core as core;
pub use ngkit_framework as framework;
pub use ngkit_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use ngkit::prelude::*;
/// ```
pub mod prelude {
    // Runtime - main entry point
    pub use ngkit_runtime::{ModuleStats, RuntimeError, ToolkitModule, ToolkitRuntime};

    // Annotations and composition
    pub use ngkit_framework::prelude::*;
    pub use ngkit_framework::{AdapterStats, RegistryAdapter};

    // Core types for custom hosts
    pub use ngkit_core::{
        ConfigHook, Definition, DirectiveFactory, ModuleRegistry, StateProvider, TargetKind,
    };
}
