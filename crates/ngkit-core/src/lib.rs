//! # ngkit Core
//!
//! The data model shared by every ngkit crate.
//!
//! This crate provides:
//! - **Targets**: shared handles to decorated classes and functions, carrying
//!   the metadata annotations attach ([`Target`], [`CompositionPhase`])
//! - **Definitions**: the values handed to the host ([`Definition`],
//!   [`DirectiveFactory`], [`ConfigHook`])
//! - **Registry traits**: the host module surface ([`ModuleRegistry`],
//!   [`StateProvider`])
//! - **Name casing**: selector to directive-name conversion ([`caser`])
//! - **Errors**: [`ComposeError`]
//!
//! The annotations themselves live in `ngkit-framework`.

pub mod caser;
pub mod definition;
pub mod error;
pub mod registry;
pub mod target;

pub use caser::{dash_to_camel_case, first_letter_to_lower_case, selector_to_directive_name};
pub use definition::{
    ConfigHook, ControllerRef, Definition, DirectiveDefinition, DirectiveFactory,
    StateDefinition, StateRegistration,
};
pub use error::{ComposeError, ComposeResult};
pub use registry::{ModuleRegistry, StateProvider};
pub use target::{CompositionPhase, DeferredView, Target, TargetKind};

/// Prelude for common imports.
pub mod prelude {
    pub use super::{
        ComposeError, ComposeResult, ConfigHook, Definition, DirectiveFactory, ModuleRegistry,
        StateProvider, Target, TargetKind,
    };
}
