//! # ngkit Framework
//!
//! The annotation composer.
//!
//! This layer provides:
//! - Annotation constructors (`service`, `filter`, `inject`, `view`,
//!   `component`, `directive`, `route_config`, `run`, `config`)
//! - The composition rules between them (View / Component ordering, deferred
//!   directive registration)
//! - [`RegistryAdapter`], the single call surface into the host module
//! - [`Composer`] and the [`decorate!`] macro for applying annotation lists
//!
//! The framework never stores registrations itself; everything is handed to
//! the [`ModuleRegistry`](ngkit_core::ModuleRegistry) the composer was built
//! with.

pub mod adapter;
pub mod annotation;
pub mod composer;
pub mod site;

#[cfg(test)]
pub(crate) mod testing;

pub use adapter::{AdapterStats, RegistryAdapter};
pub use annotation::{
    Annotation, BoxedAnnotation, Component, ComponentOptions, Config, Directive,
    DirectiveOptions, Filter, FilterOptions, Inject, RouteConfig, RouteOptions, Run, Service,
    ServiceOptions, View, ViewOptions, component, config, directive, filter, inject,
    route_config, run, service, view,
};
pub use composer::Composer;
pub use site::DecorationSite;

/// Prelude for common imports.
pub mod prelude {
    pub use super::annotation::{
        Annotation, ComponentOptions, DirectiveOptions, FilterOptions, RouteOptions,
        ServiceOptions, ViewOptions, component, config, directive, filter, inject,
        route_config, run, service, view,
    };
    pub use super::{Composer, DecorationSite, decorate};
    pub use ngkit_core::{ComposeError, ComposeResult, Target};
}
