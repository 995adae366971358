//! Annotations and the rules for combining them.
//!
//! Each annotation is a plain value built by a constructor function
//! ([`service`], [`view`], [`component`], …) and applied to a
//! [`DecorationSite`] through a [`RegistryAdapter`]. An annotation either
//! registers something immediately, or records state on the target that a
//! later annotation consumes.
//!
//! | Annotation | Site | Effect |
//! |------------|------|--------|
//! | [`run`] / [`config`] | function | immediate hook registration |
//! | [`service`] | class | immediate service registration |
//! | [`filter`] | function | immediate filter registration |
//! | [`inject`] | either | attaches the dependency list, no registration |
//! | [`view`] | class | stores a pending directive registration |
//! | [`component`] | class | runs the pending view registration, if any |
//! | [`directive`] | class | immediate directive registration |
//! | [`route_config`] | class | state config hook + controller registration |
//!
//! # Ordering
//!
//! Annotations are applied in the order the caller lists them:
//!
//! - [`view`] must come before [`component`] on the same target. The reverse
//!   order fails with [`ComposeError::CompositionOrder`]. A view without a
//!   following component is never registered, and no error is raised.
//! - [`inject`] should come before any annotation that registers the same
//!   target, for hosts that read the dependency list at registration time.
//!   Applying it later is accepted and logged as a warning.
//!
//! [`ComposeError::CompositionOrder`]: ngkit_core::ComposeError::CompositionOrder

pub mod component;
pub mod directive;
pub mod hooks;
pub mod inject;
pub mod route;
pub mod service;

pub use component::{Component, ComponentOptions, View, ViewOptions, component, view};
pub use directive::{Directive, DirectiveOptions, directive};
pub use hooks::{Config, Run, config, run};
pub use inject::{Inject, inject};
pub use route::{RouteConfig, RouteOptions, route_config};
pub use service::{Filter, FilterOptions, Service, ServiceOptions, filter, service};

use ngkit_core::ComposeResult;

use crate::adapter::RegistryAdapter;
use crate::site::DecorationSite;

/// A composable annotation.
pub trait Annotation: Send + Sync {
    /// Display name, as written on a declaration (`"Service"`, `"View"`, …).
    fn name(&self) -> &'static str;

    /// Applies the annotation to `site`, registering through `adapter`.
    ///
    /// # Errors
    ///
    /// Returns a [`ComposeError`](ngkit_core::ComposeError) when a required
    /// option is missing or the annotation conflicts with the target's state.
    /// Nothing is registered in that case.
    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()>;

    /// Boxes the annotation for use in a heterogeneous list.
    fn boxed(self) -> BoxedAnnotation
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased annotation.
pub type BoxedAnnotation = Box<dyn Annotation>;
