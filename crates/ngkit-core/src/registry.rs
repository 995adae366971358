//! The host module registry seen from the composer.
//!
//! The composer never stores services, directives or routes itself. It only
//! calls into a [`ModuleRegistry`] supplied by the host framework; how the
//! host later instantiates or invokes what it received is outside the core.
//!
//! Implementations are shared behind `Arc<dyn ModuleRegistry>` and receive
//! `&self`, so any bookkeeping they do needs interior mutability.

use crate::definition::{ConfigHook, DirectiveFactory, StateDefinition};
use crate::target::Target;

/// Registration surface of a host module.
pub trait ModuleRegistry: Send + Sync {
    /// The module's name.
    fn name(&self) -> &str;

    /// Queues a function for the host's run phase.
    fn run(&self, hook: Target);

    /// Queues a hook for the host's config phase.
    fn config(&self, hook: ConfigHook);

    /// Registers a service constructor.
    fn service(&self, name: &str, ctor: Target);

    /// Registers a filter function.
    fn filter(&self, name: &str, filter: Target);

    /// Registers a directive under its camel-cased name.
    fn directive(&self, name: &str, factory: DirectiveFactory);

    /// Registers a controller constructor.
    fn controller(&self, name: &str, ctor: Target);
}

/// Routing state registration, handed to config hooks by the host.
pub trait StateProvider {
    /// Registers a named application state.
    fn state(&self, name: &str, definition: StateDefinition);
}
