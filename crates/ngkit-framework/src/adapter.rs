//! Registry adapter: the single call surface into the host module.
//!
//! Every annotation's effect is exactly one call through [`RegistryAdapter`].
//! The adapter forwards to the host [`ModuleRegistry`], records that the
//! handed-over targets are now registered, logs the call, and keeps per-kind
//! counters.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use ngkit_core::{ConfigHook, DirectiveFactory, ModuleRegistry, Target};

/// Shared, cloneable handle to a host module registry.
#[derive(Clone)]
pub struct RegistryAdapter {
    registry: Arc<dyn ModuleRegistry>,
    stats: Arc<Mutex<AdapterStats>>,
}

impl RegistryAdapter {
    /// Wraps a host registry.
    pub fn new(registry: Arc<dyn ModuleRegistry>) -> Self {
        Self {
            registry,
            stats: Arc::new(Mutex::new(AdapterStats::default())),
        }
    }

    /// The wrapped registry.
    pub fn registry(&self) -> &Arc<dyn ModuleRegistry> {
        &self.registry
    }

    /// Name of the wrapped module.
    pub fn module_name(&self) -> &str {
        self.registry.name()
    }

    /// Queues a run-phase hook.
    pub fn register_run_hook(&self, hook: Target) {
        debug!(module = %self.module_name(), hook = %hook, "Registering run hook");
        hook.mark_registered();
        self.stats.lock().run_hooks += 1;
        self.registry.run(hook);
    }

    /// Queues a config-phase hook.
    pub fn register_config_hook(&self, hook: ConfigHook) {
        match &hook {
            ConfigHook::Function(f) => {
                debug!(module = %self.module_name(), hook = %f, "Registering config hook");
                f.mark_registered();
            }
            ConfigHook::State(state) => {
                debug!(module = %self.module_name(), state = state.name(), "Registering state config hook");
            }
        }
        self.stats.lock().config_hooks += 1;
        self.registry.config(hook);
    }

    /// Registers a service constructor.
    pub fn register_service(&self, name: &str, ctor: Target) {
        debug!(module = %self.module_name(), service = name, target = %ctor, "Registering service");
        ctor.mark_registered();
        self.stats.lock().services += 1;
        self.registry.service(name, ctor);
    }

    /// Registers a filter function.
    pub fn register_filter(&self, name: &str, filter: Target) {
        debug!(module = %self.module_name(), filter = name, target = %filter, "Registering filter");
        filter.mark_registered();
        self.stats.lock().filters += 1;
        self.registry.filter(name, filter);
    }

    /// Registers a directive.
    pub fn register_directive(&self, name: &str, factory: DirectiveFactory) {
        debug!(module = %self.module_name(), directive = name, "Registering directive");
        match &factory {
            DirectiveFactory::Function(f) => {
                f.mark_registered();
            }
            DirectiveFactory::Definition(def) => {
                if let Some(target) = def.controller().and_then(|c| c.as_target()) {
                    target.mark_registered();
                }
            }
        }
        self.stats.lock().directives += 1;
        self.registry.directive(name, factory);
    }

    /// Registers a controller constructor.
    pub fn register_controller(&self, name: &str, ctor: Target) {
        debug!(module = %self.module_name(), controller = name, "Registering controller");
        ctor.mark_registered();
        self.stats.lock().controllers += 1;
        self.registry.controller(name, ctor);
    }

    /// Snapshot of the registration counters.
    pub fn stats(&self) -> AdapterStats {
        self.stats.lock().clone()
    }
}

impl fmt::Debug for RegistryAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryAdapter")
            .field("module", &self.module_name())
            .field("stats", &self.stats())
            .finish()
    }
}

/// Number of registrations made through a [`RegistryAdapter`], per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterStats {
    /// Run-phase hooks queued.
    pub run_hooks: usize,
    /// Config-phase hooks queued (including route state hooks).
    pub config_hooks: usize,
    /// Services registered.
    pub services: usize,
    /// Filters registered.
    pub filters: usize,
    /// Directives registered.
    pub directives: usize,
    /// Controllers registered.
    pub controllers: usize,
}

impl AdapterStats {
    /// Total number of registry calls.
    pub fn total(&self) -> usize {
        self.run_hooks
            + self.config_hooks
            + self.services
            + self.filters
            + self.directives
            + self.controllers
    }
}

impl fmt::Display for AdapterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registrations: {} total ({} services, {} filters, {} directives, {} controllers, {} config hooks, {} run hooks)",
            self.total(),
            self.services,
            self.filters,
            self.directives,
            self.controllers,
            self.config_hooks,
            self.run_hooks
        )
    }
}
