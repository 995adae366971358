//! In-memory host module.
//!
//! [`ToolkitModule`] is a concrete [`ModuleRegistry`] that keeps everything it
//! receives in registration order. `bootstrap` plays the host's startup: the
//! config phase first, then the run phase, exactly once.
//!
//! Name lookups follow the host's override rule: when a name is registered
//! twice, the later registration wins.

use std::fmt;

use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

use ngkit_core::{
    ConfigHook, DirectiveFactory, ModuleRegistry, StateDefinition, StateProvider, Target,
};

use crate::config::ModuleConfig;
use crate::error::{RuntimeError, RuntimeResult};

/// The bootstrap phase a hook ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Config hooks, before any run hook.
    Config,
    /// Run hooks.
    Run,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config => f.write_str("config"),
            Self::Run => f.write_str("run"),
        }
    }
}

/// A function hook invoked during bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Phase the hook ran in.
    pub phase: Phase,
    /// The hook function.
    pub hook: Target,
    /// Dependencies the host resolved for it.
    pub dependencies: Vec<String>,
}

#[derive(Default)]
struct ModuleState {
    services: Vec<(String, Target)>,
    filters: Vec<(String, Target)>,
    controllers: Vec<(String, Target)>,
    directives: Vec<(String, DirectiveFactory)>,
    config_hooks: Vec<ConfigHook>,
    run_hooks: Vec<Target>,
    states: Vec<(String, StateDefinition)>,
    invocations: Vec<Invocation>,
    bootstrapped: bool,
}

/// A named module that records registrations and can be bootstrapped.
pub struct ToolkitModule {
    name: String,
    requires: Vec<String>,
    state: Mutex<ModuleState>,
}

impl ToolkitModule {
    /// Creates an empty module with no requirements.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: Vec::new(),
            state: Mutex::new(ModuleState::default()),
        }
    }

    /// Creates a module from its configuration.
    pub fn from_config(config: &ModuleConfig) -> Self {
        Self::new(config.name.clone()).with_requires(config.requires.iter().cloned())
    }

    /// Sets the modules this one depends on.
    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    /// Names of the modules this one depends on.
    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// Looks up a service constructor.
    pub fn get_service(&self, name: &str) -> Option<Target> {
        find_last(&self.state.lock().services, name).cloned()
    }

    /// Looks up a filter function.
    pub fn get_filter(&self, name: &str) -> Option<Target> {
        find_last(&self.state.lock().filters, name).cloned()
    }

    /// Looks up a controller constructor.
    pub fn get_controller(&self, name: &str) -> Option<Target> {
        find_last(&self.state.lock().controllers, name).cloned()
    }

    /// Looks up a directive factory.
    pub fn get_directive(&self, name: &str) -> Option<DirectiveFactory> {
        find_last(&self.state.lock().directives, name).cloned()
    }

    /// Looks up a routing state. States only exist after bootstrap.
    pub fn get_state(&self, name: &str) -> Option<StateDefinition> {
        find_last(&self.state.lock().states, name).cloned()
    }

    /// Registered service names, in registration order.
    pub fn service_names(&self) -> Vec<String> {
        names(&self.state.lock().services)
    }

    /// Registered directive names, in registration order.
    pub fn directive_names(&self) -> Vec<String> {
        names(&self.state.lock().directives)
    }

    /// Registered state names, in registration order.
    pub fn state_names(&self) -> Vec<String> {
        names(&self.state.lock().states)
    }

    /// Queued config hooks, in registration order.
    pub fn config_hooks(&self) -> Vec<ConfigHook> {
        self.state.lock().config_hooks.clone()
    }

    /// Queued run hooks, in registration order.
    pub fn run_hooks(&self) -> Vec<Target> {
        self.state.lock().run_hooks.clone()
    }

    /// Function hooks invoked by bootstrap, in invocation order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.state.lock().invocations.clone()
    }

    /// Whether bootstrap has run.
    pub fn is_bootstrapped(&self) -> bool {
        self.state.lock().bootstrapped
    }

    /// Runs the config phase, then the run phase.
    ///
    /// State hooks register against this module's state provider. Function
    /// hooks are recorded as invocations with their resolved dependency list.
    /// Fails if the module was already bootstrapped.
    pub fn bootstrap(&self) -> RuntimeResult<()> {
        let (config_hooks, run_hooks) = {
            let mut state = self.state.lock();
            if state.bootstrapped {
                return Err(RuntimeError::AlreadyBootstrapped {
                    module: self.name.clone(),
                });
            }
            state.bootstrapped = true;
            (state.config_hooks.clone(), state.run_hooks.clone())
        };

        info!(
            module = %self.name,
            config_hooks = config_hooks.len(),
            run_hooks = run_hooks.len(),
            "Bootstrapping module"
        );

        for hook in &config_hooks {
            match hook {
                ConfigHook::State(registration) => {
                    trace!(state = registration.name(), "Running state hook");
                    registration.register(self);
                }
                ConfigHook::Function(target) => {
                    self.invoke(Phase::Config, target, hook.injection_list());
                }
            }
        }

        for target in &run_hooks {
            self.invoke(Phase::Run, target, target.injection_list().unwrap_or_default());
        }

        Ok(())
    }

    /// Counts of everything registered so far.
    pub fn stats(&self) -> ModuleStats {
        let state = self.state.lock();
        ModuleStats {
            name: self.name.clone(),
            services: state.services.len(),
            filters: state.filters.len(),
            controllers: state.controllers.len(),
            directives: state.directives.len(),
            config_hooks: state.config_hooks.len(),
            run_hooks: state.run_hooks.len(),
            states: state.states.len(),
            bootstrapped: state.bootstrapped,
        }
    }

    fn invoke(&self, phase: Phase, hook: &Target, dependencies: Vec<String>) {
        debug!(%phase, hook = %hook, dependencies = ?dependencies, "Invoking hook");
        self.state.lock().invocations.push(Invocation {
            phase,
            hook: hook.clone(),
            dependencies,
        });
    }

    fn note_late(&self, kind: &str, name: &str) {
        if self.state.lock().bootstrapped {
            warn!(module = %self.name, kind, name, "Registration after bootstrap");
        }
    }
}

fn find_last<'a, T>(entries: &'a [(String, T)], name: &str) -> Option<&'a T> {
    entries.iter().rev().find(|(n, _)| n == name).map(|(_, v)| v)
}

fn names<T>(entries: &[(String, T)]) -> Vec<String> {
    entries.iter().map(|(n, _)| n.clone()).collect()
}

impl ModuleRegistry for ToolkitModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, hook: Target) {
        self.note_late("run", hook.name());
        self.state.lock().run_hooks.push(hook);
    }

    fn config(&self, hook: ConfigHook) {
        let name = match &hook {
            ConfigHook::Function(target) => target.name(),
            ConfigHook::State(registration) => registration.name(),
        };
        self.note_late("config", name);
        self.state.lock().config_hooks.push(hook);
    }

    fn service(&self, name: &str, ctor: Target) {
        self.note_late("service", name);
        self.state.lock().services.push((name.to_string(), ctor));
    }

    fn filter(&self, name: &str, filter: Target) {
        self.note_late("filter", name);
        self.state.lock().filters.push((name.to_string(), filter));
    }

    fn directive(&self, name: &str, factory: DirectiveFactory) {
        self.note_late("directive", name);
        self.state.lock().directives.push((name.to_string(), factory));
    }

    fn controller(&self, name: &str, ctor: Target) {
        self.note_late("controller", name);
        self.state.lock().controllers.push((name.to_string(), ctor));
    }
}

impl StateProvider for ToolkitModule {
    fn state(&self, name: &str, definition: StateDefinition) {
        debug!(module = %self.name, state = name, "Registered state");
        self.state.lock().states.push((name.to_string(), definition));
    }
}

impl fmt::Debug for ToolkitModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolkitModule")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Registration counts for a [`ToolkitModule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleStats {
    /// Module name.
    pub name: String,
    /// Registered services.
    pub services: usize,
    /// Registered filters.
    pub filters: usize,
    /// Registered controllers.
    pub controllers: usize,
    /// Registered directives.
    pub directives: usize,
    /// Queued config hooks.
    pub config_hooks: usize,
    /// Queued run hooks.
    pub run_hooks: usize,
    /// Registered routing states.
    pub states: usize,
    /// Whether bootstrap has run.
    pub bootstrapped: bool,
}

impl fmt::Display for ModuleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Module '{}' ({}): {} services, {} filters, {} controllers, {} directives, {} states, {} config hooks, {} run hooks",
            self.name,
            if self.bootstrapped { "bootstrapped" } else { "pending" },
            self.services,
            self.filters,
            self.controllers,
            self.directives,
            self.states,
            self.config_hooks,
            self.run_hooks,
        )
    }
}
