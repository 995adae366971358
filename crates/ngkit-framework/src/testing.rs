//! Recording registry used by the framework tests.

use std::sync::Arc;

use parking_lot::Mutex;

use ngkit_core::{
    ConfigHook, DirectiveFactory, ModuleRegistry, StateDefinition, StateProvider, Target,
};

use crate::adapter::RegistryAdapter;

#[derive(Debug, Clone)]
pub(crate) enum Registration {
    Run(Target),
    Config(ConfigHook),
    Service(String, Target),
    Filter(String, Target),
    Directive(String, DirectiveFactory),
    Controller(String, Target),
}

#[derive(Default)]
pub(crate) struct RecordingRegistry {
    calls: Mutex<Vec<Registration>>,
    states: Mutex<Vec<(String, StateDefinition)>>,
}

impl RecordingRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub(crate) fn calls(&self) -> Vec<Registration> {
        self.calls.lock().clone()
    }

    pub(crate) fn services(&self) -> Vec<(String, Target)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Registration::Service(n, t) => Some((n, t)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn filters(&self) -> Vec<(String, Target)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Registration::Filter(n, t) => Some((n, t)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn directives(&self) -> Vec<(String, DirectiveFactory)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Registration::Directive(n, f) => Some((n, f)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn controllers(&self) -> Vec<(String, Target)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Registration::Controller(n, t) => Some((n, t)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn config_hooks(&self) -> Vec<ConfigHook> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Registration::Config(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn run_hooks(&self) -> Vec<Target> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Registration::Run(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Plays the host: runs every state hook against this registry.
    pub(crate) fn run_state_hooks(&self) {
        for hook in self.config_hooks() {
            if let ConfigHook::State(state) = hook {
                state.register(self);
            }
        }
    }

    pub(crate) fn states(&self) -> Vec<(String, StateDefinition)> {
        self.states.lock().clone()
    }
}

impl ModuleRegistry for RecordingRegistry {
    fn name(&self) -> &str {
        "test-module"
    }

    fn run(&self, hook: Target) {
        self.calls.lock().push(Registration::Run(hook));
    }

    fn config(&self, hook: ConfigHook) {
        self.calls.lock().push(Registration::Config(hook));
    }

    fn service(&self, name: &str, ctor: Target) {
        self.calls
            .lock()
            .push(Registration::Service(name.to_string(), ctor));
    }

    fn filter(&self, name: &str, filter: Target) {
        self.calls
            .lock()
            .push(Registration::Filter(name.to_string(), filter));
    }

    fn directive(&self, name: &str, factory: DirectiveFactory) {
        self.calls
            .lock()
            .push(Registration::Directive(name.to_string(), factory));
    }

    fn controller(&self, name: &str, ctor: Target) {
        self.calls
            .lock()
            .push(Registration::Controller(name.to_string(), ctor));
    }
}

impl StateProvider for RecordingRegistry {
    fn state(&self, name: &str, definition: StateDefinition) {
        self.states.lock().push((name.to_string(), definition));
    }
}

/// A fresh recording registry and an adapter over it.
pub(crate) fn recording_adapter() -> (Arc<RecordingRegistry>, RegistryAdapter) {
    let registry = Arc::new(RecordingRegistry::new());
    let adapter = RegistryAdapter::new(registry.clone());
    (registry, adapter)
}
