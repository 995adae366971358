//! Run and config phase hooks.

use ngkit_core::{ComposeResult, ConfigHook};

use super::Annotation;
use crate::adapter::RegistryAdapter;
use crate::site::DecorationSite;

/// Queues the decorated function for the host's run phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Run;

/// Queues the decorated function for the host's config phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config;

/// Creates a [`Run`] annotation.
pub fn run() -> Run {
    Run
}

/// Creates a [`Config`] annotation.
pub fn config() -> Config {
    Config
}

impl Annotation for Run {
    fn name(&self) -> &'static str {
        "Run"
    }

    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()> {
        adapter.register_run_hook(site.value().clone());
        Ok(())
    }
}

impl Annotation for Config {
    fn name(&self) -> &'static str {
        "Config"
    }

    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()> {
        adapter.register_config_hook(ConfigHook::Function(site.value().clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ngkit_core::Target;

    use super::*;
    use crate::testing::recording_adapter;

    #[test]
    fn test_run_forwards_member_function() {
        let (registry, adapter) = recording_adapter();
        let app = Target::class("App");
        let site = DecorationSite::member(&app, "onStart");

        run().apply(&site, &adapter).unwrap();

        let hooks = registry.run_hooks();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0], app.member("onStart"));
        assert!(registry.config_hooks().is_empty());
    }

    #[test]
    fn test_config_forwards_bare_function() {
        let (registry, adapter) = recording_adapter();
        let configure = Target::function("configure");

        config().apply(&DecorationSite::from(&configure), &adapter).unwrap();

        assert_eq!(
            registry.config_hooks(),
            vec![ConfigHook::Function(configure)]
        );
        assert!(registry.run_hooks().is_empty());
    }
}
