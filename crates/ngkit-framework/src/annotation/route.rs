//! Routing state declaration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use ngkit_core::{ComposeResult, ConfigHook, Definition, StateRegistration};

use super::Annotation;
use crate::adapter::RegistryAdapter;
use crate::site::DecorationSite;

/// State options for [`route_config`]: `url`, `templateUrl`, `resolve`, …
///
/// Every key is copied into the state definition and overrides the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteOptions(pub Map<String, Value>);

impl RouteOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the state's URL.
    pub fn url(self, url: impl Into<String>) -> Self {
        self.option("url", Value::String(url.into()))
    }

    /// Sets an arbitrary state key.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl From<Map<String, Value>> for RouteOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Value> for RouteOptions {
    /// Takes the keys of a JSON object; any other value yields no options.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// Declares a routing state controlled by the decorated class.
///
/// Two registrations happen immediately:
/// 1. a config hook which, when the host runs it with a state provider,
///    registers the state with `{controller: target, controllerAs: "vm"}`
///    overridden by the options;
/// 2. the class itself as a controller under its own name.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    state_name: String,
    options: RouteOptions,
}

/// Creates a [`RouteConfig`] annotation.
pub fn route_config(
    state_name: impl Into<String>,
    options: impl Into<RouteOptions>,
) -> RouteConfig {
    RouteConfig {
        state_name: state_name.into(),
        options: options.into(),
    }
}

impl Annotation for RouteConfig {
    fn name(&self) -> &'static str {
        "RouteConfig"
    }

    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()> {
        let target = site.declaration();
        let definition = Definition::new()
            .with_controller(target.clone())
            .with_property("controllerAs", "vm")
            .merge(&self.options.0);

        adapter.register_config_hook(ConfigHook::State(StateRegistration::new(
            self.state_name.clone(),
            definition,
        )));
        adapter.register_controller(target.name(), target.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ngkit_core::{ControllerRef, Target};
    use serde_json::json;

    use super::*;
    use crate::testing::recording_adapter;

    #[test]
    fn test_route_config_registers_controller_and_hook() {
        let (registry, adapter) = recording_adapter();
        let home = Target::class("HomeController");

        route_config("home", json!({ "url": "/" }))
            .apply(&DecorationSite::from(&home), &adapter)
            .unwrap();

        let controllers = registry.controllers();
        assert_eq!(controllers.len(), 1);
        assert_eq!(controllers[0].0, "HomeController");
        assert_eq!(controllers[0].1, home);

        assert_eq!(registry.config_hooks().len(), 1);
        assert!(registry.states().is_empty());

        registry.run_state_hooks();
        let states = registry.states();
        assert_eq!(states.len(), 1);
        let (name, def) = &states[0];
        assert_eq!(name, "home");
        assert_eq!(def.controller(), Some(&ControllerRef::Target(home)));
        assert_eq!(
            def.to_value(),
            json!({ "controller": "HomeController", "controllerAs": "vm", "url": "/" })
        );
    }

    #[test]
    fn test_route_options_override_defaults() {
        let (registry, adapter) = recording_adapter();
        let about = Target::class("AboutController");

        let options = RouteOptions::new()
            .url("/about")
            .option("controllerAs", "about")
            .option("controller", "SharedController");
        route_config("about", options)
            .apply(&DecorationSite::from(&about), &adapter)
            .unwrap();

        registry.run_state_hooks();
        let states = registry.states();
        let (_, def) = &states[0];
        assert_eq!(def.get("controllerAs"), Some(&json!("about")));
        assert_eq!(
            def.controller(),
            Some(&ControllerRef::Named("SharedController".into()))
        );
        assert_eq!(registry.controllers()[0].0, "AboutController");
    }

    #[test]
    fn test_state_hook_declares_state_provider() {
        let (registry, adapter) = recording_adapter();
        route_config("root", RouteOptions::new())
            .apply(&DecorationSite::from(&Target::class("Root")), &adapter)
            .unwrap();

        let hooks = registry.config_hooks();
        let hook = &hooks[0];
        assert_eq!(hook.injection_list(), vec!["$stateProvider".to_string()]);
    }
}
