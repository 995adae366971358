//! Values handed to the host registry.
//!
//! Directive and state definitions are permissive key/value objects: the
//! composer fills in a few well-known keys, the caller's options are merged on
//! top, and anything the composer does not recognise passes through
//! untouched. Only the `controller` key is typed, because it usually refers to
//! a [`Target`] rather than to plain data.

use serde_json::{Map, Value};

use crate::registry::StateProvider;
use crate::target::Target;

// ─── ControllerRef ────────────────────────────────────────────────────────────

/// The `controller` entry of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerRef {
    /// The decorated target itself.
    Target(Target),
    /// A controller registered elsewhere, referred to by name.
    Named(String),
    /// Any other caller-supplied value, such as `null` or an inline object.
    Value(Value),
}

impl ControllerRef {
    /// The controller's name as the host would see it, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Target(t) => Some(t.name()),
            Self::Named(n) => Some(n),
            Self::Value(_) => None,
        }
    }

    /// Returns the target if this refers to one.
    pub fn as_target(&self) -> Option<&Target> {
        match self {
            Self::Target(t) => Some(t),
            _ => None,
        }
    }

    /// Renders the entry as JSON: targets by name, values verbatim.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Target(t) => Value::String(t.name().to_string()),
            Self::Named(n) => Value::String(n.clone()),
            Self::Value(v) => v.clone(),
        }
    }
}

// ─── Definition ───────────────────────────────────────────────────────────────

/// A directive or state definition object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
    controller: Option<ControllerRef>,
    properties: Map<String, Value>,
}

/// Definition registered through `ModuleRegistry::directive`.
pub type DirectiveDefinition = Definition;

/// Definition registered through `StateProvider::state`.
pub type StateDefinition = Definition;

impl Definition {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a set of default properties.
    pub fn from_properties(properties: Map<String, Value>) -> Self {
        Self {
            controller: None,
            properties,
        }
    }

    /// Sets the controller to the given target.
    pub fn with_controller(mut self, target: Target) -> Self {
        self.controller = Some(ControllerRef::Target(target));
        self
    }

    /// Sets a single property, replacing any previous value.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Merges caller options on top of this definition; caller keys win.
    ///
    /// A `controller` option always replaces the controller: a string becomes
    /// a named reference, any other value is kept verbatim. Every other key is
    /// copied into the properties as-is.
    pub fn merge(mut self, options: &Map<String, Value>) -> Self {
        for (key, value) in options {
            match (key.as_str(), value) {
                ("controller", Value::String(name)) => {
                    self.controller = Some(ControllerRef::Named(name.clone()));
                }
                ("controller", other) => {
                    self.controller = Some(ControllerRef::Value(other.clone()));
                }
                _ => {
                    self.properties.insert(key.clone(), value.clone());
                }
            }
        }
        self
    }

    /// The controller entry, if any.
    pub fn controller(&self) -> Option<&ControllerRef> {
        self.controller.as_ref()
    }

    /// Looks up a property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// All non-controller properties.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Renders the definition as JSON, with a target controller by name.
    pub fn to_value(&self) -> Value {
        let mut map = self.properties.clone();
        if let Some(controller) = &self.controller {
            map.insert("controller".to_string(), controller.to_value());
        }
        Value::Object(map)
    }
}

// ─── DirectiveFactory ─────────────────────────────────────────────────────────

/// What gets registered under a directive name.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveFactory {
    /// A factory producing this composed definition (the View path).
    Definition(DirectiveDefinition),
    /// A caller-supplied factory function (the Directive path).
    Function(Target),
}

impl DirectiveFactory {
    /// Returns the composed definition, if this factory carries one.
    pub fn definition(&self) -> Option<&DirectiveDefinition> {
        match self {
            Self::Definition(d) => Some(d),
            Self::Function(_) => None,
        }
    }
}

// ─── Config hooks ─────────────────────────────────────────────────────────────

/// A state registration deferred to the host's config phase.
#[derive(Debug, Clone, PartialEq)]
pub struct StateRegistration {
    name: String,
    definition: StateDefinition,
}

impl StateRegistration {
    /// Dependencies the host must resolve before invoking the hook.
    pub const INJECTION: &'static [&'static str] = &["$stateProvider"];

    /// Creates a state registration.
    pub fn new(name: impl Into<String>, definition: StateDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }

    /// The state name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state definition that will be registered.
    pub fn definition(&self) -> &StateDefinition {
        &self.definition
    }

    /// Registers the state with the provider. Called by the host.
    pub fn register(&self, provider: &dyn StateProvider) {
        provider.state(&self.name, self.definition.clone());
    }
}

/// A function queued for the host's config phase.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigHook {
    /// A caller-declared function.
    Function(Target),
    /// A state registration produced by `RouteConfig`.
    State(StateRegistration),
}

impl ConfigHook {
    /// The dependency names the host must inject when invoking the hook.
    pub fn injection_list(&self) -> Vec<String> {
        match self {
            Self::Function(target) => target.injection_list().unwrap_or_default(),
            Self::State(_) => StateRegistration::INJECTION
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
