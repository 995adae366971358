//! The View / Component pair.
//!
//! `View` describes how a class renders; `Component` names it. The directive
//! only exists once both have been applied, in that order:
//!
//! 1. [`view`] builds the directive definition and stores a pending
//!    registration on the target. Nothing is registered yet.
//! 2. [`component`] runs the pending registration with its selector and marks
//!    the target a component.
//!
//! Applying `View` to a target that is already a component fails with
//! [`ComposeError::CompositionOrder`](ngkit_core::ComposeError::CompositionOrder).
//! A `Component` without a preceding `View` registers nothing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

use ngkit_core::error::require;
use ngkit_core::{
    ComposeResult, Definition, DeferredView, DirectiveDefinition, DirectiveFactory, Target,
    selector_to_directive_name,
};

use super::Annotation;
use crate::adapter::RegistryAdapter;
use crate::site::DecorationSite;

// ─── View ─────────────────────────────────────────────────────────────────────

/// Options for [`view`].
///
/// Keys other than `template`, `replace` and `bind` are kept in `extra` and
/// copied into the directive definition untouched, overriding the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Inline template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,

    /// Whether the element is replaced by the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<Value>,

    /// Bindings exposed on the controller (`bindToController`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<Value>,

    /// Any other definition keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewOptions {
    /// Empty options: all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inline template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(Value::String(template.into()));
        self
    }

    /// Sets `replace`.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = Some(Value::Bool(replace));
        self
    }

    /// Sets the controller bindings.
    pub fn bind(mut self, bind: impl Into<Value>) -> Self {
        self.bind = Some(bind.into());
        self
    }

    /// Sets an arbitrary definition key.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds the definition registered for `controller`.
    ///
    /// Defaults are `restrict: "E"`, an isolated `scope`, `bindToController:
    /// true` and `controllerAs: "vm"`. `bind` replaces `bindToController`;
    /// keys in `extra` override everything, including `bindToController`.
    pub fn definition_for(&self, controller: &Target) -> DirectiveDefinition {
        let mut defaults = Map::new();
        if let Some(template) = &self.template {
            defaults.insert("template".into(), template.clone());
        }
        if let Some(replace) = &self.replace {
            defaults.insert("replace".into(), replace.clone());
        }
        defaults.insert("restrict".into(), json!("E"));
        defaults.insert("scope".into(), json!({}));
        defaults.insert(
            "bindToController".into(),
            self.bind.clone().unwrap_or(Value::Bool(true)),
        );
        defaults.insert("controllerAs".into(), json!("vm"));

        Definition::from_properties(defaults)
            .with_controller(controller.clone())
            .merge(&self.extra)
    }
}

impl From<Map<String, Value>> for ViewOptions {
    /// Splits out `template`, `replace` and `bind`; every other key goes to
    /// `extra`. Values are taken as given, whatever their JSON type.
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            template: map.remove("template"),
            replace: map.remove("replace"),
            bind: map.remove("bind"),
            extra: map,
        }
    }
}

impl From<Value> for ViewOptions {
    /// Reads options from a JSON object. Any other value yields the defaults.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from(map),
            _ => Self::default(),
        }
    }
}

/// Stores a pending directive registration on the decorated class.
#[derive(Debug, Clone)]
pub struct View {
    options: ViewOptions,
}

/// Creates a [`View`] annotation.
///
/// ```rust,ignore
/// composer.decorate(&widget, [
///     view(ViewOptions::new().template("<ul>…</ul>")).boxed(),
///     component("todo-list").boxed(),
/// ])?;
/// ```
pub fn view(options: impl Into<ViewOptions>) -> View {
    View {
        options: options.into(),
    }
}

impl Annotation for View {
    fn name(&self) -> &'static str {
        "View"
    }

    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()> {
        let target = site.declaration();
        let options = self.options.clone();
        let adapter = adapter.clone();

        let pending = DeferredView::new(move |target, selector| {
            let name = selector_to_directive_name(selector);
            let definition = options.definition_for(target);
            adapter.register_directive(&name, DirectiveFactory::Definition(definition));
        });

        if target.attach_view(pending)? {
            debug!(target_name = %target, "View replaced an earlier pending view");
        } else {
            debug!(target_name = %target, "View pending until Component");
        }
        Ok(())
    }
}

// ─── Component ────────────────────────────────────────────────────────────────

/// Options for [`component`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOptions {
    /// Dash-case element name. Required.
    #[serde(default)]
    pub selector: Option<String>,
}

impl ComponentOptions {
    /// Options with the given selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
        }
    }
}

impl From<&str> for ComponentOptions {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

/// Marks the decorated class a component, finalizing a pending view.
#[derive(Debug, Clone)]
pub struct Component {
    options: ComponentOptions,
}

/// Creates a [`Component`] annotation.
pub fn component(options: impl Into<ComponentOptions>) -> Component {
    Component {
        options: options.into(),
    }
}

impl Annotation for Component {
    fn name(&self) -> &'static str {
        "Component"
    }

    fn apply(&self, site: &DecorationSite, _adapter: &RegistryAdapter) -> ComposeResult<()> {
        let selector = require(self.options.selector.as_deref(), "Component", "selector")?;
        let target = site.declaration();

        match target.mark_component() {
            Some(pending) => pending.invoke(target, selector),
            None => debug!(
                target_name = %target,
                selector,
                "Component has no pending view; no directive registered"
            ),
        }
        Ok(())
    }
}
