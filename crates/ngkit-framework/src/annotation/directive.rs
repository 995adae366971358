//! Attribute/element directives backed by a caller-supplied factory.

use serde::{Deserialize, Serialize};

use ngkit_core::error::require;
use ngkit_core::{ComposeError, ComposeResult, DirectiveFactory, dash_to_camel_case};

use super::Annotation;
use crate::adapter::RegistryAdapter;
use crate::site::DecorationSite;

/// Options for [`directive`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveOptions {
    /// Dash-case directive name. Required.
    #[serde(default)]
    pub selector: Option<String>,
}

impl DirectiveOptions {
    /// Options with the given selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
        }
    }
}

impl From<&str> for DirectiveOptions {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

/// Registers the target's directive factory under the camel-cased selector.
///
/// Unlike the View path, only dashes are converted: the first letter keeps
/// its case. The factory must have been attached with
/// [`Target::set_directive_factory`](ngkit_core::Target::set_directive_factory).
#[derive(Debug, Clone)]
pub struct Directive {
    options: DirectiveOptions,
}

/// Creates a [`Directive`] annotation.
pub fn directive(options: impl Into<DirectiveOptions>) -> Directive {
    Directive {
        options: options.into(),
    }
}

impl Annotation for Directive {
    fn name(&self) -> &'static str {
        "Directive"
    }

    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()> {
        let selector = require(self.options.selector.as_deref(), "Directive", "selector")?;
        let factory = site
            .declaration()
            .directive_factory()
            .ok_or_else(|| ComposeError::missing("Directive", "directiveFactory"))?;

        adapter.register_directive(
            &dash_to_camel_case(selector),
            DirectiveFactory::Function(factory),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ngkit_core::Target;

    use super::*;
    use crate::testing::recording_adapter;

    #[test]
    fn test_directive_registers_factory() {
        let (registry, adapter) = recording_adapter();
        let factory = Target::function("autoFocusFactory");
        let focus = Target::class("AutoFocus").with_directive_factory(factory.clone());

        directive("auto-focus")
            .apply(&DecorationSite::from(&focus), &adapter)
            .unwrap();

        let directives = registry.directives();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].0, "autoFocus");
        assert_eq!(directives[0].1, DirectiveFactory::Function(factory));
    }

    #[test]
    fn test_directive_does_not_lower_case_first_letter() {
        let (registry, adapter) = recording_adapter();
        let target = Target::class("Tip").with_directive_factory(Target::function("tip"));

        directive("Tool-tip")
            .apply(&DecorationSite::from(&target), &adapter)
            .unwrap();

        assert_eq!(registry.directives()[0].0, "ToolTip");
    }

    #[test]
    fn test_directive_ignores_composition_state() {
        let (registry, adapter) = recording_adapter();
        let target = Target::class("Both").with_directive_factory(Target::function("both"));
        target.mark_component();

        directive("both")
            .apply(&DecorationSite::from(&target), &adapter)
            .unwrap();

        assert_eq!(registry.directives().len(), 1);
    }

    #[test]
    fn test_directive_requires_selector_and_factory() {
        let (registry, adapter) = recording_adapter();

        let with_factory = Target::class("A").with_directive_factory(Target::function("a"));
        let err = directive(DirectiveOptions::default())
            .apply(&DecorationSite::from(&with_factory), &adapter)
            .unwrap_err();
        assert_eq!(err, ComposeError::missing("Directive", "selector"));

        let without_factory = Target::class("B");
        let err = directive("b")
            .apply(&DecorationSite::from(&without_factory), &adapter)
            .unwrap_err();
        assert_eq!(err, ComposeError::missing("Directive", "directiveFactory"));

        assert!(registry.directives().is_empty());
    }
}
