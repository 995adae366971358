//! Unified error types for the ngkit core.
//!
//! Composition only fails in two ways: a required option is missing, or two
//! annotations were applied to the same target in an illegal order. Both are
//! raised synchronously while the annotation is applied and nothing is
//! registered for that annotation.

use thiserror::Error;

// =============================================================================
// Composition Errors
// =============================================================================

/// Errors that can occur while applying an annotation to a target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// A required option (name, selector, factory) is absent or empty.
    #[error("@{annotation}() must contain a `{field}` property")]
    Configuration {
        /// The annotation being applied, e.g. `"Service"`.
        annotation: &'static str,
        /// The missing option key, e.g. `"serviceName"`.
        field: &'static str,
    },

    /// `View` was applied to a target that is already a component.
    #[error("@View() must be applied before @Component() on '{target}'")]
    CompositionOrder {
        /// Name of the offending target.
        target: String,
    },
}

impl ComposeError {
    /// Creates a configuration error for a missing option.
    pub fn missing(annotation: &'static str, field: &'static str) -> Self {
        Self::Configuration { annotation, field }
    }

    /// Creates a composition-order error for the given target.
    pub fn order(target: impl Into<String>) -> Self {
        Self::CompositionOrder {
            target: target.into(),
        }
    }

    /// Returns `true` for [`ComposeError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns `true` for [`ComposeError::CompositionOrder`].
    pub fn is_composition_order(&self) -> bool {
        matches!(self, Self::CompositionOrder { .. })
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for composition operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Returns the option value when it is present and non-empty.
///
/// Empty strings count as missing: there is no default name for any
/// annotation.
pub fn require<'a>(
    value: Option<&'a str>,
    annotation: &'static str,
    field: &'static str,
) -> ComposeResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ComposeError::missing(annotation, field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = ComposeError::missing("Service", "serviceName");
        assert_eq!(
            err.to_string(),
            "@Service() must contain a `serviceName` property"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_require_rejects_empty() {
        assert!(require(Some(""), "Filter", "filterName").is_err());
        assert!(require(None, "Filter", "filterName").is_err());
        assert_eq!(require(Some("upper"), "Filter", "filterName"), Ok("upper"));
    }
}
