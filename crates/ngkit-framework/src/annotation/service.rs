//! Service and filter registration.

use serde::{Deserialize, Serialize};

use ngkit_core::ComposeResult;
use ngkit_core::error::require;

use super::Annotation;
use crate::adapter::RegistryAdapter;
use crate::site::DecorationSite;

/// Options for [`service`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOptions {
    /// Name the class is registered under. Required.
    #[serde(default)]
    pub service_name: Option<String>,
}

impl ServiceOptions {
    /// Options naming the service.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: Some(service_name.into()),
        }
    }
}

impl From<&str> for ServiceOptions {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Options for [`filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Name the function is registered under. Required.
    #[serde(default)]
    pub filter_name: Option<String>,
}

impl FilterOptions {
    /// Options naming the filter.
    pub fn new(filter_name: impl Into<String>) -> Self {
        Self {
            filter_name: Some(filter_name.into()),
        }
    }
}

impl From<&str> for FilterOptions {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Registers the decorated class as a service.
#[derive(Debug, Clone)]
pub struct Service {
    options: ServiceOptions,
}

/// Creates a [`Service`] annotation.
///
/// ```rust,ignore
/// composer.apply(&store.into(), &service("todoStore"))?;
/// ```
pub fn service(options: impl Into<ServiceOptions>) -> Service {
    Service {
        options: options.into(),
    }
}

impl Annotation for Service {
    fn name(&self) -> &'static str {
        "Service"
    }

    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()> {
        let name = require(
            self.options.service_name.as_deref(),
            "Service",
            "serviceName",
        )?;
        adapter.register_service(name, site.declaration().clone());
        Ok(())
    }
}

/// Registers the decorated function as a filter.
#[derive(Debug, Clone)]
pub struct Filter {
    options: FilterOptions,
}

/// Creates a [`Filter`] annotation.
pub fn filter(options: impl Into<FilterOptions>) -> Filter {
    Filter {
        options: options.into(),
    }
}

impl Annotation for Filter {
    fn name(&self) -> &'static str {
        "Filter"
    }

    fn apply(&self, site: &DecorationSite, adapter: &RegistryAdapter) -> ComposeResult<()> {
        let name = require(self.options.filter_name.as_deref(), "Filter", "filterName")?;
        adapter.register_filter(name, site.value().clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ngkit_core::{ComposeError, Target};
    use serde_json::json;

    use super::*;
    use crate::testing::recording_adapter;

    #[test]
    fn test_service_registers_class_once() {
        let (registry, adapter) = recording_adapter();
        let store = Target::class("TodoStore");

        service("x").apply(&DecorationSite::from(&store), &adapter).unwrap();

        let services = registry.services();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].0, "x");
        assert_eq!(services[0].1, store);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_service_without_name_registers_nothing() {
        let (registry, adapter) = recording_adapter();
        let store = Target::class("TodoStore");

        let err = service(ServiceOptions::default())
            .apply(&DecorationSite::from(&store), &adapter)
            .unwrap_err();

        assert_eq!(err, ComposeError::missing("Service", "serviceName"));
        assert_eq!(registry.len(), 0);
        assert!(!store.is_registered());
    }

    #[test]
    fn test_service_with_empty_name_fails() {
        let (registry, adapter) = recording_adapter();
        let result = service("").apply(&DecorationSite::from(&Target::class("S")), &adapter);
        assert!(result.unwrap_err().is_configuration());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_service_options_from_json() {
        let options: ServiceOptions =
            serde_json::from_value(json!({ "serviceName": "api" })).unwrap();
        assert_eq!(options, ServiceOptions::new("api"));

        let empty: ServiceOptions = serde_json::from_value(json!({})).unwrap();
        assert!(empty.service_name.is_none());
    }

    #[test]
    fn test_filter_registers_member_function() {
        let (registry, adapter) = recording_adapter();
        let filters = Target::class("Filters");

        filter("capitalize")
            .apply(&DecorationSite::member(&filters, "capitalize"), &adapter)
            .unwrap();

        let registered = registry.filters();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].0, "capitalize");
        assert_eq!(registered[0].1, filters.member("capitalize"));
    }

    #[test]
    fn test_filter_without_name_fails() {
        let (registry, adapter) = recording_adapter();
        let err = filter(FilterOptions::default())
            .apply(&DecorationSite::from(&Target::function("f")), &adapter)
            .unwrap_err();
        assert_eq!(err, ComposeError::missing("Filter", "filterName"));
        assert!(registry.filters().is_empty());
    }
}
