//! Dependency lists.

use tracing::{debug, warn};

use ngkit_core::ComposeResult;

use super::Annotation;
use crate::adapter::RegistryAdapter;
use crate::site::DecorationSite;

/// Attaches an ordered dependency list to the decorated value.
///
/// On a member site the list goes on the member's function, otherwise on the
/// target itself. Order and duplicates are preserved: the list is a
/// positional argument list, not a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inject {
    dependencies: Vec<String>,
}

/// Creates an [`Inject`] annotation.
pub fn inject<I, S>(dependencies: I) -> Inject
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Inject {
        dependencies: dependencies.into_iter().map(Into::into).collect(),
    }
}

impl Inject {
    /// The dependency names, in order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

impl Annotation for Inject {
    fn name(&self) -> &'static str {
        "Inject"
    }

    fn apply(&self, site: &DecorationSite, _adapter: &RegistryAdapter) -> ComposeResult<()> {
        let value = site.value();
        if value.is_registered() {
            warn!(
                target_name = %value,
                "Dependencies attached after '{value}' was registered; \
                 hosts that read them at registration time will not see them"
            );
        }
        debug!(site = %site, dependencies = ?self.dependencies, "Attaching dependencies");
        value.set_injection_list(self.dependencies.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ngkit_core::Target;

    use super::*;
    use crate::annotation::service;
    use crate::testing::recording_adapter;

    #[test]
    fn test_inject_on_class() {
        let (registry, adapter) = recording_adapter();
        let ctrl = Target::class("HomeCtrl");

        inject(["$http", "$q", "$http"])
            .apply(&DecorationSite::from(&ctrl), &adapter)
            .unwrap();

        assert_eq!(
            ctrl.injection_list(),
            Some(vec!["$http".into(), "$q".into(), "$http".into()])
        );
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_inject_on_member_leaves_class_untouched() {
        let (_, adapter) = recording_adapter();
        let app = Target::class("App");

        inject(["$rootScope"])
            .apply(&DecorationSite::member(&app, "onRun"), &adapter)
            .unwrap();

        assert_eq!(
            app.member("onRun").injection_list(),
            Some(vec!["$rootScope".into()])
        );
        assert_eq!(app.injection_list(), None);
    }

    #[test]
    fn test_inject_before_service_is_visible_at_registration() {
        let (registry, adapter) = recording_adapter();
        let store = Target::class("Store");
        let site = DecorationSite::from(&store);

        inject(["$http"]).apply(&site, &adapter).unwrap();
        service("store").apply(&site, &adapter).unwrap();

        let services = registry.services();
        let (_, registered) = &services[0];
        assert_eq!(registered.injection_list(), Some(vec!["$http".into()]));
    }

    #[test]
    fn test_inject_after_service_is_still_attached() {
        let (_, adapter) = recording_adapter();
        let store = Target::class("Store");
        let site = DecorationSite::from(&store);

        service("store").apply(&site, &adapter).unwrap();
        assert!(store.is_registered());
        inject(["$http"]).apply(&site, &adapter).unwrap();

        assert_eq!(store.injection_list(), Some(vec!["$http".into()]));
    }
}
