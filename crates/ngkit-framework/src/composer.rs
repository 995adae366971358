//! Applying annotations to targets.
//!
//! A [`Composer`] binds annotations to one host registry and applies them in
//! the order given by the caller. It is the explicit replacement for
//! decorator syntax: the annotation list of a declaration is written out and
//! applied front to back.
//!
//! # Example
//!
//! ```rust,ignore
//! use ngkit_framework::prelude::*;
//!
//! let composer = Composer::new(module);
//!
//! let todo_list = Target::class("TodoListController");
//! composer.decorate(&todo_list, [
//!     inject(["todoStore"]).boxed(),
//!     view(ViewOptions::new().template("<ul>…</ul>")).boxed(),
//!     component("todo-list").boxed(),
//! ])?;
//!
//! let app = Target::class("App");
//! composer.decorate(DecorationSite::member(&app, "onRun"), [run().boxed()])?;
//! ```

use std::sync::Arc;

use tracing::{debug, trace};

use ngkit_core::{ComposeResult, ModuleRegistry};

use crate::adapter::{AdapterStats, RegistryAdapter};
use crate::annotation::{Annotation, BoxedAnnotation};
use crate::site::DecorationSite;

/// Applies annotations against one host registry.
#[derive(Debug, Clone)]
pub struct Composer {
    adapter: RegistryAdapter,
}

impl Composer {
    /// Creates a composer registering into `registry`.
    pub fn new(registry: Arc<dyn ModuleRegistry>) -> Self {
        Self::with_adapter(RegistryAdapter::new(registry))
    }

    /// Creates a composer over an existing adapter.
    pub fn with_adapter(adapter: RegistryAdapter) -> Self {
        Self { adapter }
    }

    /// The registry adapter all annotations go through.
    pub fn adapter(&self) -> &RegistryAdapter {
        &self.adapter
    }

    /// Registration counters so far.
    pub fn stats(&self) -> AdapterStats {
        self.adapter.stats()
    }

    /// Applies a single annotation.
    ///
    /// # Errors
    ///
    /// Propagates the annotation's [`ComposeError`](ngkit_core::ComposeError).
    pub fn apply<A>(&self, site: impl Into<DecorationSite>, annotation: &A) -> ComposeResult<()>
    where
        A: Annotation + ?Sized,
    {
        let site = site.into();
        trace!(annotation = annotation.name(), site = %site, "Applying annotation");
        annotation.apply(&site, &self.adapter)
    }

    /// Applies `annotations` to one site, front to back.
    ///
    /// Stops at the first error; annotations applied before it keep their
    /// effects.
    pub fn decorate<I>(&self, site: impl Into<DecorationSite>, annotations: I) -> ComposeResult<()>
    where
        I: IntoIterator<Item = BoxedAnnotation>,
    {
        let site = site.into();
        let mut applied = 0usize;
        for annotation in annotations {
            trace!(annotation = annotation.name(), site = %site, "Applying annotation");
            annotation.apply(&site, &self.adapter)?;
            applied += 1;
        }
        debug!(site = %site, applied, "Declaration decorated");
        Ok(())
    }
}

/// Applies a list of annotations to a declaration, front to back.
///
/// ```rust,ignore
/// decorate!(composer, home => [
///     inject(["$http"]),
///     route_config("home", RouteOptions::new().url("/")),
/// ])?;
///
/// decorate!(composer, app, "onRun" => [inject(["$rootScope"]), run()])?;
/// ```
///
/// The first form decorates a target; the second decorates the member `key`
/// of a class. Evaluates to the [`ComposeResult`] of
/// [`Composer::decorate`].
#[macro_export]
macro_rules! decorate {
    ($composer:expr, $owner:expr, $key:expr => [$($annotation:expr),* $(,)?]) => {
        $composer.decorate(
            $crate::DecorationSite::member(&$owner, $key),
            ::std::vec![$($crate::annotation::Annotation::boxed($annotation)),*],
        )
    };
    ($composer:expr, $target:expr => [$($annotation:expr),* $(,)?]) => {
        $composer.decorate(
            $crate::DecorationSite::target(&$target),
            ::std::vec![$($crate::annotation::Annotation::boxed($annotation)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use ngkit_core::{CompositionPhase, Target};
    use serde_json::json;

    use super::*;
    use crate::annotation::{
        ViewOptions, component, config, directive, filter, inject, route_config, run, service,
        view,
    };
    use crate::testing::{Registration, RecordingRegistry};

    fn composer() -> (Arc<RecordingRegistry>, Composer) {
        let registry = Arc::new(RecordingRegistry::new());
        (registry.clone(), Composer::new(registry))
    }

    #[test]
    fn test_decorate_applies_in_order() {
        let (registry, composer) = composer();
        let list = Target::class("TodoList");

        composer
            .decorate(
                &list,
                [
                    inject(["todoStore"]).boxed(),
                    view(ViewOptions::new().template("<ul></ul>")).boxed(),
                    component("todo-list").boxed(),
                ],
            )
            .unwrap();

        assert_eq!(list.injection_list(), Some(vec!["todoStore".to_string()]));
        let directives = registry.directives();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].0, "todoList");
        assert_eq!(composer.stats().directives, 1);
    }

    #[test]
    fn test_decorate_stops_at_first_error() {
        let (registry, composer) = composer();
        let late = Target::class("Late");

        let err = composer
            .decorate(
                &late,
                [
                    component("late").boxed(),
                    view(ViewOptions::new()).boxed(),
                    service("late").boxed(),
                ],
            )
            .unwrap_err();

        assert!(err.is_composition_order());
        assert_eq!(registry.len(), 0);
        assert_eq!(
            late.phase(),
            CompositionPhase::Componentized { viewed: false }
        );
    }

    #[test]
    fn test_decorate_macro_forms() {
        let (registry, composer) = composer();
        let app = Target::class("App");
        let home = Target::class("HomeController");

        decorate!(composer, app, "onRun" => [inject(["$rootScope"]), run()]).unwrap();
        decorate!(composer, app, "configure" => [config()]).unwrap();
        decorate!(composer, home => [
            inject(["$http"]),
            route_config("home", json!({ "url": "/" })),
        ])
        .unwrap();

        assert_eq!(
            app.member("onRun").injection_list(),
            Some(vec!["$rootScope".to_string()])
        );
        assert_eq!(registry.run_hooks(), vec![app.member("onRun")]);
        assert_eq!(registry.config_hooks().len(), 2);
        assert_eq!(registry.controllers().len(), 1);
    }

    #[test]
    fn test_registration_order_follows_application_order() {
        let (registry, composer) = composer();
        let filters = Target::class("Filters");
        let focus = Target::class("Focus").with_directive_factory(Target::function("focus"));

        composer
            .apply(DecorationSite::member(&filters, "upper"), &filter("upper"))
            .unwrap();
        composer.apply(&focus, &directive("auto-focus")).unwrap();
        composer
            .apply(&Target::class("Api"), &service("api"))
            .unwrap();

        let kinds: Vec<&str> = registry
            .calls()
            .iter()
            .map(|c| match c {
                Registration::Filter(..) => "filter",
                Registration::Directive(..) => "directive",
                Registration::Service(..) => "service",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["filter", "directive", "service"]);
        assert_eq!(registry.filters()[0].0, "upper");
    }

    #[test]
    fn test_apply_accepts_boxed_annotation() {
        let (registry, composer) = composer();
        let boxed = service("store").boxed();
        composer.apply(&Target::class("Store"), boxed.as_ref()).unwrap();
        assert_eq!(registry.services().len(), 1);
    }
}
