//! Targets and the metadata the composer attaches to them.
//!
//! A [`Target`] is a cheap, `Clone` handle to a class or a named function that
//! the caller owns. Every clone refers to the same target: equality is
//! identity, never structural. Annotations never copy a target, they only
//! attach metadata to it and hand the handle to the registry.
//!
//! # Composition state
//!
//! The View / Component pair is the only stateful combination. The state is
//! kept as a tagged value instead of loose flags:
//!
//! ```text
//!            attach_view()              mark_component()
//!   Fresh ─────────────────► Viewed ─────────────────────► Componentized { viewed: true }
//!     │                                                              ▲
//!     └──────────────────── mark_component() ───────────► Componentized { viewed: false }
//! ```
//!
//! `attach_view` on a componentized target is rejected with
//! [`ComposeError::CompositionOrder`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{ComposeError, ComposeResult};

// ─── TargetKind ───────────────────────────────────────────────────────────────

/// What a [`Target`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A class (constructor): services, controllers, components.
    Class,
    /// A plain function: hooks, filters, directive factories, members.
    Function,
}

// ─── DeferredView ─────────────────────────────────────────────────────────────

/// The registration stored by `View` and executed by `Component`.
///
/// Given the decorated target and the raw selector, it finalizes the directive
/// registration. Being an `FnOnce`, it cannot run twice. The closure receives
/// the target on invocation and must not capture it.
pub struct DeferredView(Box<dyn FnOnce(&Target, &str) + Send>);

impl DeferredView {
    /// Wraps a deferred registration.
    pub fn new(init: impl FnOnce(&Target, &str) + Send + 'static) -> Self {
        Self(Box::new(init))
    }

    /// Runs the deferred registration for `target` with the raw selector.
    pub fn invoke(self, target: &Target, selector: &str) {
        (self.0)(target, selector)
    }
}

impl fmt::Debug for DeferredView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeferredView(..)")
    }
}

// ─── CompositionState ─────────────────────────────────────────────────────────

/// Where a target stands in the View / Component state machine.
#[derive(Debug, Default)]
enum CompositionState {
    #[default]
    Fresh,
    Viewed(DeferredView),
    Componentized {
        viewed: bool,
    },
}

/// Payload-free snapshot of a target's composition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionPhase {
    /// No View or Component applied yet.
    Fresh,
    /// View applied; its directive registration is pending.
    Viewed,
    /// Component applied. `viewed` records whether a View preceded it.
    Componentized {
        /// Whether View ran before Component.
        viewed: bool,
    },
}

// ─── Metadata ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct TargetMetadata {
    injection_list: Option<Vec<String>>,
    state: CompositionState,
    directive_factory: Option<Target>,
    registered: bool,
    members: HashMap<String, Target>,
}

struct TargetInner {
    name: Cow<'static, str>,
    kind: TargetKind,
    metadata: Mutex<TargetMetadata>,
}

// ─── Target ───────────────────────────────────────────────────────────────────

/// Shared handle to a decorated class or function.
#[derive(Clone)]
pub struct Target {
    inner: Arc<TargetInner>,
}

impl Target {
    fn new(name: impl Into<Cow<'static, str>>, kind: TargetKind) -> Self {
        Self {
            inner: Arc::new(TargetInner {
                name: name.into(),
                kind,
                metadata: Mutex::new(TargetMetadata::default()),
            }),
        }
    }

    /// Declares a class target. `name` is the class's own declared name.
    pub fn class(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, TargetKind::Class)
    }

    /// Declares a function target.
    pub fn function(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, TargetKind::Function)
    }

    /// The target's declared name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether this is a class or a function.
    pub fn kind(&self) -> TargetKind {
        self.inner.kind
    }

    /// Returns `true` if both handles refer to the same target.
    pub fn ptr_eq(&self, other: &Target) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the member function `key` of this target, creating it on first
    /// access. Repeated calls return the same handle.
    pub fn member(&self, key: &str) -> Target {
        let mut meta = self.inner.metadata.lock();
        meta.members
            .entry(key.to_string())
            .or_insert_with(|| Target::function(key.to_string()))
            .clone()
    }

    // ── Injection ────────────────────────────────────────────────────────────

    /// The ordered dependency list, if one was attached.
    pub fn injection_list(&self) -> Option<Vec<String>> {
        self.inner.metadata.lock().injection_list.clone()
    }

    /// Attaches (or replaces) the ordered dependency list.
    pub fn set_injection_list(&self, dependencies: Vec<String>) {
        self.inner.metadata.lock().injection_list = Some(dependencies);
    }

    // ── Directive factory ────────────────────────────────────────────────────

    /// The directive factory the caller attached to this target.
    pub fn directive_factory(&self) -> Option<Target> {
        self.inner.metadata.lock().directive_factory.clone()
    }

    /// Attaches the directive factory read by the `Directive` annotation.
    pub fn set_directive_factory(&self, factory: Target) {
        self.inner.metadata.lock().directive_factory = Some(factory);
    }

    /// Builder-style variant of [`set_directive_factory`](Self::set_directive_factory).
    pub fn with_directive_factory(self, factory: Target) -> Self {
        self.set_directive_factory(factory);
        self
    }

    // ── Registration tracking ────────────────────────────────────────────────

    /// Records that this target was handed to the registry.
    ///
    /// Returns `true` if it had already been registered before.
    pub fn mark_registered(&self) -> bool {
        std::mem::replace(&mut self.inner.metadata.lock().registered, true)
    }

    /// Whether this target was already handed to the registry.
    pub fn is_registered(&self) -> bool {
        self.inner.metadata.lock().registered
    }

    // ── Composition state ────────────────────────────────────────────────────

    /// Current composition phase.
    pub fn phase(&self) -> CompositionPhase {
        match &self.inner.metadata.lock().state {
            CompositionState::Fresh => CompositionPhase::Fresh,
            CompositionState::Viewed(_) => CompositionPhase::Viewed,
            CompositionState::Componentized { viewed } => {
                CompositionPhase::Componentized { viewed: *viewed }
            }
        }
    }

    /// Whether `Component` has been applied. Never reverts to `false`.
    pub fn is_component(&self) -> bool {
        matches!(self.phase(), CompositionPhase::Componentized { .. })
    }

    /// Whether `View` has been applied. Never reverts to `false`.
    pub fn is_view(&self) -> bool {
        matches!(
            self.phase(),
            CompositionPhase::Viewed | CompositionPhase::Componentized { viewed: true }
        )
    }

    /// Stores a pending view registration (`Fresh | Viewed → Viewed`).
    ///
    /// A second View replaces the first pending registration; returns `true`
    /// in that case.
    ///
    /// # Errors
    ///
    /// [`ComposeError::CompositionOrder`] if the target is already a component.
    pub fn attach_view(&self, view: DeferredView) -> ComposeResult<bool> {
        let mut meta = self.inner.metadata.lock();
        let replaced = match &meta.state {
            CompositionState::Componentized { .. } => {
                return Err(ComposeError::order(self.name()));
            }
            CompositionState::Viewed(_) => true,
            CompositionState::Fresh => false,
        };
        meta.state = CompositionState::Viewed(view);
        Ok(replaced)
    }

    /// Marks the target a component and hands back the pending view, if any.
    ///
    /// The pending view is removed from the target, so it can be invoked at
    /// most once. The metadata lock is released before the caller invokes it.
    pub fn mark_component(&self) -> Option<DeferredView> {
        let mut meta = self.inner.metadata.lock();
        match std::mem::take(&mut meta.state) {
            CompositionState::Fresh => {
                meta.state = CompositionState::Componentized { viewed: false };
                None
            }
            CompositionState::Viewed(view) => {
                meta.state = CompositionState::Componentized { viewed: true };
                Some(view)
            }
            CompositionState::Componentized { viewed } => {
                meta.state = CompositionState::Componentized { viewed };
                None
            }
        }
    }
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Target {}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = Target::class("Home");
        let b = Target::class("Home");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_member_is_stable() {
        let class = Target::class("Todos");
        let first = class.member("load");
        let second = class.member("load");
        assert_eq!(first, second);
        assert_eq!(first.kind(), TargetKind::Function);
        assert_eq!(first.name(), "load");
        assert_ne!(first, class.member("save"));
    }

    #[test]
    fn test_fresh_to_component_without_view() {
        let target = Target::class("Bare");
        assert_eq!(target.phase(), CompositionPhase::Fresh);
        assert!(target.mark_component().is_none());
        assert!(target.is_component());
        assert!(!target.is_view());
    }

    #[test]
    fn test_view_then_component_hands_back_view_once() {
        let target = Target::class("Widget");
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        target
            .attach_view(DeferredView::new(move |_, _| {
                c.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        assert_eq!(target.phase(), CompositionPhase::Viewed);

        let view = target.mark_component().unwrap();
        view.invoke(&target, "my-widget");
        assert!(target.mark_component().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            target.phase(),
            CompositionPhase::Componentized { viewed: true }
        );
        assert!(target.is_view());
    }

    #[test]
    fn test_view_after_component_is_rejected() {
        let target = Target::class("Late");
        target.mark_component();
        let err = target.attach_view(DeferredView::new(|_, _| {})).unwrap_err();
        assert!(err.is_composition_order());
        assert!(!target.is_view());
    }

    #[test]
    fn test_second_view_replaces_first() {
        let target = Target::class("Twice");
        assert!(!target.attach_view(DeferredView::new(|_, _| {})).unwrap());
        assert!(target.attach_view(DeferredView::new(|_, _| {})).unwrap());
    }

    #[test]
    fn test_mark_registered_reports_previous() {
        let target = Target::class("Svc");
        assert!(!target.is_registered());
        assert!(!target.mark_registered());
        assert!(target.mark_registered());
    }
}
