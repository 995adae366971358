//! Where an annotation is applied.

use std::fmt;

use ngkit_core::Target;

/// The place an annotation is applied to.
///
/// Class-level annotations (Service, Component, View, Directive, RouteConfig)
/// act on [`target`](Self::target): the declaring class. Function-level
/// annotations (Run, Config, Filter, Inject) act on [`value`](Self::value):
/// the member's function, or the target itself when applied directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorationSite {
    /// Applied directly to a class or function.
    Target(Target),
    /// Applied to a member of a class.
    Member {
        /// The declaring class.
        owner: Target,
        /// The member's key.
        key: String,
        /// The member's function.
        value: Target,
    },
}

impl DecorationSite {
    /// A site for a class or function declaration.
    pub fn target(target: &Target) -> Self {
        Self::Target(target.clone())
    }

    /// A site for the member `key` of `owner`.
    pub fn member(owner: &Target, key: &str) -> Self {
        Self::Member {
            owner: owner.clone(),
            key: key.to_string(),
            value: owner.member(key),
        }
    }

    /// The declaring target: the class for a member site.
    pub fn declaration(&self) -> &Target {
        match self {
            Self::Target(t) => t,
            Self::Member { owner, .. } => owner,
        }
    }

    /// The decorated value: the member's function for a member site.
    pub fn value(&self) -> &Target {
        match self {
            Self::Target(t) => t,
            Self::Member { value, .. } => value,
        }
    }

    /// Returns `true` for a member site.
    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member { .. })
    }
}

impl From<&Target> for DecorationSite {
    fn from(target: &Target) -> Self {
        Self::target(target)
    }
}

impl From<Target> for DecorationSite {
    fn from(target: Target) -> Self {
        Self::Target(target)
    }
}

impl fmt::Display for DecorationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(t) => write!(f, "{t}"),
            Self::Member { owner, key, .. } => write!(f, "{owner}.{key}"),
        }
    }
}
