//! Resource, deletion target and per-member outcome types.

use tessen_rfc::rfc::dav::core::Href;

/// A resource resolved by the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Request href. Collections carry a trailing slash.
    pub href: Href,
    pub is_collection: bool,
}

impl Resource {
    #[must_use]
    pub fn file(href: impl Into<Href>) -> Self {
        Self {
            href: href.into(),
            is_collection: false,
        }
    }

    #[must_use]
    pub fn collection(href: impl Into<Href>) -> Self {
        let href: Href = href.into();
        Self {
            href: href.with_trailing_slash(),
            is_collection: true,
        }
    }

    /// Returns the last path segment, or `/` for the root.
    #[must_use]
    pub fn name(&self) -> &str {
        self.href.name().unwrap_or("/")
    }
}

/// ## Summary
/// What a `DELETE` request addresses, as seen by the classifier.
///
/// `resource` is `None` when nothing exists at the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionTarget {
    pub resource: Option<Resource>,
    /// Whether the request URL carried a fragment.
    pub has_fragment: bool,
}

impl DeletionTarget {
    #[must_use]
    pub fn new(resource: Option<Resource>, has_fragment: bool) -> Self {
        Self {
            resource,
            has_fragment,
        }
    }

    #[must_use]
    pub fn missing() -> Self {
        Self::new(None, false)
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.resource.is_some()
    }

    #[must_use]
    pub fn is_collection(&self) -> bool {
        self.resource.as_ref().is_some_and(|r| r.is_collection)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.resource.as_ref().map(Resource::name)
    }
}

/// Result of deleting one collection member, as reported by the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildOutcome {
    pub href: String,
    pub status: u16,
}

impl ChildOutcome {
    #[must_use]
    pub fn new(href: impl Into<String>, status: u16) -> Self {
        Self {
            href: href.into(),
            status,
        }
    }
}
