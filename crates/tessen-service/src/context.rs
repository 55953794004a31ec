//! Read-only request data consumed by the gate and the deletion logic.

use salvo::http::header::{AUTHORIZATION, HeaderMap};

/// ## Summary
/// The narrow slice of an inbound request the protocol logic is allowed to read.
///
/// Responses are never written through this trait; decisions are returned as
/// values and applied by the HTTP layer.
pub trait RequestContext: Send + Sync {
    /// Returns a header value by (case-insensitive) name, if present and valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Returns the request path.
    fn path(&self) -> &str;

    /// Returns the URL fragment, if the request target carried one.
    ///
    /// A bare trailing `#` yields `Some("")`.
    fn fragment(&self) -> Option<&str>;

    /// Returns the raw `Authorization` header value.
    fn authorization(&self) -> Option<&str> {
        self.header(AUTHORIZATION.as_str())
    }
}

/// Owned snapshot of the parts of a request the core reads.
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    pub headers: HeaderMap,
    pub path: String,
    pub fragment: Option<String>,
}

impl RequestParts {
    /// ## Summary
    /// Builds request parts from a raw request target such as `/files/a.txt#frag`.
    #[must_use]
    pub fn from_target(target: &str, headers: HeaderMap) -> Self {
        let (path, fragment) = split_fragment(target);
        Self {
            headers,
            path: path.to_string(),
            fragment: fragment.map(str::to_string),
        }
    }
}

impl RequestContext for RequestParts {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// ## Summary
/// Splits a request target at the first `#`.
///
/// The query string, if any, stays attached to the path half.
#[must_use]
pub fn split_fragment(target: &str) -> (&str, Option<&str>) {
    match target.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (target, None),
    }
}
