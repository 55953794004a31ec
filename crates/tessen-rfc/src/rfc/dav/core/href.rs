//! DAV href type.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left as-is in a path segment (RFC 3986 `pchar` minus `%`).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// A `WebDAV` href (URL reference).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href(pub String);

impl Href {
    /// Creates a new href.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the href as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last path segment (resource name).
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let path = self.0.trim_end_matches('/');
        path.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Joins a child segment, inserting a slash if needed.
    #[must_use]
    pub fn join(&self, child: &str) -> Self {
        let child = child.trim_start_matches('/');
        if self.0.ends_with('/') {
            Self(format!("{}{child}", self.0))
        } else {
            Self(format!("{}/{child}", self.0))
        }
    }

    /// Joins a raw path segment, percent-encoding it first.
    #[must_use]
    pub fn join_segment(&self, segment: &str) -> Self {
        self.join(&utf8_percent_encode(segment, SEGMENT).to_string())
    }

    /// Ensures the href ends with a slash (for collections).
    #[must_use]
    pub fn with_trailing_slash(self) -> Self {
        if self.0.ends_with('/') {
            self
        } else {
            Self(format!("{}/", self.0))
        }
    }

    /// URL-decodes the href. Invalid UTF-8 sequences are replaced and
    /// malformed escapes are kept verbatim.
    #[must_use]
    pub fn decode(&self) -> String {
        percent_decode_str(&self.0).decode_utf8_lossy().into_owned()
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Href {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Href {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
