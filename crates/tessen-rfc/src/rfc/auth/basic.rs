//! RFC 7617 `Basic` credentials.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use tessen_core::constants::BASIC_SCHEME;

/// A user-id/password pair taken from an `Authorization: Basic` header.
///
/// `pass` may be empty but is always present.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub name: String,
    pub pass: String,
}

impl Credential {
    #[must_use]
    pub fn new(name: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass: pass.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// ## Summary
/// Extracts a `Credential` from a raw `Authorization` header value.
///
/// Returns `None` when the header is absent, uses another scheme, carries a
/// token that is not valid base64 or UTF-8, lacks the `:` separator, or has
/// an empty user-id. Callers treat all of these exactly like a missing header.
#[must_use]
pub fn parse_basic_credentials(header: Option<&str>) -> Option<Credential> {
    let value = header?.trim();

    let Some((scheme, token)) = value.split_once(char::is_whitespace) else {
        tracing::trace!("Authorization header has no credentials token");
        return None;
    };

    if !scheme.eq_ignore_ascii_case(BASIC_SCHEME) {
        tracing::trace!(scheme = %scheme, "Unsupported authorization scheme");
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let decoded = match STANDARD.decode(token) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::trace!(error = %e, "Basic token is not valid base64");
            return None;
        }
    };

    let Ok(decoded) = String::from_utf8(decoded) else {
        tracing::trace!("Basic token is not valid UTF-8");
        return None;
    };

    // The user-id cannot contain a colon; everything after the first one is the password.
    let (name, pass) = decoded.split_once(':')?;
    if name.is_empty() {
        return None;
    }

    Some(Credential::new(name, pass))
}
