//! Multistatus response types.

use salvo::http::StatusCode;

use super::href::Href;

/// A multistatus response (RFC 4918 §13).
#[derive(Debug, Clone, Default)]
pub struct Multistatus {
    /// Individual responses, in the order they were added.
    pub responses: Vec<StatusResponse>,
}

impl Multistatus {
    /// Creates an empty multistatus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a response.
    pub fn add_response(&mut self, response: StatusResponse) {
        self.responses.push(response);
    }

    /// Returns the number of responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// A `DAV:response` carrying a bare status instead of propstats.
///
/// This is the form used for per-member failures of `DELETE`, `COPY` and `MOVE`
/// (RFC 4918 §9.6.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResponse {
    /// The member href.
    pub href: Href,
    /// Status of the operation on that member.
    pub status: Status,
}

impl StatusResponse {
    #[must_use]
    pub fn new(href: impl Into<Href>, status: impl Into<Status>) -> Self {
        Self {
            href: href.into(),
            status: status.into(),
        }
    }
}

/// HTTP status reported inside a multistatus body.
///
/// Any numeric code is accepted; codes unknown to HTTP keep their number and
/// get the reason phrase `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(u16);

impl Status {
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Returns the reason phrase.
    #[must_use]
    pub fn reason_phrase(&self) -> &'static str {
        StatusCode::from_u16(self.0)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown")
    }

    /// Returns the status line.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("HTTP/1.1 {} {}", self.0, self.reason_phrase())
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<StatusCode> for Status {
    fn from(code: StatusCode) -> Self {
        Self(code.as_u16())
    }
}
