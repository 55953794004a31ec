//! Request-to-context extraction.

use tessen_service::context::RequestParts;

/// ## Summary
/// Snapshots the parts of `req` the gate and the deletion logic read.
///
/// The target is taken from the parsed URI. Clients do not transmit fragments
/// and the HTTP stack drops any it receives, so a fragment only shows up here
/// when a proxy forwards a raw `#` in the path.
#[must_use]
pub fn request_parts(req: &salvo::Request) -> RequestParts {
    RequestParts::from_target(req.uri().path(), req.headers().clone())
}
