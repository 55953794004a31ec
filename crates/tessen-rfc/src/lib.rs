//! RFC-level codecs used by the tessen server.
//!
//! - `rfc::auth`: RFC 7617 Basic credentials
//! - `rfc::dav`: RFC 4918 multistatus model and XML serialization

pub mod error;
pub mod rfc;
