//! `WebDAV` (RFC 4918) types and serializers.

pub mod build;
pub mod core;
