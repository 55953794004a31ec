//! Protocol decision logic for Basic authentication and `DELETE`.
//!
//! ## Module Organization
//!
//! - `auth`: Basic challenge/response gate and pluggable authenticators
//! - `context`: Read-only view of the inbound request
//! - `dav`: Deletion classification, coordination and multistatus aggregation
//! - `error`: Service error type

pub mod auth;
pub mod context;
pub mod dav;
pub mod error;
