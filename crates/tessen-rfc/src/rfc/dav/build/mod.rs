//! `WebDAV` XML serialization.

mod multistatus;

pub use multistatus::serialize_multistatus;
