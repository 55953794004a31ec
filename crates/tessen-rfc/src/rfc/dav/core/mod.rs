//! `WebDAV` XML types used in multistatus responses.

mod href;
mod multistatus;

pub use href::Href;
pub use multistatus::{Multistatus, Status, StatusResponse};
