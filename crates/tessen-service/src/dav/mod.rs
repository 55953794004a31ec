//! `DELETE` handling for single resources and collections.
//!
//! ## Module Organization
//!
//! - `aggregate`: Folds per-member failures into a multistatus body
//! - `bridge`: The storage collaborator (`ResourceBridge`) and its error type
//! - `delete`: Target classification and the deletion coordinator
//! - `fs`: Filesystem-backed bridge
//! - `memory`: In-memory bridge with injectable failures
//! - `resource`: Resource, target and per-member outcome types

pub mod aggregate;
pub mod bridge;
pub mod delete;
pub mod fs;
pub mod memory;
pub mod resource;


pub use aggregate::aggregate;
pub use bridge::{BridgeError, ResourceBridge};
pub use delete::{Classification, DeleteBody, DeleteResponse, classify, delete_resource};
pub use fs::FsBridge;
pub use memory::MemoryBridge;
pub use resource::{ChildOutcome, DeletionTarget, Resource};
