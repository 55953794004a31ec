//! The storage collaborator invoked by the deletion coordinator.

use salvo::async_trait;
use salvo::http::StatusCode;
use thiserror::Error;

use super::resource::{ChildOutcome, Resource};

/// ## Summary
/// Failure reported by the storage layer.
///
/// `status` is the HTTP status the bridge wants surfaced; `None` means 500.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct BridgeError {
    pub status: Option<u16>,
    pub message: String,
}

impl BridgeError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// ## Summary
    /// Returns the status to respond with.
    ///
    /// Falls back to 500 when no status was reported or it is not a valid HTTP status.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// ## Summary
/// Storage operations used by the `DELETE` pipeline.
///
/// Each operation completes exactly once. Retries, timeouts and member
/// traversal order belong to the implementation.
#[async_trait]
pub trait ResourceBridge: Send + Sync {
    /// Looks up the resource at `path`. `Ok(None)` means nothing exists there.
    async fn resolve(&self, path: &str) -> Result<Option<Resource>, BridgeError>;

    /// Deletes a single non-collection resource.
    async fn delete_file(&self, resource: &Resource) -> Result<(), BridgeError>;

    /// ## Summary
    /// Deletes a collection and its members.
    ///
    /// `Err` means the operation could not proceed at all. `Ok` lists the
    /// members that individually failed; an empty list means everything,
    /// including the collection itself, was removed.
    async fn delete_collection(&self, resource: &Resource)
    -> Result<Vec<ChildOutcome>, BridgeError>;
}
