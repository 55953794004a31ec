//! `DELETE` classification and coordination.

use salvo::http::StatusCode;

use tessen_core::constants::{FRAGMENT_CONFLICT_BODY, NO_FILES_DELETED_BODY};
use tessen_rfc::rfc::dav::core::Multistatus;

use super::aggregate::aggregate;
use super::bridge::ResourceBridge;
use super::resource::{DeletionTarget, Resource};

/// What to do with a deletion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Nothing resolved at the request path (404).
    NotFound,
    /// The request URL carried a fragment (409).
    Conflict,
    DeleteFile(&'a Resource),
    DeleteCollection(&'a Resource),
}

/// ## Summary
/// Decides how a `DELETE` target is handled, before any storage call.
///
/// Existence is checked first, then the fragment, then the resource kind.
#[must_use]
pub fn classify(target: &DeletionTarget) -> Classification<'_> {
    let Some(resource) = target.resource.as_ref() else {
        return Classification::NotFound;
    };

    if target.has_fragment {
        return Classification::Conflict;
    }

    if resource.is_collection {
        Classification::DeleteCollection(resource)
    } else {
        Classification::DeleteFile(resource)
    }
}

/// Body of a terminal `DELETE` response.
#[derive(Debug, Clone)]
pub enum DeleteBody {
    Empty,
    Text(&'static str),
    Multistatus(Multistatus),
}

/// Terminal response of the `DELETE` pipeline.
#[derive(Debug, Clone)]
pub struct DeleteResponse {
    pub status: StatusCode,
    pub body: DeleteBody,
}

impl DeleteResponse {
    #[must_use]
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: DeleteBody::Empty,
        }
    }

    #[must_use]
    pub fn text(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body: DeleteBody::Text(body),
        }
    }

    #[must_use]
    pub fn multistatus(multistatus: Multistatus) -> Self {
        Self {
            status: StatusCode::MULTI_STATUS,
            body: DeleteBody::Multistatus(multistatus),
        }
    }
}

/// ## Summary
/// Classifies `target` and, when it is deletable, performs exactly one bridge call.
///
/// Never fails: every condition is turned into a terminal response.
///
/// - 404 when nothing exists, 409 when the URL has a fragment
/// - file: 204 on success, else the bridge status (default 500) with a fixed body
/// - collection: 204 when every member went, 207 listing failed members,
///   or the bridge status (default 500) when the whole operation failed
#[tracing::instrument(skip_all, fields(target = target.name().unwrap_or("<none>")))]
pub async fn delete_resource(bridge: &dyn ResourceBridge, target: &DeletionTarget) -> DeleteResponse {
    match classify(target) {
        Classification::NotFound => {
            tracing::debug!("No resource to delete");
            DeleteResponse::empty(StatusCode::NOT_FOUND)
        }
        Classification::Conflict => {
            tracing::warn!("URL has a fragment. Refusing to delete.");
            DeleteResponse::text(StatusCode::CONFLICT, FRAGMENT_CONFLICT_BODY)
        }
        Classification::DeleteCollection(resource) => delete_collection(bridge, resource).await,
        Classification::DeleteFile(resource) => delete_file(bridge, resource).await,
    }
}

async fn delete_collection(bridge: &dyn ResourceBridge, resource: &Resource) -> DeleteResponse {
    tracing::debug!(href = %resource.href, "Deleting collection");

    match bridge.delete_collection(resource).await {
        Err(e) => {
            tracing::debug!(error = %e, status = ?e.status, "Failed to delete collection");
            DeleteResponse::empty(e.status_code())
        }
        Ok(failures) if failures.is_empty() => DeleteResponse::empty(StatusCode::NO_CONTENT),
        Ok(failures) => {
            tracing::debug!(failed = failures.len(), "Collection partially deleted");
            DeleteResponse::multistatus(aggregate(failures))
        }
    }
}

async fn delete_file(bridge: &dyn ResourceBridge, resource: &Resource) -> DeleteResponse {
    tracing::debug!(href = %resource.href, "Deleting file");

    match bridge.delete_file(resource).await {
        Ok(()) => DeleteResponse::empty(StatusCode::NO_CONTENT),
        Err(e) => {
            tracing::debug!(error = %e, status = ?e.status, "Failed to delete file");
            DeleteResponse::text(e.status_code(), NO_FILES_DELETED_BODY)
        }
    }
}
