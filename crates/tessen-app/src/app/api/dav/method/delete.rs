//! DELETE method handler for `WebDAV` resources.

use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};

use tessen_service::dav::delete_resource;

use crate::app::api::dav::response::write_delete_response;
use crate::bridge_handler::get_bridge_from_depot;
use crate::depot::{get_deletion_target_from_depot, get_principal_from_depot};

/// ## Summary
/// Handles DELETE requests for files and collections.
///
/// The target was resolved by `ResourceResolver`; the deletion itself is
/// delegated to the storage bridge.
///
/// ## Side Effects
/// Removes the resource, or as much of the collection as the bridge allows.
///
/// ## Errors
/// 404 if nothing exists, 409 if the URL carried a fragment, the bridge
/// status on failure and 207 when some collection members survived.
#[handler]
#[tracing::instrument(skip_all, fields(
    method = "DELETE",
    path = %req.uri().path()
))]
pub async fn delete(req: &mut Request, res: &mut Response, depot: &Depot) {
    let user = get_principal_from_depot(depot).map_or("-", |principal| principal.name.as_str());
    tracing::info!(user, "Handling DELETE request");

    let bridge = match get_bridge_from_depot(depot) {
        Ok(bridge) => bridge,
        Err(e) => {
            tracing::error!(error = %e, "Failed to get resource bridge");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let target = match get_deletion_target_from_depot(depot) {
        Ok(target) => target,
        Err(e) => {
            tracing::error!(error = %e, "Deletion target not found; resource resolver may not have run");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            return;
        }
    };

    let response = delete_resource(bridge.as_ref(), target).await;
    tracing::debug!(status = %response.status, "DELETE completed");

    write_delete_response(res, response);
}
