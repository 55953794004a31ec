//! Resolves the request path to a `DeletionTarget` before the method handler runs.

use salvo::Depot;
use salvo::http::StatusCode;

use tessen_service::context::RequestContext;
use tessen_service::dav::DeletionTarget;

use crate::bridge_handler::get_bridge_from_depot;
use crate::depot::depot_keys;
use crate::extract::request_parts;

/// ## Summary
/// Looks the request path up through the storage bridge.
///
/// The fragment flag comes from `request_parts`, which reads the parsed URI.
/// The URI parser has already stripped any `#fragment`, so `DELETE /dav/coll/#x`
/// resolves `coll/` here. The 409 fragment answer is only reachable for
/// targets built with `RequestParts::from_target` from a raw request line.
///
/// ## Side Effects
/// Inserts a `DeletionTarget` into the depot under `DELETION_TARGET`. A bridge
/// failure is answered with the bridge's status and ends the chain.
pub struct ResourceResolver;

#[salvo::async_trait]
impl salvo::Handler for ResourceResolver {
    #[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        let bridge = match get_bridge_from_depot(depot) {
            Ok(bridge) => bridge,
            Err(e) => {
                tracing::error!(error = %e, "Failed to get resource bridge from depot");
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                ctrl.skip_rest();
                return;
            }
        };

        let parts = request_parts(req);
        match bridge.resolve(parts.path()).await {
            Ok(resource) => {
                tracing::debug!(found = resource.is_some(), "Path resolved");
                let target = DeletionTarget::new(resource, parts.fragment().is_some());
                depot.insert(depot_keys::DELETION_TARGET, target);
            }
            Err(e) => {
                tracing::debug!(error = %e, status = ?e.status, "Failed to resolve path");
                res.status_code(e.status_code());
                ctrl.skip_rest();
            }
        }
    }
}
