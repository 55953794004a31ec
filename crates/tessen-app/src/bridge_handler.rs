use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use tessen_core::error::CoreError;
use tessen_service::dav::ResourceBridge;

/// Makes the storage bridge available to downstream handlers.
pub struct BridgeHandler {
    pub bridge: Arc<dyn ResourceBridge>,
}

#[async_trait]
impl salvo::Handler for BridgeHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.bridge));
    }
}

/// ## Summary
/// Retrieves the storage bridge from the depot.
///
/// ## Errors
/// Returns an error if no bridge was injected.
pub fn get_bridge_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn ResourceBridge>> {
    depot
        .obtain::<Arc<dyn ResourceBridge>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Resource bridge not found in depot").into())
}
