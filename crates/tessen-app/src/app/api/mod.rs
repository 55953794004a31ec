pub mod dav;

use salvo::Router;

use tessen_core::config::Settings;
use crate::middleware::auth::BasicAuthMiddleware;

// Re-export route constants from core
pub use tessen_core::constants::{DAV_ROUTE_COMPONENT, DAV_ROUTE_PREFIX};

/// ## Summary
/// Constructs the router: the Basic gate in front of the `WebDAV` routes.
///
/// ## Errors
/// Returns an error if the authentication gate cannot be built from `settings`.
pub fn routes(settings: &Settings) -> anyhow::Result<Router> {
    Ok(Router::new()
        .hoop(BasicAuthMiddleware::from_config(&settings.auth)?)
        .push(Router::with_path(DAV_ROUTE_COMPONENT).push(dav::routes())))
}
