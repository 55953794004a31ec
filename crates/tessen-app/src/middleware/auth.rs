use std::sync::Arc;

use salvo::Depot;

use tessen_core::config::AuthConfig;
use tessen_service::auth::{AuthOutcome, AuthenticationGate, authenticator_from_config};

use crate::app::api::dav::response::write_challenge;
use crate::depot::depot_keys;
use crate::error::AppResult;
use crate::extract::request_parts;

/// ## Summary
/// Basic authentication middleware. Every request it fronts passes through the gate.
///
/// ## Side Effects
/// On success, inserts the `Principal` into the depot under
/// `AUTHENTICATED_PRINCIPAL`. Otherwise writes the 401 challenge and skips
/// the rest of the chain.
pub struct BasicAuthMiddleware {
    gate: Arc<AuthenticationGate>,
}

impl BasicAuthMiddleware {
    #[must_use]
    pub fn new(gate: Arc<AuthenticationGate>) -> Self {
        Self { gate }
    }

    /// ## Summary
    /// Builds the gate and its authenticator from `auth` settings.
    ///
    /// ## Errors
    /// Returns an error if the configured realm is not a valid header value.
    pub fn from_config(auth: &AuthConfig) -> AppResult<Self> {
        let gate = AuthenticationGate::new(auth.realm.clone(), authenticator_from_config(auth))?;
        Ok(Self::new(Arc::new(gate)))
    }
}

#[salvo::async_trait]
impl salvo::Handler for BasicAuthMiddleware {
    #[tracing::instrument(skip_all, fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let parts = request_parts(req);
        match self.gate.check(&parts).await {
            AuthOutcome::Authenticated(principal) => {
                tracing::debug!(user = %principal.name, "User authenticated successfully");
                depot.insert(depot_keys::AUTHENTICATED_PRINCIPAL, principal);
            }
            AuthOutcome::Challenged(challenge) => {
                write_challenge(res, challenge);
                ctrl.skip_rest();
            }
        }
    }
}
