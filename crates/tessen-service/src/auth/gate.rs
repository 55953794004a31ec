//! HTTP Basic challenge/response gate.
//!
//! ## Summary
//! Every request passes through [`AuthenticationGate::check`]:
//!
//! 1. No `Authorization` header, or a value of length 0 or 1, is challenged.
//! 2. A value that does not parse into a `Credential` is challenged the same way.
//! 3. Otherwise the credential is handed to the configured [`Authenticator`],
//!    exactly once. A rejection is challenged as well.
//!
//! A challenge is a 401 carrying `WWW-Authenticate: Basic realm="<realm>"`.

use std::sync::Arc;

use salvo::http::StatusCode;
use salvo::http::header::{HeaderMap, HeaderValue, WWW_AUTHENTICATE};

use tessen_core::constants::{BASIC_SCHEME, DEFAULT_REALM};
use tessen_rfc::rfc::auth::{Credential, parse_basic_credentials};

use super::authenticate::{AuthDecision, Authenticator, Principal};
use crate::context::RequestContext;
use crate::error::{ServiceError, ServiceResult};

/// Outcome of the pre-delegation checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateStep {
    /// Terminal: the client must (re)submit credentials.
    Challenge,
    /// Control passes to the authenticator with this credential.
    Delegate(Credential),
}

/// Terminal result of the gate for one request.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    Authenticated(Principal),
    Challenged(Challenge),
}

/// A 401 response description: status plus the headers to emit.
#[derive(Debug, Clone)]
pub struct Challenge {
    headers: HeaderMap,
}

impl Challenge {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }

    /// Returns the `WWW-Authenticate` value.
    #[must_use]
    pub fn www_authenticate(&self) -> Option<&str> {
        self.headers
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
    }
}

/// The Basic authentication gate.
pub struct AuthenticationGate {
    realm: String,
    challenge_value: HeaderValue,
    authenticator: Arc<dyn Authenticator>,
}

impl std::fmt::Debug for AuthenticationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationGate")
            .field("realm", &self.realm)
            .finish_non_exhaustive()
    }
}

impl AuthenticationGate {
    /// ## Summary
    /// Creates a gate for `realm`, falling back to `"WebDAV"` only when no realm is given.
    ///
    /// An explicit empty realm is kept as-is.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` if the realm cannot be carried in an HTTP header.
    pub fn new(
        realm: Option<String>,
        authenticator: Arc<dyn Authenticator>,
    ) -> ServiceResult<Self> {
        let realm = realm.unwrap_or_else(|| DEFAULT_REALM.to_string());
        let challenge_value = HeaderValue::from_str(&format!("{BASIC_SCHEME} realm=\"{realm}\""))
            .map_err(|e| {
                ServiceError::InvalidConfiguration(format!("Realm is not a valid header value: {e}"))
            })?;

        Ok(Self {
            realm,
            challenge_value,
            authenticator,
        })
    }

    #[must_use]
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// ## Summary
    /// Runs the pre-delegation rules without calling the authenticator.
    #[must_use]
    pub fn evaluate(&self, ctx: &dyn RequestContext) -> GateStep {
        let header = match ctx.authorization() {
            Some(value) if value.len() > 1 => value,
            _ => {
                tracing::debug!("Missing or empty Authorization header");
                return GateStep::Challenge;
            }
        };

        match parse_basic_credentials(Some(header)) {
            Some(credential) => GateStep::Delegate(credential),
            None => {
                tracing::debug!("Authorization header did not yield Basic credentials");
                GateStep::Challenge
            }
        }
    }

    /// ## Summary
    /// Runs the full gate for one request.
    #[tracing::instrument(skip_all, fields(realm = %self.realm, path = %ctx.path()))]
    pub async fn check(&self, ctx: &dyn RequestContext) -> AuthOutcome {
        let credential = match self.evaluate(ctx) {
            GateStep::Delegate(credential) => credential,
            GateStep::Challenge => return AuthOutcome::Challenged(self.challenge()),
        };

        match self
            .authenticator
            .authenticate(&credential, &self.realm, ctx)
            .await
        {
            AuthDecision::Accept(principal) => {
                tracing::trace!(user = %principal.name, "Request authenticated");
                AuthOutcome::Authenticated(principal)
            }
            AuthDecision::Reject => {
                tracing::debug!(user = %credential.name, "Credential rejected");
                AuthOutcome::Challenged(self.challenge())
            }
        }
    }

    /// Builds the challenge for this gate's realm.
    #[must_use]
    pub fn challenge(&self) -> Challenge {
        self.challenge_with(HeaderMap::new())
    }

    /// ## Summary
    /// Builds a challenge that also carries `extra` headers.
    ///
    /// `WWW-Authenticate` always holds this gate's Basic challenge, even if
    /// `extra` contains one.
    #[must_use]
    pub fn challenge_with(&self, extra: HeaderMap) -> Challenge {
        let mut headers = extra;
        headers.insert(WWW_AUTHENTICATE, self.challenge_value.clone());
        Challenge { headers }
    }
}
