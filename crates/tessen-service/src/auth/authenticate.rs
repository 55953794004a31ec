use std::collections::HashMap;
use std::sync::Arc;

use salvo::async_trait;

use tessen_core::config::{AuthConfig, AuthMethod};
use tessen_rfc::rfc::auth::Credential;

use super::password::verify_password;
use crate::context::RequestContext;
use crate::error::ServiceError;

/// The identity a request was authenticated as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
}

impl Principal {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Result of verifying a credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Accept(Principal),
    /// The gate answers a rejection with a fresh challenge.
    Reject,
}

/// ## Summary
/// Verification step the gate delegates to once a well-formed credential is present.
///
/// Implementations decide credential policy; the gate only guarantees that
/// `authenticate` is called exactly once per request that reaches it.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        credential: &Credential,
        realm: &str,
        ctx: &dyn RequestContext,
    ) -> AuthDecision;
}

/// Rejects every credential.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait]
impl Authenticator for DenyAll {
    async fn authenticate(
        &self,
        credential: &Credential,
        realm: &str,
        _ctx: &dyn RequestContext,
    ) -> AuthDecision {
        tracing::debug!(user = %credential.name, realm = %realm, "Rejecting credential (deny_all)");
        AuthDecision::Reject
    }
}

/// Verifies credentials against a fixed table of Argon2 password hashes.
#[derive(Debug, Clone, Default)]
pub struct StaticUsers {
    users: HashMap<String, String>,
}

impl StaticUsers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user with an Argon2 PHC password hash. A later entry with the same name wins.
    #[must_use]
    pub fn with_user(mut self, name: impl Into<String>, password_hash: impl Into<String>) -> Self {
        self.users.insert(name.into(), password_hash.into());
        self
    }
}

#[async_trait]
impl Authenticator for StaticUsers {
    #[tracing::instrument(skip_all, fields(user = %credential.name, realm = %realm))]
    async fn authenticate(
        &self,
        credential: &Credential,
        realm: &str,
        _ctx: &dyn RequestContext,
    ) -> AuthDecision {
        let Some(hash) = self.users.get(&credential.name) else {
            tracing::debug!("Unknown user");
            return AuthDecision::Reject;
        };

        match verify_password(&credential.pass, hash) {
            Ok(()) => {
                tracing::debug!("User authenticated");
                AuthDecision::Accept(Principal::new(&credential.name))
            }
            Err(ServiceError::NotAuthenticated) => {
                tracing::debug!("Password mismatch");
                AuthDecision::Reject
            }
            Err(e) => {
                tracing::error!(error = %e, "Stored password hash is unusable");
                AuthDecision::Reject
            }
        }
    }
}

/// ## Summary
/// Builds the authenticator selected by `auth.method`.
#[must_use]
pub fn authenticator_from_config(config: &AuthConfig) -> Arc<dyn Authenticator> {
    match config.method {
        AuthMethod::DenyAll => Arc::new(DenyAll),
        AuthMethod::StaticUsers => Arc::new(
            config
                .users
                .iter()
                .fold(StaticUsers::new(), |users, user| {
                    users.with_user(&user.name, &user.password_hash)
                }),
        ),
    }
}
