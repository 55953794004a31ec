//! Per-request values stored in the salvo depot.

use tessen_core::error::CoreError;
use tessen_service::auth::Principal;
use tessen_service::dav::DeletionTarget;

use crate::error::AppResult;

pub mod depot_keys {
    pub const AUTHENTICATED_PRINCIPAL: &str = "__authenticated_principal";
    pub const DELETION_TARGET: &str = "__deletion_target";
}

/// ## Summary
/// Returns the principal admitted by the authentication gate.
///
/// ## Errors
/// Returns an error if the gate did not run for this request.
pub fn get_principal_from_depot(depot: &salvo::Depot) -> AppResult<&Principal> {
    depot
        .get::<Principal>(depot_keys::AUTHENTICATED_PRINCIPAL)
        .map_err(|_e| CoreError::InvariantViolation("Principal not found in depot").into())
}

/// ## Summary
/// Returns the deletion target resolved by `ResourceResolver`.
///
/// ## Errors
/// Returns an error if the resolver did not run for this request.
pub fn get_deletion_target_from_depot(depot: &salvo::Depot) -> AppResult<&DeletionTarget> {
    depot
        .get::<DeletionTarget>(depot_keys::DELETION_TARGET)
        .map_err(|_e| CoreError::InvariantViolation("Deletion target not found in depot").into())
}
