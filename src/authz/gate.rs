use super::{Identity, Role};
use crate::errors::{AppError, AppResult};

/// Admit the caller when their role is in the endpoint's allow-list.
///
/// Pure decision function: no persistence access happens before this check,
/// so a rejection leaks nothing.
pub fn require_role(identity: &Identity, allowed: &[Role]) -> AppResult<()> {
    if allowed.contains(&identity.role) {
        return Ok(());
    }

    tracing::debug!(
        user_id = identity.id,
        role = %identity.role,
        "role gate denied"
    );

    let names: Vec<&str> = allowed.iter().map(|role| role.as_str()).collect();
    Err(AppError::forbidden(format!(
        "access denied, required roles: {}",
        names.join(", ")
    )))
}

/// Admit the caller when they own the resource, identified by the owning
/// applicant id taken from the request path. Staff roles always pass; this
/// gate only constrains applicants.
pub fn require_owner(identity: &Identity, owner_id: i64) -> AppResult<()> {
    if identity.role.is_staff() || identity.id == owner_id {
        return Ok(());
    }

    tracing::debug!(
        user_id = identity.id,
        owner_id,
        "ownership gate denied"
    );

    Err(AppError::forbidden(
        "applicants can only access their own records",
    ))
}
