use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;

pub const ROLE_HEADER: &str = "x-user-role";
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    Recruiter,
    HRManager,
    Applicant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Recruiter => "Recruiter",
            Role::HRManager => "HRManager",
            Role::Applicant => "Applicant",
        }
    }

    /// Wire names are case-sensitive; anything else counts as a malformed
    /// identity, not a forbidden one.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Admin" => Some(Role::Admin),
            "Recruiter" => Some(Role::Recruiter),
            "HRManager" => Some(Role::HRManager),
            "Applicant" => Some(Role::Applicant),
            _ => None,
        }
    }

    pub fn is_staff(self) -> bool {
        !matches!(self, Role::Applicant)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller's asserted identity, reconstructed from the trusted headers on
/// every request. There is no session object; every gate and workflow takes
/// this value explicitly.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub id: i64,
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role_header = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok());
        let id_header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok());

        let (role_raw, id_raw) = match (role_header, id_header) {
            (Some(role), Some(id)) => (role, id),
            _ => {
                return Err(AppError::unauthenticated(format!(
                    "please provide {ROLE_HEADER} and {USER_ID_HEADER} headers"
                )))
            }
        };

        let role = Role::parse(role_raw)
            .ok_or_else(|| AppError::unauthenticated(format!("unknown role '{role_raw}'")))?;

        let id = id_raw
            .parse::<i64>()
            .ok()
            .filter(|id| *id >= 1)
            .ok_or_else(|| {
                AppError::unauthenticated(format!("{USER_ID_HEADER} must be a positive integer"))
            })?;

        Ok(Identity { id, role })
    }
}
