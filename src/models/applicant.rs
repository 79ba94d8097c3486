use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Profile as returned to API callers. The `location` field is subject to
/// the visibility policy and may be replaced by the masking sentinel before
/// the record leaves the system.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ApplicantProfile {
    pub applicant_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}
