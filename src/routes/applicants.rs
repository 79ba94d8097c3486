use axum::extract::{Path, State};
use axum::Json;
use sqlx::SqlitePool;

use crate::app::AppState;
use crate::authz::{gate, policy, visibility, Identity};
use crate::errors::{AppError, AppResult};
use crate::models::applicant::ApplicantProfile;
use crate::models::application::ApplicationSummary;

#[utoipa::path(
    get,
    path = "/api/applicants/{id}",
    tag = "Applicants",
    params(("id" = i64, Path, description = "Applicant id")),
    responses(
        (status = 200, description = "Applicant profile, location masked for cross-applicant reads", body = ApplicantProfile),
        (status = 404, description = "Applicant not found"),
    )
)]
pub async fn get_applicant(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<ApplicantProfile>> {
    gate::require_role(&identity, policy::APPLICANTS_VIEW)?;

    let mut profile = fetch_applicant(&state.pool, id).await?;
    visibility::redact_profile(&mut profile, &identity);

    Ok(Json(profile))
}

#[utoipa::path(
    get,
    path = "/api/applicants/{id}/applications",
    tag = "Applicants",
    params(("id" = i64, Path, description = "Owning applicant id")),
    responses(
        (status = 200, description = "Applications submitted by this applicant", body = [ApplicationSummary]),
        (status = 403, description = "Applicant requesting another applicant's records"),
    )
)]
pub async fn list_applicant_applications(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<ApplicationSummary>>> {
    gate::require_role(&identity, policy::APPLICANT_APPLICATIONS_LIST)?;
    // The path id is the trusted locator; ownership is checked against it,
    // never against anything in a request body.
    gate::require_owner(&identity, id)?;

    let _ = fetch_applicant(&state.pool, id).await?;

    let applications = sqlx::query_as::<_, ApplicationSummary>(
        "SELECT a.application_id, a.job_id, a.applicant_id, a.cover_letter, a.application_date, \
         a.status, j.job_title, c.company_name, \
         ap.first_name || ' ' || ap.last_name AS applicant_name \
         FROM applications a \
         INNER JOIN jobs j ON a.job_id = j.job_id \
         INNER JOIN companies c ON j.company_id = c.company_id \
         INNER JOIN applicants ap ON a.applicant_id = ap.applicant_id \
         WHERE a.applicant_id = ? ORDER BY a.application_date DESC",
    )
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(applications))
}

async fn fetch_applicant(pool: &SqlitePool, id: i64) -> AppResult<ApplicantProfile> {
    sqlx::query_as::<_, ApplicantProfile>(
        "SELECT applicant_id, first_name, last_name, email, phone, location, role, status, \
         created_at FROM applicants WHERE applicant_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::not_found("applicant not found"))
}
