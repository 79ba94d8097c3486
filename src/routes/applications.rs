use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::app::AppState;
use crate::authz::{gate, policy, Identity, Role};
use crate::errors::{AppError, AppResult};
use crate::models::application::{
    ApplicationCreateRequest, ApplicationCreatedResponse, ApplicationSummary,
};

#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "Applications",
    responses((status = 200, description = "Applications visible to the caller", body = [ApplicationSummary]))
)]
pub async fn list_applications(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<Vec<ApplicationSummary>>> {
    gate::require_role(&identity, policy::APPLICATIONS_LIST)?;

    let base = "SELECT a.application_id, a.job_id, a.applicant_id, a.cover_letter, \
         a.application_date, a.status, j.job_title, c.company_name, \
         ap.first_name || ' ' || ap.last_name AS applicant_name \
         FROM applications a \
         INNER JOIN jobs j ON a.job_id = j.job_id \
         INNER JOIN companies c ON j.company_id = c.company_id \
         INNER JOIN applicants ap ON a.applicant_id = ap.applicant_id";

    // Applicants see only their own rows; staff see everything.
    let applications = if identity.role == Role::Applicant {
        sqlx::query_as::<_, ApplicationSummary>(&format!(
            "{base} WHERE a.applicant_id = ? ORDER BY a.application_date DESC"
        ))
        .bind(identity.id)
        .fetch_all(&state.pool)
        .await?
    } else {
        sqlx::query_as::<_, ApplicationSummary>(&format!(
            "{base} ORDER BY a.application_date DESC"
        ))
        .fetch_all(&state.pool)
        .await?
    };

    Ok(Json(applications))
}

#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "Applications",
    request_body = ApplicationCreateRequest,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationCreatedResponse),
        (status = 400, description = "Already applied to this job"),
        (status = 403, description = "Caller is not an applicant"),
        (status = 404, description = "Job not found"),
    )
)]
pub async fn create_application(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<ApplicationCreateRequest>,
) -> AppResult<(StatusCode, Json<ApplicationCreatedResponse>)> {
    gate::require_role(&identity, policy::APPLICATIONS_CREATE)?;

    let job_exists: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM jobs WHERE job_id = ?")
        .bind(payload.job_id)
        .fetch_one(&state.pool)
        .await?;
    if job_exists == 0 {
        return Err(AppError::not_found("job not found"));
    }

    // The (job_id, applicant_id) unique constraint is the source of truth
    // for duplicates; a second submission must fail, never merge.
    let result = sqlx::query(
        "INSERT INTO applications (job_id, applicant_id, cover_letter) VALUES (?, ?, ?)",
    )
    .bind(payload.job_id)
    .bind(identity.id)
    .bind(&payload.cover_letter)
    .execute(&state.pool)
    .await;

    let result = match result {
        Ok(result) => result,
        Err(sqlx::Error::Database(db_err))
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            return Err(AppError::duplicate("you have already applied to this job"));
        }
        Err(err) => return Err(err.into()),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApplicationCreatedResponse {
            message: "Application submitted successfully".to_string(),
            application_id: result.last_insert_rowid(),
        }),
    ))
}
