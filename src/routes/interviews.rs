use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::app::AppState;
use crate::authz::{gate, policy, Identity};
use crate::errors::{AppError, AppResult};
use crate::models::interview::{InterviewCreateRequest, InterviewCreatedResponse, InterviewSummary};

const DEFAULT_INTERVIEW_TYPE: &str = "Phone";

#[utoipa::path(
    get,
    path = "/api/interviews",
    tag = "Interviews",
    responses(
        (status = 200, description = "List interviews", body = [InterviewSummary]),
        (status = 403, description = "Caller is not staff"),
    )
)]
pub async fn list_interviews(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<Vec<InterviewSummary>>> {
    gate::require_role(&identity, policy::INTERVIEWS_LIST)?;

    let interviews = sqlx::query_as::<_, InterviewSummary>(
        "SELECT i.interview_id, i.application_id, i.recruiter_id, i.interview_date, \
         i.interview_type, i.location, i.notes, i.status, \
         a.first_name || ' ' || a.last_name AS applicant_name, \
         r.first_name || ' ' || r.last_name AS recruiter_name, \
         j.job_title \
         FROM interviews i \
         INNER JOIN applications app ON i.application_id = app.application_id \
         INNER JOIN applicants a ON app.applicant_id = a.applicant_id \
         INNER JOIN applicants r ON i.recruiter_id = r.applicant_id \
         INNER JOIN jobs j ON app.job_id = j.job_id \
         ORDER BY i.interview_date DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(interviews))
}

#[utoipa::path(
    post,
    path = "/api/interviews",
    tag = "Interviews",
    request_body = InterviewCreateRequest,
    responses(
        (status = 201, description = "Interview scheduled", body = InterviewCreatedResponse),
        (status = 404, description = "Application not found"),
    )
)]
pub async fn create_interview(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<InterviewCreateRequest>,
) -> AppResult<(StatusCode, Json<InterviewCreatedResponse>)> {
    gate::require_role(&identity, policy::INTERVIEWS_CREATE)?;

    let application_exists: i64 =
        sqlx::query_scalar("SELECT COUNT(1) FROM applications WHERE application_id = ?")
            .bind(payload.application_id)
            .fetch_one(&state.pool)
            .await?;
    if application_exists == 0 {
        return Err(AppError::not_found("application not found"));
    }

    let interview_type = payload
        .interview_type
        .clone()
        .unwrap_or_else(|| DEFAULT_INTERVIEW_TYPE.to_string());

    let result = sqlx::query(
        "INSERT INTO interviews (application_id, recruiter_id, interview_date, interview_type, \
         location, notes) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(payload.application_id)
    .bind(identity.id)
    .bind(payload.interview_date)
    .bind(&interview_type)
    .bind(&payload.location)
    .bind(&payload.notes)
    .execute(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(InterviewCreatedResponse {
            message: "Interview scheduled successfully".to_string(),
            interview_id: result.last_insert_rowid(),
        }),
    ))
}
