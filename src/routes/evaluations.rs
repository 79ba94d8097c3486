use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::app::AppState;
use crate::authz::{gate, policy, Identity};
use crate::errors::{AppError, AppResult};
use crate::models::evaluation::{EvaluationCreateRequest, EvaluationCreatedResponse};
use crate::rules;

#[utoipa::path(
    post,
    path = "/api/evaluations",
    tag = "Evaluations",
    request_body = EvaluationCreateRequest,
    responses(
        (status = 201, description = "Evaluation recorded", body = EvaluationCreatedResponse),
        (status = 400, description = "Score outside 1..=10"),
        (status = 404, description = "Interview not found"),
    )
)]
pub async fn create_evaluation(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<EvaluationCreateRequest>,
) -> AppResult<(StatusCode, Json<EvaluationCreatedResponse>)> {
    gate::require_role(&identity, policy::EVALUATIONS_CREATE)?;

    for score in [
        payload.technical_score,
        payload.communication_score,
        payload.cultural_fit_score,
    ] {
        if !rules::valid_interview_score(score) {
            return Err(AppError::validation("scores must be between 1 and 10"));
        }
    }

    let interview_exists: i64 =
        sqlx::query_scalar("SELECT COUNT(1) FROM interviews WHERE interview_id = ?")
            .bind(payload.interview_id)
            .fetch_one(&state.pool)
            .await?;
    if interview_exists == 0 {
        return Err(AppError::not_found("interview not found"));
    }

    let overall = rules::overall_score(
        payload.technical_score,
        payload.communication_score,
        payload.cultural_fit_score,
    );

    let result = sqlx::query(
        "INSERT INTO evaluations (interview_id, recruiter_id, technical_score, \
         communication_score, cultural_fit_score, overall_score, feedback, recommendation) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(payload.interview_id)
    .bind(identity.id)
    .bind(payload.technical_score)
    .bind(payload.communication_score)
    .bind(payload.cultural_fit_score)
    .bind(overall)
    .bind(&payload.feedback)
    .bind(&payload.recommendation)
    .execute(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(EvaluationCreatedResponse {
            message: "Evaluation submitted successfully".to_string(),
            evaluation_id: result.last_insert_rowid(),
            overall_score: overall,
        }),
    ))
}
