use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::app::AppState;
use crate::authz::{gate, policy, Identity, Role};
use crate::errors::AppResult;
use crate::models::offer::{OfferCreateRequest, OfferIssuedResponse, OfferSummary};
use crate::workflows;

#[utoipa::path(
    post,
    path = "/api/offers",
    tag = "Offers",
    request_body = OfferCreateRequest,
    responses(
        (status = 201, description = "Offer issued and application transitioned", body = OfferIssuedResponse),
        (status = 400, description = "Salary below the minimum wage floor"),
        (status = 404, description = "Application not found"),
        (status = 500, description = "Transaction failed and was rolled back"),
    )
)]
pub async fn create_offer(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<OfferCreateRequest>,
) -> AppResult<(StatusCode, Json<OfferIssuedResponse>)> {
    gate::require_role(&identity, policy::OFFERS_CREATE)?;

    let offer_id = workflows::offers::issue_offer(
        &state.pool,
        &identity,
        &payload,
        state.config.minimum_wage,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(OfferIssuedResponse {
            message: "Offer issued successfully".to_string(),
            offer_id,
            transaction: "committed",
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/offers",
    tag = "Offers",
    responses((status = 200, description = "Offers visible to the caller", body = [OfferSummary]))
)]
pub async fn list_offers(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<Vec<OfferSummary>>> {
    gate::require_role(&identity, policy::OFFERS_LIST)?;

    let base = "SELECT o.offer_id, o.application_id, o.job_id, o.applicant_id, o.salary_offered, \
         o.benefits, o.start_date, o.offer_date, o.expiry_date, o.status, o.recruiter_id, \
         a.first_name || ' ' || a.last_name AS applicant_name, j.job_title, c.company_name \
         FROM offers o \
         INNER JOIN applicants a ON o.applicant_id = a.applicant_id \
         INNER JOIN jobs j ON o.job_id = j.job_id \
         INNER JOIN companies c ON j.company_id = c.company_id";

    let offers = if identity.role == Role::Applicant {
        sqlx::query_as::<_, OfferSummary>(&format!(
            "{base} WHERE o.applicant_id = ? ORDER BY o.offer_date DESC"
        ))
        .bind(identity.id)
        .fetch_all(&state.pool)
        .await?
    } else {
        sqlx::query_as::<_, OfferSummary>(&format!("{base} ORDER BY o.offer_date DESC"))
            .fetch_all(&state.pool)
            .await?
    };

    Ok(Json(offers))
}
