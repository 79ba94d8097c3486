use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::authz::{gate, policy, Identity};
use crate::errors::AppResult;
use crate::models::company::Company;

#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "List companies", body = [Company]),
        (status = 401, description = "Missing identity headers"),
    )
)]
pub async fn list_companies(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<Vec<Company>>> {
    gate::require_role(&identity, policy::COMPANIES_LIST)?;

    let companies = sqlx::query_as::<_, Company>(
        "SELECT company_id, company_name, industry, location, website, description, created_at \
         FROM companies ORDER BY company_name",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(companies))
}
