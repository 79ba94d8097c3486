use axum::extract::State;
use axum::Json;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::app::AppState;
use crate::authz::{gate, policy, Identity};
use crate::errors::AppResult;
use crate::models::offer::OfferStatus;

const PENDING_OFFER_AGE_DAYS: i64 = 14;
const MULTIPLE_APPLICATIONS_THRESHOLD: i64 = 5;

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct MultipleApplicationsRow {
    pub applicant_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub total_applications: i64,
    pub applied_jobs: Option<String>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct ConversionRateRow {
    pub recruiter_id: i64,
    pub recruiter_name: String,
    pub total_interviews: i64,
    pub total_offers: i64,
    pub conversion_rate_percentage: Option<f64>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PendingOfferRow {
    pub offer_id: i64,
    pub applicant_name: String,
    pub job_title: String,
    pub company_name: String,
    pub salary_offered: f64,
    pub offer_date: NaiveDateTime,
    pub days_pending: i64,
    pub expiry_date: Option<NaiveDateTime>,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/reports/multiple-applications",
    tag = "Reports",
    responses((status = 200, description = "Applicants with more than five applications", body = [MultipleApplicationsRow]))
)]
pub async fn multiple_applications(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<Vec<MultipleApplicationsRow>>> {
    gate::require_role(&identity, policy::REPORTS_STAFF)?;

    let rows = sqlx::query_as::<_, MultipleApplicationsRow>(
        "SELECT a.applicant_id, \
         a.first_name || ' ' || a.last_name AS applicant_name, \
         a.email, \
         COUNT(app.application_id) AS total_applications, \
         GROUP_CONCAT(j.job_title, ', ') AS applied_jobs \
         FROM applicants a \
         INNER JOIN applications app ON a.applicant_id = app.applicant_id \
         INNER JOIN jobs j ON app.job_id = j.job_id \
         GROUP BY a.applicant_id, a.first_name, a.last_name, a.email \
         HAVING COUNT(app.application_id) > ? \
         ORDER BY total_applications DESC",
    )
    .bind(MULTIPLE_APPLICATIONS_THRESHOLD)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/reports/conversion-rates",
    tag = "Reports",
    responses((status = 200, description = "Interview-to-offer conversion per recruiter", body = [ConversionRateRow]))
)]
pub async fn conversion_rates(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<Vec<ConversionRateRow>>> {
    gate::require_role(&identity, policy::REPORTS_HR)?;

    let rows = sqlx::query_as::<_, ConversionRateRow>(
        "SELECT r.applicant_id AS recruiter_id, \
         r.first_name || ' ' || r.last_name AS recruiter_name, \
         COUNT(DISTINCT i.interview_id) AS total_interviews, \
         COUNT(DISTINCT o.offer_id) AS total_offers, \
         ROUND(COUNT(DISTINCT o.offer_id) * 100.0 / NULLIF(COUNT(DISTINCT i.interview_id), 0), 2) \
           AS conversion_rate_percentage \
         FROM applicants r \
         LEFT JOIN interviews i ON r.applicant_id = i.recruiter_id \
         LEFT JOIN applications app ON i.application_id = app.application_id \
         LEFT JOIN offers o ON app.application_id = o.application_id \
         WHERE r.role = 'Recruiter' \
         GROUP BY r.applicant_id, r.first_name, r.last_name \
         ORDER BY conversion_rate_percentage DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/reports/pending-offers",
    tag = "Reports",
    responses((status = 200, description = "Offers pending acceptance for more than 14 days", body = [PendingOfferRow]))
)]
pub async fn pending_offers(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<Vec<PendingOfferRow>>> {
    gate::require_role(&identity, policy::REPORTS_STAFF)?;

    let rows = sqlx::query_as::<_, PendingOfferRow>(
        "SELECT o.offer_id, \
         a.first_name || ' ' || a.last_name AS applicant_name, \
         j.job_title, c.company_name, o.salary_offered, o.offer_date, \
         CAST(julianday('now') - julianday(o.offer_date) AS INTEGER) AS days_pending, \
         o.expiry_date, o.status \
         FROM offers o \
         INNER JOIN applicants a ON o.applicant_id = a.applicant_id \
         INNER JOIN jobs j ON o.job_id = j.job_id \
         INNER JOIN companies c ON j.company_id = c.company_id \
         WHERE o.status = ? \
           AND julianday('now') - julianday(o.offer_date) > ? \
         ORDER BY days_pending DESC",
    )
    .bind(OfferStatus::Pending.as_str())
    .bind(PENDING_OFFER_AGE_DAYS as f64)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(rows))
}
