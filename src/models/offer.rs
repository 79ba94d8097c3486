use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Offer lifecycle; only `Pending` is written by this service (at creation),
/// the remaining states are reached by later acceptance flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
    Expired,
}

impl OfferStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OfferStatus::Pending => "Pending",
            OfferStatus::Accepted => "Accepted",
            OfferStatus::Rejected => "Rejected",
            OfferStatus::Expired => "Expired",
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OfferSummary {
    pub offer_id: i64,
    pub application_id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub salary_offered: f64,
    pub benefits: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub offer_date: NaiveDateTime,
    pub expiry_date: Option<NaiveDateTime>,
    pub status: String,
    pub recruiter_id: Option<i64>,
    pub applicant_name: String,
    pub job_title: String,
    pub company_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OfferCreateRequest {
    #[schema(example = 10)]
    pub application_id: i64,
    #[schema(example = 50000.0)]
    pub salary_offered: f64,
    #[schema(example = "Health insurance, 401k")]
    pub benefits: Option<String>,
    #[schema(example = "2026-10-01")]
    pub start_date: Option<NaiveDate>,
    #[schema(example = "2026-09-30T23:59:59")]
    pub expiry_date: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OfferIssuedResponse {
    pub message: String,
    pub offer_id: i64,
    /// Always `"committed"` on the success path; failures report
    /// `"rolled back"` through the error body instead.
    pub transaction: &'static str,
}
