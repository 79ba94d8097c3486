use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lifecycle of an application. `OfferExtended` is reachable only through
/// the offer issuance workflow; no handler sets it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Submitted,
    OfferExtended,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::OfferExtended => "Offer Extended",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Submitted" => Some(ApplicationStatus::Submitted),
            "Offer Extended" => Some(ApplicationStatus::OfferExtended),
            "Rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    pub fn can_transition(self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (ApplicationStatus::Submitted, ApplicationStatus::OfferExtended)
                | (ApplicationStatus::Submitted, ApplicationStatus::Rejected)
        )
    }
}

/// Application joined with job, company and applicant display fields.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ApplicationSummary {
    pub application_id: i64,
    pub job_id: i64,
    pub applicant_id: i64,
    pub cover_letter: Option<String>,
    pub application_date: NaiveDateTime,
    pub status: String,
    pub job_title: String,
    pub company_name: String,
    pub applicant_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApplicationCreateRequest {
    #[schema(example = 3)]
    pub job_id: i64,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApplicationCreatedResponse {
    pub message: String,
    pub application_id: i64,
}
