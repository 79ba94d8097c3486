use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct InterviewSummary {
    pub interview_id: i64,
    pub application_id: i64,
    pub recruiter_id: i64,
    pub interview_date: NaiveDateTime,
    pub interview_type: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub applicant_name: String,
    pub recruiter_name: String,
    pub job_title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InterviewCreateRequest {
    #[schema(example = 10)]
    pub application_id: i64,
    #[schema(example = "2026-09-15T10:00:00")]
    pub interview_date: NaiveDateTime,
    #[schema(example = "Phone")]
    pub interview_type: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InterviewCreatedResponse {
    pub message: String,
    pub interview_id: i64,
}
