use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Active,
    Closed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Closed => "Closed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Active" => Some(JobStatus::Active),
            "Closed" => Some(JobStatus::Closed),
            _ => None,
        }
    }
}

/// Job listing joined with its company name.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct JobSummary {
    pub job_id: i64,
    pub company_id: i64,
    pub company_name: String,
    pub job_title: String,
    pub job_category: String,
    pub job_description: Option<String>,
    pub location: Option<String>,
    pub salary_min: f64,
    pub salary_max: f64,
    pub employment_type: String,
    pub experience_required: Option<String>,
    pub posted_date: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JobCreateRequest {
    #[schema(example = 1)]
    pub company_id: i64,
    #[schema(example = "Senior Software Engineer")]
    pub job_title: String,
    #[schema(example = "Engineering")]
    pub job_category: String,
    pub job_description: Option<String>,
    #[schema(example = "San Francisco, CA")]
    pub location: Option<String>,
    #[schema(example = 120000.0)]
    pub salary_min: f64,
    #[schema(example = 180000.0)]
    pub salary_max: f64,
    #[schema(example = "Full-time")]
    pub employment_type: Option<String>,
    #[schema(example = "5+ years")]
    pub experience_required: Option<String>,
}

/// Query-string filters for the job listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct JobFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}
