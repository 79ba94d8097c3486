use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use sqlx::QueryBuilder;
use utoipa::ToSchema;

use crate::app::AppState;
use crate::authz::{gate, policy, Identity};
use crate::errors::{AppError, AppResult};
use crate::models::job::{JobCreateRequest, JobFilter, JobStatus, JobSummary};
use crate::rules;

const MAX_SEARCH_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 100;
const DEFAULT_EMPLOYMENT_TYPE: &str = "Full-time";

#[derive(Debug, Serialize, ToSchema)]
pub struct JobCreatedResponse {
    pub message: String,
    pub job_id: i64,
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "Jobs",
    params(
        ("search" = Option<String>, Query, description = "Match against title or description"),
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("status" = Option<String>, Query, description = "Active or Closed, defaults to Active"),
    ),
    responses(
        (status = 200, description = "List jobs", body = [JobSummary]),
        (status = 400, description = "Invalid filter"),
    )
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    identity: Identity,
    Query(filter): Query<JobFilter>,
) -> AppResult<Json<Vec<JobSummary>>> {
    gate::require_role(&identity, policy::JOBS_LIST)?;

    if filter.search.as_ref().is_some_and(|s| s.len() > MAX_SEARCH_LEN) {
        return Err(AppError::validation("search query too long"));
    }
    if filter.category.as_ref().is_some_and(|c| c.len() > MAX_CATEGORY_LEN) {
        return Err(AppError::validation("category too long"));
    }
    let status = match filter.status.as_deref() {
        Some(raw) => JobStatus::parse(raw)
            .ok_or_else(|| AppError::validation("status must be Active or Closed"))?,
        None => JobStatus::Active,
    };

    let mut query = QueryBuilder::new(
        "SELECT j.job_id, j.company_id, c.company_name, j.job_title, j.job_category, \
         j.job_description, j.location, j.salary_min, j.salary_max, j.employment_type, \
         j.experience_required, j.posted_date, j.status \
         FROM jobs j INNER JOIN companies c ON j.company_id = c.company_id WHERE 1=1",
    );

    if let Some(search) = filter.search.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{search}%");
        query.push(" AND (j.job_title LIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR j.job_description LIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    if let Some(category) = filter.category.as_ref().filter(|c| !c.is_empty()) {
        query.push(" AND j.job_category = ");
        query.push_bind(category.clone());
    }

    query.push(" AND j.status = ");
    query.push_bind(status.as_str());
    query.push(" ORDER BY j.posted_date DESC");

    let jobs = query
        .build_query_as::<JobSummary>()
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(jobs))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "Jobs",
    request_body = JobCreateRequest,
    responses(
        (status = 201, description = "Job created", body = JobCreatedResponse),
        (status = 400, description = "Salary below floor or invalid range"),
        (status = 403, description = "Caller is not Admin or Recruiter"),
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<JobCreateRequest>,
) -> AppResult<(StatusCode, Json<JobCreatedResponse>)> {
    gate::require_role(&identity, policy::JOBS_CREATE)?;

    if !rules::salary_range_valid(payload.salary_min, payload.salary_max) {
        return Err(AppError::validation("salary_min must not exceed salary_max"));
    }
    let floor = state.config.minimum_wage;
    if !rules::meets_minimum_wage(payload.salary_min, floor) {
        return Err(AppError::business_rule(format!(
            "salary_min must be at least the minimum wage of {floor}"
        )));
    }

    let company_exists: i64 =
        sqlx::query_scalar("SELECT COUNT(1) FROM companies WHERE company_id = ?")
            .bind(payload.company_id)
            .fetch_one(&state.pool)
            .await?;
    if company_exists == 0 {
        return Err(AppError::not_found("company not found"));
    }

    let employment_type = payload
        .employment_type
        .clone()
        .unwrap_or_else(|| DEFAULT_EMPLOYMENT_TYPE.to_string());

    let result = sqlx::query(
        "INSERT INTO jobs (company_id, job_title, job_category, job_description, location, \
         salary_min, salary_max, employment_type, experience_required, recruiter_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(payload.company_id)
    .bind(&payload.job_title)
    .bind(&payload.job_category)
    .bind(&payload.job_description)
    .bind(&payload.location)
    .bind(payload.salary_min)
    .bind(payload.salary_max)
    .bind(&employment_type)
    .bind(&payload.experience_required)
    .bind(identity.id)
    .execute(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(JobCreatedResponse {
            message: "Job created successfully".to_string(),
            job_id: result.last_insert_rowid(),
        }),
    ))
}
