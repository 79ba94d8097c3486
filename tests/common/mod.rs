#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tempfile::{tempdir, TempDir};
use tower::util::ServiceExt; // for `oneshot`

use hireconnect::{create_app_with, AppConfig};

const BODY_LIMIT: usize = 10_485_760;

pub struct TestServer {
    pub app: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn setup() -> Result<TestServer> {
    setup_with_floor(15000.0).await
}

pub async fn setup_with_floor(minimum_wage: f64) -> Result<TestServer> {
    let dir = tempdir().context("failed to create tempdir")?;
    let db_path = dir.path().join("test.db");
    let opts = SqliteConnectOptions::new()
        .filename(db_path.as_path())
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;

    let migrator = sqlx::migrate::Migrator::new(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations"),
    )
    .await?;
    migrator.run(&pool).await?;

    seed(&pool).await?;

    let app = create_app_with(pool.clone(), AppConfig { minimum_wage });

    Ok(TestServer {
        app,
        pool,
        _dir: dir,
    })
}

/// Base fixture: two companies, staff identities 1-5, applicants 6-7,
/// jobs 1-4 (job 4 closed) and applications 5 (job 1 / applicant 6) and
/// 10 (job 3 / applicant 7).
async fn seed(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "INSERT INTO companies (company_id, company_name, industry) VALUES \
         (1, 'TechCorp Solutions', 'Technology'), \
         (2, 'Global Finance Inc', 'Finance')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO applicants (applicant_id, first_name, last_name, email, location, role) VALUES \
         (1, 'John', 'Admin', 'admin@hireconnect.com', 'San Francisco, CA', 'Admin'), \
         (2, 'Sarah', 'Wilson', 'sarah.recruiter@hireconnect.com', 'New York, NY', 'Recruiter'), \
         (3, 'Mike', 'Johnson', 'mike.recruiter@hireconnect.com', 'Boston, MA', 'Recruiter'), \
         (4, 'Lisa', 'Hart', 'lisa.hr@hireconnect.com', 'Austin, TX', 'HRManager'), \
         (5, 'David', 'Reese', 'david.recruiter@hireconnect.com', 'Seattle, WA', 'Recruiter'), \
         (6, 'Emily', 'Smith', 'emily.smith@email.com', 'San Francisco, CA', 'Applicant'), \
         (7, 'Michael', 'Brown', 'michael.brown@email.com', 'New York, NY', 'Applicant')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO jobs (job_id, company_id, job_title, job_category, salary_min, salary_max, \
         recruiter_id, status) VALUES \
         (1, 1, 'Senior Software Engineer', 'Engineering', 120000, 180000, 2, 'Active'), \
         (2, 1, 'Frontend Developer', 'Engineering', 90000, 130000, 2, 'Active'), \
         (3, 2, 'Financial Analyst', 'Finance', 80000, 120000, 3, 'Active'), \
         (4, 1, 'DevOps Engineer', 'Engineering', 115000, 165000, 2, 'Closed')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO applications (application_id, job_id, applicant_id) VALUES \
         (5, 1, 6), \
         (10, 3, 7)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    identity: Option<(&str, &str)>,
    payload: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some((role, id)) = identity {
        builder = builder.header("x-user-role", role).header("x-user-id", id);
    }

    let request = match payload {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response: Response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), BODY_LIMIT).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .with_context(|| format!("non-json body: {}", String::from_utf8_lossy(&bytes)))?
    };

    Ok((status, value))
}

pub async fn count(pool: &SqlitePool, sql: &str) -> Result<i64> {
    Ok(sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await?)
}

pub async fn application_status(pool: &SqlitePool, application_id: i64) -> Result<String> {
    Ok(
        sqlx::query_scalar::<_, String>(
            "SELECT status FROM applications WHERE application_id = ?",
        )
        .bind(application_id)
        .fetch_one(pool)
        .await?,
    )
}
