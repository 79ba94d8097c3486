mod common;

use anyhow::Result;
use axum::http::StatusCode;

#[tokio::test]
async fn applicants_cannot_read_any_report() -> Result<()> {
    let server = common::setup().await?;

    for path in [
        "/api/reports/multiple-applications",
        "/api/reports/conversion-rates",
        "/api/reports/pending-offers",
    ] {
        let (status, body) =
            common::send(&server.app, "GET", path, Some(("Applicant", "6")), None).await?;
        assert_eq!(status, StatusCode::FORBIDDEN, "path {path}");
        assert_eq!(body["error"], "forbidden", "path {path}");
    }
    Ok(())
}

#[tokio::test]
async fn conversion_rates_are_restricted_to_hr_and_admin() -> Result<()> {
    let server = common::setup().await?;

    let (status, _) = common::send(
        &server.app,
        "GET",
        "/api/reports/conversion-rates",
        Some(("Recruiter", "2")),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/reports/conversion-rates",
        Some(("HRManager", "4")),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
    Ok(())
}

#[tokio::test]
async fn recruiters_can_read_staff_reports() -> Result<()> {
    let server = common::setup().await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/reports/multiple-applications",
        Some(("Recruiter", "2")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    // Nobody in the fixture has crossed the five-application threshold.
    assert_eq!(body.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn multiple_applications_report_counts_past_the_threshold() -> Result<()> {
    let server = common::setup().await?;

    // Push applicant 6 past five applications.
    for job_id in 2..=4 {
        sqlx::query("INSERT INTO applications (job_id, applicant_id) VALUES (?, 6)")
            .bind(job_id)
            .execute(&server.pool)
            .await?;
    }
    for title in ["A", "B", "C"] {
        let job_id: i64 = sqlx::query(
            "INSERT INTO jobs (company_id, job_title, job_category, salary_min, salary_max) \
             VALUES (1, ?, 'Engineering', 90000, 120000)",
        )
        .bind(title)
        .execute(&server.pool)
        .await?
        .last_insert_rowid();
        sqlx::query("INSERT INTO applications (job_id, applicant_id) VALUES (?, 6)")
            .bind(job_id)
            .execute(&server.pool)
            .await?;
    }

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/reports/multiple-applications",
        Some(("Admin", "1")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["applicant_id"], 6);
    assert_eq!(rows[0]["total_applications"], 7);
    Ok(())
}

#[tokio::test]
async fn pending_offers_report_skips_recent_offers() -> Result<()> {
    let server = common::setup().await?;

    sqlx::query(
        "INSERT INTO offers (application_id, job_id, applicant_id, salary_offered, recruiter_id) \
         VALUES (10, 3, 7, 50000, 2)",
    )
    .execute(&server.pool)
    .await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/reports/pending-offers",
        Some(("HRManager", "4")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    // The offer was just created; it is not stale yet.
    assert_eq!(body.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn pending_offers_report_surfaces_stale_offers() -> Result<()> {
    let server = common::setup().await?;

    sqlx::query(
        "INSERT INTO offers (application_id, job_id, applicant_id, salary_offered, recruiter_id, \
         offer_date) VALUES (10, 3, 7, 50000, 2, datetime('now', '-30 days'))",
    )
    .execute(&server.pool)
    .await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/reports/pending-offers",
        Some(("Recruiter", "2")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["applicant_name"], "Michael Brown");
    assert!(rows[0]["days_pending"].as_i64().unwrap_or_default() >= 29);
    Ok(())
}
