mod common;

use anyhow::Result;
use axum::http::StatusCode;
use hireconnect::authz::visibility::LOCATION_SENTINEL;

#[tokio::test]
async fn cross_applicant_read_masks_location() -> Result<()> {
    let server = common::setup().await?;

    // Applicant 6 reads applicant 7's profile.
    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/applicants/7",
        Some(("Applicant", "6")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], LOCATION_SENTINEL);
    assert_eq!(body["first_name"], "Michael");
    assert_eq!(body["email"], "michael.brown@email.com");
    Ok(())
}

#[tokio::test]
async fn masking_never_touches_the_stored_value() -> Result<()> {
    let server = common::setup().await?;

    let (status, _) = common::send(
        &server.app,
        "GET",
        "/api/applicants/7",
        Some(("Applicant", "6")),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let stored: Option<String> =
        sqlx::query_scalar("SELECT location FROM applicants WHERE applicant_id = 7")
            .fetch_one(&server.pool)
            .await?;
    assert_eq!(stored.as_deref(), Some("New York, NY"));
    Ok(())
}

#[tokio::test]
async fn applicant_sees_own_location_unmasked() -> Result<()> {
    let server = common::setup().await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/applicants/7",
        Some(("Applicant", "7")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "New York, NY");
    Ok(())
}

#[tokio::test]
async fn staff_see_location_unmasked() -> Result<()> {
    let server = common::setup().await?;

    for (role, id) in [("Recruiter", "2"), ("HRManager", "4"), ("Admin", "1")] {
        let (status, body) = common::send(
            &server.app,
            "GET",
            "/api/applicants/7",
            Some((role, id)),
            None,
        )
        .await?;

        assert_eq!(status, StatusCode::OK, "role {role}");
        assert_eq!(body["location"], "New York, NY", "role {role}");
    }
    Ok(())
}

#[tokio::test]
async fn unknown_applicant_is_not_found() -> Result<()> {
    let server = common::setup().await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/applicants/999",
        Some(("Admin", "1")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    Ok(())
}

#[tokio::test]
async fn applicant_cannot_list_someone_elses_applications() -> Result<()> {
    let server = common::setup().await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/applicants/7/applications",
        Some(("Applicant", "6")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
    Ok(())
}

#[tokio::test]
async fn applicant_lists_own_applications() -> Result<()> {
    let server = common::setup().await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/applicants/7/applications",
        Some(("Applicant", "7")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["application_id"], 10);
    assert_eq!(rows[0]["job_id"], 3);
    Ok(())
}

#[tokio::test]
async fn staff_can_list_any_applicants_applications() -> Result<()> {
    let server = common::setup().await?;

    let (status, body) = common::send(
        &server.app,
        "GET",
        "/api/applicants/6/applications",
        Some(("HRManager", "4")),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["application_id"], 5);
    Ok(())
}
