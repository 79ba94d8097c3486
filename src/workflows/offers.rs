use sqlx::{FromRow, SqlitePool};

use crate::authz::Identity;
use crate::errors::{AppError, AppResult};
use crate::models::application::ApplicationStatus;
use crate::models::offer::OfferCreateRequest;
use crate::rules;

#[derive(Debug, FromRow)]
struct ApplicationRef {
    job_id: i64,
    applicant_id: i64,
    status: String,
}

/// Issue an offer for an application and transition the application to
/// `Offer Extended`, atomically.
///
/// The wage-floor rule is checked before the transaction is opened, so a
/// violation writes nothing. All statements after `begin` run on one
/// transaction handle; any failure drops the handle, which rolls the
/// transaction back, so callers can never observe an offer row without the
/// matching status transition or vice versa.
pub async fn issue_offer(
    pool: &SqlitePool,
    actor: &Identity,
    request: &OfferCreateRequest,
    minimum_wage: f64,
) -> AppResult<i64> {
    if !rules::meets_minimum_wage(request.salary_offered, minimum_wage) {
        return Err(AppError::business_rule(format!(
            "salary package invalid, minimum wage is {minimum_wage}"
        )));
    }

    let mut tx = pool.begin().await?;

    let application = sqlx::query_as::<_, ApplicationRef>(
        "SELECT job_id, applicant_id, status FROM applications WHERE application_id = ?",
    )
    .bind(request.application_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(tx_failure)?
    .ok_or_else(|| AppError::not_found("application not found"))?;

    let current = ApplicationStatus::parse(&application.status).ok_or_else(|| {
        AppError::internal(format!(
            "application {} has unknown status '{}'",
            request.application_id, application.status
        ))
    })?;

    // Re-issuing on an already-extended application is tolerated (there is
    // no idempotency key, so a caller retry may legitimately land here); a
    // rejected application can no longer receive an offer.
    if current != ApplicationStatus::OfferExtended
        && !current.can_transition(ApplicationStatus::OfferExtended)
    {
        return Err(AppError::business_rule(format!(
            "application in status '{}' cannot receive an offer",
            application.status
        )));
    }

    let inserted = sqlx::query(
        "INSERT INTO offers (application_id, job_id, applicant_id, salary_offered, benefits, \
         start_date, expiry_date, recruiter_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(request.application_id)
    .bind(application.job_id)
    .bind(application.applicant_id)
    .bind(request.salary_offered)
    .bind(&request.benefits)
    .bind(request.start_date)
    .bind(request.expiry_date)
    .bind(actor.id)
    .execute(&mut *tx)
    .await
    .map_err(tx_failure)?;

    let offer_id = inserted.last_insert_rowid();

    sqlx::query("UPDATE applications SET status = ? WHERE application_id = ?")
        .bind(ApplicationStatus::OfferExtended.as_str())
        .bind(request.application_id)
        .execute(&mut *tx)
        .await
        .map_err(tx_failure)?;

    tx.commit().await.map_err(tx_failure)?;

    tracing::info!(
        offer_id,
        application_id = request.application_id,
        recruiter_id = actor.id,
        "offer issued"
    );

    Ok(offer_id)
}

fn tx_failure(err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "offer transaction failed, rolling back");
    AppError::transaction_failure(err.to_string())
}
