use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::routes::{
    applicants, applications, companies, evaluations, health, interviews, jobs, offers, reports,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

pub async fn create_app(pool: SqlitePool) -> Result<Router, AppError> {
    let config = AppConfig::from_env()?;
    Ok(create_app_with(pool, config))
}

pub fn create_app_with(pool: SqlitePool, config: AppConfig) -> Router {
    let state = AppState::new(pool, config);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let report_routes = Router::new()
        .route("/multiple-applications", get(reports::multiple_applications))
        .route("/conversion-rates", get(reports::conversion_rates))
        .route("/pending-offers", get(reports::pending_offers));

    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/companies", get(companies::list_companies))
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/applicants/:id", get(applicants::get_applicant))
        .route(
            "/applicants/:id/applications",
            get(applicants::list_applicant_applications),
        )
        .route(
            "/applications",
            get(applications::list_applications).post(applications::create_application),
        )
        .route(
            "/interviews",
            get(interviews::list_interviews).post(interviews::create_interview),
        )
        .route("/evaluations", post(evaluations::create_evaluation))
        .route("/offers", get(offers::list_offers).post(offers::create_offer))
        .nest("/reports", report_routes);

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
