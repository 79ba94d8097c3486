use utoipa::OpenApi;

use crate::models;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health,
        routes::companies::list_companies,
        routes::jobs::list_jobs,
        routes::jobs::create_job,
        routes::applicants::get_applicant,
        routes::applicants::list_applicant_applications,
        routes::applications::list_applications,
        routes::applications::create_application,
        routes::interviews::list_interviews,
        routes::interviews::create_interview,
        routes::evaluations::create_evaluation,
        routes::offers::list_offers,
        routes::offers::create_offer,
        routes::reports::multiple_applications,
        routes::reports::conversion_rates,
        routes::reports::pending_offers,
    ),
    components(
        schemas(
            models::company::Company,
            models::applicant::ApplicantProfile,
            models::job::JobSummary,
            models::job::JobCreateRequest,
            models::application::ApplicationSummary,
            models::application::ApplicationCreateRequest,
            models::application::ApplicationCreatedResponse,
            models::interview::InterviewSummary,
            models::interview::InterviewCreateRequest,
            models::interview::InterviewCreatedResponse,
            models::evaluation::EvaluationCreateRequest,
            models::evaluation::EvaluationCreatedResponse,
            models::offer::OfferSummary,
            models::offer::OfferCreateRequest,
            models::offer::OfferIssuedResponse,
            routes::health::HealthResponse,
            routes::jobs::JobCreatedResponse,
            routes::reports::MultipleApplicationsRow,
            routes::reports::ConversionRateRow,
            routes::reports::PendingOfferRow,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Companies", description = "Company directory"),
        (name = "Jobs", description = "Job postings and search"),
        (name = "Applicants", description = "Applicant profiles"),
        (name = "Applications", description = "Job applications"),
        (name = "Interviews", description = "Interview scheduling"),
        (name = "Evaluations", description = "Interview evaluations"),
        (name = "Offers", description = "Offer issuance"),
        (name = "Reports", description = "Staff reporting"),
    )
)]
pub struct ApiDoc;
