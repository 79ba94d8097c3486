use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EvaluationCreateRequest {
    #[schema(example = 1)]
    pub interview_id: i64,
    #[schema(example = 8, minimum = 1, maximum = 10)]
    pub technical_score: i64,
    #[schema(example = 7, minimum = 1, maximum = 10)]
    pub communication_score: i64,
    #[schema(example = 9, minimum = 1, maximum = 10)]
    pub cultural_fit_score: i64,
    pub feedback: Option<String>,
    #[schema(example = "Hire")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EvaluationCreatedResponse {
    pub message: String,
    pub evaluation_id: i64,
    pub overall_score: f64,
}
