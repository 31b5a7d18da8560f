use axum::extract::State;
use healthchat_core::domain::wellness::{
    entities::StressAssessment, ports::WellnessService, value_objects::AssessStressInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    wellness::validators::AssessStressValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AssessStressResponse {
    pub data: StressAssessment,
}

#[utoipa::path(
    post,
    path = "/assessments",
    tag = "wellness",
    summary = "Assess stress level",
    description = "Scores a completed questionnaire. Every question must be answered with one of its options.",
    request_body = AssessStressValidator,
    responses(
        (status = 200, body = AssessStressResponse),
        (status = 400, body = ApiErrorResponse, description = "Missing or invalid answer"),
        (status = 422, body = ApiErrorResponse)
    ),
)]
pub async fn assess_stress(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AssessStressValidator>,
) -> Result<Response<AssessStressResponse>, ApiError> {
    let assessment = state
        .service
        .assess_stress(AssessStressInput {
            answers: payload.answers,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AssessStressResponse { data: assessment }))
}
