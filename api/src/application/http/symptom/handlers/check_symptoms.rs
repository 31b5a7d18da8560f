use axum::extract::State;
use healthchat_core::domain::symptom::{
    ports::SymptomCheckService, report::SymptomReport, value_objects::CheckSymptomsInput,
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
    symptom::validators::CheckSymptomsValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CheckSymptomsResponse {
    pub data: SymptomReport,
}

#[utoipa::path(
    post,
    path = "/check",
    tag = "symptom",
    summary = "Check symptoms",
    description = "Ranks the conditions most associated with the given symptoms and collects diet advice for them.",
    request_body = CheckSymptomsValidator,
    responses(
        (status = 200, body = CheckSymptomsResponse),
        (status = 422, body = ApiErrorResponse)
    ),
)]
pub async fn check_symptoms(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckSymptomsValidator>,
) -> Result<Response<CheckSymptomsResponse>, ApiError> {
    let report = state
        .service
        .check_symptoms(CheckSymptomsInput {
            symptoms: payload.symptoms,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CheckSymptomsResponse { data: report }))
}
