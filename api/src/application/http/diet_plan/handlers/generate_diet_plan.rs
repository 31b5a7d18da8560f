use axum::extract::State;
use healthchat_core::domain::diet_plan::{
    entities::DietPlan, ports::DietPlanService, value_objects::GenerateDietPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    diet_plan::validators::GenerateDietPlanValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateDietPlanResponse {
    pub data: DietPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "diet-plan",
    summary = "Generate diet plan",
    description = "Builds a diet plan from a dietary preference, a health condition and an age group.",
    request_body = GenerateDietPlanValidator,
    responses(
        (status = 200, body = GenerateDietPlanResponse),
        (status = 400, body = ApiErrorResponse, description = "Unknown option value"),
        (status = 422, body = ApiErrorResponse)
    ),
)]
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateDietPlanValidator>,
) -> Result<Response<GenerateDietPlanResponse>, ApiError> {
    let plan = state
        .service
        .generate_diet_plan(GenerateDietPlanInput {
            preference: payload.preference,
            health_condition: payload.health_condition,
            age_group: payload.age_group,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateDietPlanResponse { data: plan }))
}
