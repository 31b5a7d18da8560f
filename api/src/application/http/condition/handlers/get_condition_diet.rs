use axum::extract::{Path, State};
use healthchat_core::domain::symptom::{
    ports::SymptomCheckService,
    value_objects::{ConditionAdvice, GetConditionAdviceInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConditionDietResponse {
    pub data: ConditionAdvice,
}

#[utoipa::path(
    get,
    path = "/{condition}/diet",
    tag = "condition",
    summary = "Get diet advice for a condition",
    description = "Returns the diet advice of one condition. Conditions without advice get the generic recommendation.",
    params(
        ("condition" = String, Path, description = "Condition name"),
    ),
    responses(
        (status = 200, body = GetConditionDietResponse),
        (status = 404, body = ApiErrorResponse, description = "Unknown condition")
    ),
)]
pub async fn get_condition_diet(
    Path(condition): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetConditionDietResponse>, ApiError> {
    let advice = state
        .service
        .get_condition_advice(GetConditionAdviceInput { condition })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetConditionDietResponse { data: advice }))
}
