use axum::extract::State;
use healthchat_core::domain::symptom::{entities::Condition, ports::SymptomCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConditionsResponse {
    pub data: Vec<Condition>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "condition",
    summary = "List conditions",
    description = "Returns every condition known to the knowledge base.",
    responses(
        (status = 200, body = GetConditionsResponse)
    ),
)]
pub async fn get_conditions(
    State(state): State<AppState>,
) -> Result<Response<GetConditionsResponse>, ApiError> {
    let conditions = state
        .service
        .list_conditions()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetConditionsResponse { data: conditions }))
}
