use axum::extract::State;
use healthchat_core::domain::wellness::{entities::Question, ports::WellnessService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetQuestionsResponse {
    pub data: Vec<Question>,
}

#[utoipa::path(
    get,
    path = "/questions",
    tag = "wellness",
    summary = "Get stress questionnaire",
    responses(
        (status = 200, body = GetQuestionsResponse)
    ),
)]
pub async fn get_questions(
    State(state): State<AppState>,
) -> Result<Response<GetQuestionsResponse>, ApiError> {
    let questions = state
        .service
        .get_questionnaire()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetQuestionsResponse { data: questions }))
}
