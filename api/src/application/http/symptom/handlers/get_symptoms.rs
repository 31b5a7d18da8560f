use axum::extract::{Query, State};
use healthchat_core::domain::symptom::{
    entities::Symptom, ports::SymptomCheckService, value_objects::GetSymptomsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSymptomsQuery {
    /// Case-insensitive substring of the symptom label.
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSymptomsResponse {
    pub data: Vec<Symptom>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "symptom",
    summary = "List symptoms",
    description = "Returns the symptom catalog in display order, optionally filtered by a search term.",
    params(GetSymptomsQuery),
    responses(
        (status = 200, body = GetSymptomsResponse)
    ),
)]
pub async fn get_symptoms(
    Query(query): Query<GetSymptomsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetSymptomsResponse>, ApiError> {
    let symptoms = state
        .service
        .list_symptoms(GetSymptomsFilter {
            search: query.search,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSymptomsResponse { data: symptoms }))
}
