use axum::{Extension, extract::State};
use healthchat_core::domain::symptom::{
    ports::SymptomCheckService, report::SymptomReport, value_objects::SelectionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CheckSelectionResponse {
    pub data: SymptomReport,
}

#[utoipa::path(
    post,
    path = "/check",
    tag = "selection",
    summary = "Check current selection",
    description = "Scores the symptoms selected on the calling device.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    ),
    responses(
        (status = 200, body = CheckSelectionResponse)
    ),
)]
pub async fn check_selection(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<CheckSelectionResponse>, ApiError> {
    let report = state
        .service
        .check_selection(SelectionInput {
            device_id: device.device_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CheckSelectionResponse { data: report }))
}
