use axum::{Extension, extract::State};
use healthchat_core::domain::symptom::{
    ports::SymptomCheckService, selection::SelectionState, value_objects::SelectionInput,
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
pub struct GetSelectionResponse {
    pub data: SelectionState,
}

#[utoipa::path(
    get,
    path = "",
    tag = "selection",
    summary = "Get current selection",
    description = "Returns the symptoms currently selected on the calling device, in the order they were picked.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    ),
    responses(
        (status = 200, body = GetSelectionResponse)
    ),
)]
pub async fn get_selection(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<GetSelectionResponse>, ApiError> {
    let selection = state
        .service
        .get_selection(SelectionInput {
            device_id: device.device_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSelectionResponse { data: selection }))
}
