use axum::{Extension, extract::State};
use healthchat_core::domain::symptom::{
    ports::SymptomCheckService, value_objects::SelectionInput,
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
pub struct ClearSelectionResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "selection",
    summary = "Clear selection",
    description = "Removes every selected symptom from the calling device.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    ),
    responses(
        (status = 200, body = ClearSelectionResponse)
    ),
)]
pub async fn clear_selection(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
) -> Result<Response<ClearSelectionResponse>, ApiError> {
    state
        .service
        .clear_selection(SelectionInput {
            device_id: device.device_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearSelectionResponse {
        message: "Selection cleared".to_string(),
    }))
}
