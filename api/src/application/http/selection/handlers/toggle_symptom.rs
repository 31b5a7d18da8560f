use axum::{Extension, extract::State};
use healthchat_core::domain::symptom::{
    ports::SymptomCheckService,
    value_objects::{SelectionUpdate, ToggleSymptomInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    device_middleware::DeviceContext,
    http::{
        selection::validators::ToggleSymptomValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ToggleSymptomResponse {
    pub data: SelectionUpdate,
}

#[utoipa::path(
    post,
    path = "/toggle",
    tag = "selection",
    summary = "Toggle a symptom",
    description = "Adds the symptom to the device selection when absent, removes it when present.",
    params(
        ("x-device-id" = Option<String>, Header, description = "Device identifier"),
    ),
    request_body = ToggleSymptomValidator,
    responses(
        (status = 200, body = ToggleSymptomResponse),
        (status = 422, body = ApiErrorResponse)
    ),
)]
pub async fn toggle_symptom(
    State(state): State<AppState>,
    Extension(device): Extension<DeviceContext>,
    ValidateJson(payload): ValidateJson<ToggleSymptomValidator>,
) -> Result<Response<ToggleSymptomResponse>, ApiError> {
    let update = state
        .service
        .toggle_symptom(ToggleSymptomInput {
            device_id: device.device_id,
            symptom: payload.symptom,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleSymptomResponse { data: update }))
}
