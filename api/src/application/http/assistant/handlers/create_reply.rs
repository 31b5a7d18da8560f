use axum::extract::State;
use healthchat_core::domain::assistant::{
    ports::AssistantService, responder::AssistantReply, value_objects::AssistantMessageInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    assistant::validators::AssistantMessageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateReplyResponse {
    pub data: AssistantReply,
}

#[utoipa::path(
    post,
    path = "/replies",
    tag = "assistant",
    summary = "Ask the health assistant",
    description = "Answers a message with a canned reply chosen by keyword. This is general information, not medical advice.",
    request_body = AssistantMessageValidator,
    responses(
        (status = 200, body = CreateReplyResponse),
        (status = 400, body = ApiErrorResponse, description = "Blank message"),
        (status = 422, body = ApiErrorResponse)
    ),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AssistantMessageValidator>,
) -> Result<Response<CreateReplyResponse>, ApiError> {
    let reply = state
        .service
        .reply(AssistantMessageInput {
            message: payload.message,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CreateReplyResponse { data: reply }))
}
