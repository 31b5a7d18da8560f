use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::create_reply::{__path_create_reply, create_reply};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_reply))]
pub struct AssistantApiDoc;

pub fn assistant_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/assistant/replies", state.args.server.root_path),
        post(create_reply),
    )
}
