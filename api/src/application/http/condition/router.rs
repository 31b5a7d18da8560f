use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_condition_diet::{__path_get_condition_diet, get_condition_diet};
use super::handlers::get_conditions::{__path_get_conditions, get_conditions};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_conditions, get_condition_diet))]
pub struct ConditionApiDoc;

pub fn condition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/conditions", state.args.server.root_path),
            get(get_conditions),
        )
        .route(
            &format!("{}/conditions/{{condition}}/diet", state.args.server.root_path),
            get(get_condition_diet),
        )
}
