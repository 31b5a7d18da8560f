use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::check_selection::{__path_check_selection, check_selection};
use super::handlers::clear_selection::{__path_clear_selection, clear_selection};
use super::handlers::get_selection::{__path_get_selection, get_selection};
use super::handlers::toggle_symptom::{__path_toggle_symptom, toggle_symptom};
use crate::application::{device_middleware::device_middleware, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_selection, toggle_symptom, clear_selection, check_selection))]
pub struct SelectionApiDoc;

pub fn selection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/selection", state.args.server.root_path),
            get(get_selection).delete(clear_selection),
        )
        .route(
            &format!("{}/selection/toggle", state.args.server.root_path),
            post(toggle_symptom),
        )
        .route(
            &format!("{}/selection/check", state.args.server.root_path),
            post(check_selection),
        )
        .layer(middleware::from_fn(device_middleware))
}
