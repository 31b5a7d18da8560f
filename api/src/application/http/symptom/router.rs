use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::check_symptoms::{__path_check_symptoms, check_symptoms};
use super::handlers::get_symptoms::{__path_get_symptoms, get_symptoms};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_symptoms, check_symptoms))]
pub struct SymptomApiDoc;

pub fn symptom_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/symptoms", state.args.server.root_path),
            get(get_symptoms),
        )
        .route(
            &format!("{}/symptoms/check", state.args.server.root_path),
            post(check_symptoms),
        )
}
