use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::assess_stress::{__path_assess_stress, assess_stress};
use super::handlers::get_questions::{__path_get_questions, get_questions};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_questions, assess_stress))]
pub struct WellnessApiDoc;

pub fn wellness_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/wellness/questions", state.args.server.root_path),
            get(get_questions),
        )
        .route(
            &format!("{}/wellness/assessments", state.args.server.root_path),
            post(assess_stress),
        )
}
