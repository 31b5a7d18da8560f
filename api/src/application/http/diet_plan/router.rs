use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::generate_diet_plan::{__path_generate_diet_plan, generate_diet_plan};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_diet_plan))]
pub struct DietPlanApiDoc;

pub fn diet_plan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/diet-plans", state.args.server.root_path),
        post(generate_diet_plan),
    )
}
