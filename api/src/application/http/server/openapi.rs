use crate::application::http::{
    assistant::router::AssistantApiDoc, condition::router::ConditionApiDoc,
    diet_plan::router::DietPlanApiDoc, health::HealthApiDoc, selection::router::SelectionApiDoc,
    symptom::router::SymptomApiDoc, wellness::router::WellnessApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HealthChat API",
        description = "Symptom checker, diet guidance and wellness tools. Informational only, not a medical opinion."
    ),
    nest(
        (path = "/symptoms", api = SymptomApiDoc),
        (path = "/conditions", api = ConditionApiDoc),
        (path = "/selection", api = SelectionApiDoc),
        (path = "/diet-plans", api = DietPlanApiDoc),
        (path = "/wellness", api = WellnessApiDoc),
        (path = "/assistant", api = AssistantApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
