use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ToggleSymptomValidator {
    #[validate(length(min = 1, max = 128, message = "symptom is required"))]
    pub symptom: String,
}
