use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateDietPlanValidator {
    /// omnivore, vegetarian, vegan, pescatarian or keto
    #[validate(length(min = 1, message = "preference is required"))]
    pub preference: String,

    /// none, diabetes, hypertension, heart-disease, digestive-issues or allergies
    #[validate(length(min = 1, message = "health_condition is required"))]
    pub health_condition: String,

    /// child, teen, young-adult, adult or senior
    #[validate(length(min = 1, message = "age_group is required"))]
    pub age_group: String,
}
