use healthchat_core::domain::symptom::selection::MAX_SELECTED_SYMPTOMS;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckSymptomsValidator {
    /// Symptom labels as shown in the catalog. An empty list is allowed, and
    /// labels outside the catalog score nothing.
    #[validate(custom(function = "validate_symptom_count"))]
    pub symptoms: Vec<String>,
}

fn validate_symptom_count(labels: &Vec<String>) -> Result<(), ValidationError> {
    if labels.len() > MAX_SELECTED_SYMPTOMS {
        let mut error = ValidationError::new("too_many_symptoms");
        error.message =
            Some(format!("at most {MAX_SELECTED_SYMPTOMS} symptoms can be checked at once").into());
        return Err(error);
    }
    Ok(())
}
