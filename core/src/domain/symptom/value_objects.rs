use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::symptom::{entities::Condition, selection::SelectionState};

#[derive(Debug, Clone, Default)]
pub struct GetSymptomsFilter {
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CheckSymptomsInput {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GetConditionAdviceInput {
    pub condition: String,
}

#[derive(Debug, Clone)]
pub struct SelectionInput {
    pub device_id: String,
}

#[derive(Debug, Clone)]
pub struct ToggleSymptomInput {
    pub device_id: String,
    pub symptom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionUpdate {
    pub symptom: String,
    /// Membership of `symptom` after the toggle.
    pub selected: bool,
    pub selection: SelectionState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionAdvice {
    pub condition: Condition,
    pub advice: Vec<String>,
    pub generic_diet_advice: bool,
}
