use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    symptom::{
        entities::{Condition, ScoredCondition, Symptom},
        selection::SelectionState,
    },
};

pub const NO_MATCH_TITLE: &str = "Multiple Possibilities";
pub const NO_MATCH_MESSAGE: &str = "Your combination of symptoms could indicate various conditions. Consider consulting with a healthcare professional for proper evaluation.";
pub const GENERIC_DIET_ADVICE: &str = "Maintain a balanced diet with plenty of fluids";
pub const DISCLAIMER: &str = "This symptom checker is for informational purposes only and is not a qualified medical opinion. Always consult with a healthcare professional for proper diagnosis and treatment.";

pub const NEXT_STEPS: [&str; 4] = [
    "Rest and stay hydrated",
    "Monitor your symptoms for any changes",
    "Consider over-the-counter remedies appropriate for your symptoms",
    "Consult with a healthcare provider for personalized advice",
];

pub const WARNING_SIGNS: [&str; 5] = [
    "Your symptoms are severe or worsening rapidly",
    "You have difficulty breathing",
    "You experience chest pain",
    "You have a high fever that doesn't respond to medication",
    "You feel confused or disoriented",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConditionFinding {
    pub condition: Condition,
    pub votes: u32,
    pub explanation: String,
}

impl From<ScoredCondition> for ConditionFinding {
    fn from(scored: ScoredCondition) -> Self {
        let explanation = match scored.votes {
            1 => format!(
                "One of the symptoms you selected is associated with {}.",
                scored.condition
            ),
            n => format!(
                "{n} of the symptoms you selected are associated with {}.",
                scored.condition
            ),
        };

        Self {
            condition: scored.condition,
            votes: scored.votes,
            explanation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoMatchNotice {
    pub title: String,
    pub message: String,
}

/// Display-ready result of a symptom check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomReport {
    pub id: Uuid,
    pub checked_at: DateTime<Utc>,
    pub selected_symptoms: Vec<Symptom>,
    pub findings: Vec<ConditionFinding>,
    /// Set when no condition matched the selection.
    pub no_match: Option<NoMatchNotice>,
    pub diet_advice: Vec<String>,
    /// `true` when `diet_advice` holds the generic fallback.
    pub generic_diet_advice: bool,
    pub next_steps: Vec<String>,
    pub warning_signs: Vec<String>,
    pub disclaimer: String,
}

impl SymptomReport {
    pub fn build(
        selection: &SelectionState,
        ranked: Vec<ScoredCondition>,
        diet_advice: Vec<String>,
    ) -> Self {
        let (checked_at, timestamp) = generate_timestamp();

        let no_match = ranked.is_empty().then(|| NoMatchNotice {
            title: NO_MATCH_TITLE.to_string(),
            message: NO_MATCH_MESSAGE.to_string(),
        });

        let generic_diet_advice = diet_advice.is_empty();
        let diet_advice = if generic_diet_advice {
            vec![GENERIC_DIET_ADVICE.to_string()]
        } else {
            diet_advice
        };

        Self {
            id: Uuid::new_v7(timestamp),
            checked_at,
            selected_symptoms: selection.symptoms().to_vec(),
            findings: ranked.into_iter().map(ConditionFinding::from).collect(),
            no_match,
            diet_advice,
            generic_diet_advice,
            next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
            warning_signs: WARNING_SIGNS.iter().map(|s| s.to_string()).collect(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
