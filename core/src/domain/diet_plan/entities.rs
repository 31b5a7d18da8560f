use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    Omnivore,
    Vegetarian,
    Vegan,
    Pescatarian,
    Keto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HealthCondition {
    None,
    Diabetes,
    Hypertension,
    HeartDisease,
    DigestiveIssues,
    Allergies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Child,
    Teen,
    YoungAdult,
    Adult,
    Senior,
}

impl DietaryPreference {
    pub const ALL: [Self; 5] = [
        Self::Omnivore,
        Self::Vegetarian,
        Self::Vegan,
        Self::Pescatarian,
        Self::Keto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Keto => "keto",
        }
    }
}

impl HealthCondition {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Diabetes,
        Self::Hypertension,
        Self::HeartDisease,
        Self::DigestiveIssues,
        Self::Allergies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::HeartDisease => "heart-disease",
            Self::DigestiveIssues => "digestive-issues",
            Self::Allergies => "allergies",
        }
    }
}

impl AgeGroup {
    pub const ALL: [Self; 5] = [
        Self::Child,
        Self::Teen,
        Self::YoungAdult,
        Self::Adult,
        Self::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Teen => "teen",
            Self::YoungAdult => "young-adult",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }
}

macro_rules! impl_option_parsing {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|option| option.as_str() == s)
                    .ok_or_else(|| CoreError::Invalid(format!("unknown {}: {s}", $kind)))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_option_parsing!(DietaryPreference, "dietary preference");
impl_option_parsing!(HealthCondition, "health condition");
impl_option_parsing!(AgeGroup, "age group");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietPlan {
    pub preference: DietaryPreference,
    pub health_condition: HealthCondition,
    pub age_group: AgeGroup,
    pub diet_type: String,
    pub condition_note: Option<String>,
    pub foods_to_include: Vec<String>,
    pub foods_to_limit: Vec<String>,
    pub meal_plan: MealPlan,
    pub note: String,
}
