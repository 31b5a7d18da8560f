pub mod assistant;
pub mod common;
pub mod diet_plan;
pub mod health;
pub mod symptom;
pub mod wellness;
