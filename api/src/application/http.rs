pub mod assistant;
pub mod condition;
pub mod diet_plan;
pub mod health;
pub mod selection;
pub mod server;
pub mod symptom;
pub mod wellness;
