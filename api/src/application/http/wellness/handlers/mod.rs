pub mod assess_stress;
pub mod get_questions;
