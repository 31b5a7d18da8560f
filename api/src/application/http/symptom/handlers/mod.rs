pub mod check_symptoms;
pub mod get_symptoms;
