pub mod get_condition_diet;
pub mod get_conditions;
