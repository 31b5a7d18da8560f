pub mod check_selection;
pub mod clear_selection;
pub mod get_selection;
pub mod toggle_symptom;
