pub mod knowledge;
pub mod selection;
