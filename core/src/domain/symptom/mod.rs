pub mod aggregation;
pub mod entities;
pub mod knowledge;
pub mod ports;
pub mod report;
pub mod scoring;
pub mod selection;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
