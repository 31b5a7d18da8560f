pub mod generate_diet_plan;
