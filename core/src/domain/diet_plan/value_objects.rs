#[derive(Debug, Clone)]
pub struct GenerateDietPlanInput {
    pub preference: String,
    pub health_condition: String,
    pub age_group: String,
}
