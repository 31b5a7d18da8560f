use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{entities::DietPlan, value_objects::GenerateDietPlanInput},
};

pub trait DietPlanService: Send + Sync {
    fn generate_diet_plan(
        &self,
        input: GenerateDietPlanInput,
    ) -> impl Future<Output = Result<DietPlan, CoreError>> + Send;
}
