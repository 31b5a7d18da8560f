use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    wellness::{
        entities::{Question, StressAssessment},
        value_objects::AssessStressInput,
    },
};

pub trait WellnessService: Send + Sync {
    fn get_questionnaire(&self) -> impl Future<Output = Result<Vec<Question>, CoreError>> + Send;

    fn assess_stress(
        &self,
        input: AssessStressInput,
    ) -> impl Future<Output = Result<StressAssessment, CoreError>> + Send;
}
