use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    symptom::ports::SelectionRepository,
    wellness::{
        entities::{Question, StressAssessment},
        ports::WellnessService,
        questionnaire::{assess_answers, questionnaire},
        value_objects::AssessStressInput,
    },
};

impl<S> WellnessService for Service<S>
where
    S: SelectionRepository,
{
    async fn get_questionnaire(&self) -> Result<Vec<Question>, CoreError> {
        Ok(questionnaire())
    }

    async fn assess_stress(&self, input: AssessStressInput) -> Result<StressAssessment, CoreError> {
        let assessment = assess_answers(&input.answers)?;
        debug!(level = ?assessment.level, "stress assessment computed");

        Ok(assessment)
    }
}
