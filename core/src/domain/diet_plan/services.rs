use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diet_plan::{
        entities::{AgeGroup, DietPlan, DietaryPreference, HealthCondition},
        guidance::build_diet_plan,
        ports::DietPlanService,
        value_objects::GenerateDietPlanInput,
    },
    symptom::ports::SelectionRepository,
};

impl<S> DietPlanService for Service<S>
where
    S: SelectionRepository,
{
    async fn generate_diet_plan(&self, input: GenerateDietPlanInput) -> Result<DietPlan, CoreError> {
        let preference: DietaryPreference = input.preference.parse()?;
        let health_condition: HealthCondition = input.health_condition.parse()?;
        let age_group: AgeGroup = input.age_group.parse()?;

        Ok(build_diet_plan(preference, health_condition, age_group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::assistant::responder::KeywordResponder,
        infrastructure::{
            knowledge::builtin_knowledge_base, selection::InMemorySelectionRepository,
        },
    };

    fn service() -> Service<InMemorySelectionRepository> {
        Service::new(
            builtin_knowledge_base().unwrap(),
            InMemorySelectionRepository::new(),
            KeywordResponder::builtin().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_generate_plan() {
        let plan = service()
            .generate_diet_plan(GenerateDietPlanInput {
                preference: "pescatarian".into(),
                health_condition: "heart-disease".into(),
                age_group: "adult".into(),
            })
            .await
            .unwrap();

        assert_eq!(plan.preference, DietaryPreference::Pescatarian);
        assert!(plan.condition_note.is_some());
        assert!(plan.foods_to_limit.contains(&"High-mercury fish".to_string()));
    }

    #[tokio::test]
    async fn test_rejects_unknown_age_group() {
        let result = service()
            .generate_diet_plan(GenerateDietPlanInput {
                preference: "keto".into(),
                health_condition: "none".into(),
                age_group: "toddler".into(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
