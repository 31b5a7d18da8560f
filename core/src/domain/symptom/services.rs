use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    symptom::{
        aggregation::aggregate_diet_advice,
        entities::{Condition, Symptom},
        knowledge::KnowledgeBase,
        ports::{SelectionRepository, SymptomCheckService},
        report::{GENERIC_DIET_ADVICE, SymptomReport},
        scoring::score_conditions,
        selection::SelectionState,
        value_objects::{
            CheckSymptomsInput, ConditionAdvice, GetConditionAdviceInput, GetSymptomsFilter,
            SelectionInput, SelectionUpdate, ToggleSymptomInput,
        },
    },
};

/// Scores `selection`, aggregates diet advice and formats the report.
pub fn evaluate_selection(knowledge_base: &KnowledgeBase, selection: &SelectionState) -> SymptomReport {
    let ranked = score_conditions(selection, knowledge_base.associations());
    let advice = aggregate_diet_advice(&ranked, knowledge_base.diet_advice());

    SymptomReport::build(selection, ranked, advice)
}

impl<S> SymptomCheckService for Service<S>
where
    S: SelectionRepository,
{
    async fn list_symptoms(&self, filter: GetSymptomsFilter) -> Result<Vec<Symptom>, CoreError> {
        let catalog = self.knowledge_base.catalog();
        let symptoms = match filter.search.as_deref() {
            Some(term) => catalog.search(term).into_iter().cloned().collect(),
            None => catalog.iter().cloned().collect(),
        };

        Ok(symptoms)
    }

    async fn list_conditions(&self) -> Result<Vec<Condition>, CoreError> {
        Ok(self.knowledge_base.conditions().to_vec())
    }

    async fn check_symptoms(&self, input: CheckSymptomsInput) -> Result<SymptomReport, CoreError> {
        let selection: SelectionState = input.symptoms.into_iter().map(Symptom::from).collect();

        Ok(evaluate_selection(&self.knowledge_base, &selection))
    }

    async fn get_condition_advice(
        &self,
        input: GetConditionAdviceInput,
    ) -> Result<ConditionAdvice, CoreError> {
        if !self.knowledge_base.knows_condition(&input.condition) {
            return Err(CoreError::NotFound);
        }

        let advice = self.knowledge_base.advice_for(&input.condition).to_vec();
        let generic_diet_advice = advice.is_empty();
        let advice = if generic_diet_advice {
            vec![GENERIC_DIET_ADVICE.to_string()]
        } else {
            advice
        };

        Ok(ConditionAdvice {
            condition: Condition::from(input.condition),
            advice,
            generic_diet_advice,
        })
    }

    async fn get_selection(&self, input: SelectionInput) -> Result<SelectionState, CoreError> {
        self.selection_repository.get(input.device_id).await
    }

    async fn toggle_symptom(&self, input: ToggleSymptomInput) -> Result<SelectionUpdate, CoreError> {
        let (selected, selection) = self
            .selection_repository
            .toggle(input.device_id.clone(), Symptom::from(input.symptom.clone()))
            .await?;

        debug!(
            device_id = %input.device_id,
            symptom = %input.symptom,
            selected,
            "toggled symptom"
        );

        Ok(SelectionUpdate {
            symptom: input.symptom,
            selected,
            selection,
        })
    }

    async fn clear_selection(&self, input: SelectionInput) -> Result<(), CoreError> {
        self.selection_repository.remove(input.device_id).await
    }

    async fn check_selection(&self, input: SelectionInput) -> Result<SymptomReport, CoreError> {
        let selection = self.selection_repository.get(input.device_id).await?;

        Ok(evaluate_selection(&self.knowledge_base, &selection))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        domain::{
            assistant::responder::KeywordResponder,
            symptom::{ports::MockSelectionRepository, selection::MAX_SELECTED_SYMPTOMS},
        },
        infrastructure::{
            knowledge::builtin_knowledge_base, selection::InMemorySelectionRepository,
        },
    };

    fn service(repository: MockSelectionRepository) -> Service<MockSelectionRepository> {
        Service::new(
            builtin_knowledge_base().unwrap(),
            repository,
            KeywordResponder::builtin().unwrap(),
        )
    }

    fn selection(labels: &[&str]) -> SelectionState {
        labels.iter().map(|l| Symptom::from(*l)).collect()
    }

    #[tokio::test]
    async fn test_check_symptoms_headache_fever() {
        let service = service(MockSelectionRepository::new());
        let report = service
            .check_symptoms(CheckSymptomsInput {
                symptoms: vec!["Headache".into(), "Fever".into()],
            })
            .await
            .unwrap();

        let conditions: Vec<&str> = report
            .findings
            .iter()
            .map(|f| f.condition.as_str())
            .collect();
        assert_eq!(conditions, vec!["Common Cold", "Flu", "COVID-19"]);
        assert_eq!(report.diet_advice.len(), 5);
        assert_eq!(
            report.diet_advice[0],
            "Stay hydrated with warm fluids like chicken soup and herbal teas"
        );
        assert_eq!(
            report.diet_advice[4],
            "Clear broths to stay hydrated and replenish electrolytes"
        );
        assert!(!report.generic_diet_advice);
    }

    #[tokio::test]
    async fn test_check_symptoms_empty_uses_fallbacks() {
        let service = service(MockSelectionRepository::new());
        let report = service
            .check_symptoms(CheckSymptomsInput { symptoms: vec![] })
            .await
            .unwrap();

        assert!(report.findings.is_empty());
        assert!(report.no_match.is_some());
        assert!(report.generic_diet_advice);
    }

    #[tokio::test]
    async fn test_check_symptoms_unknown_only() {
        let service = service(MockSelectionRepository::new());
        let report = service
            .check_symptoms(CheckSymptomsInput {
                symptoms: vec!["Foo".into()],
            })
            .await
            .unwrap();

        assert!(report.findings.is_empty());
        assert_eq!(report.selected_symptoms, vec![Symptom::from("Foo")]);
    }

    #[tokio::test]
    async fn test_list_symptoms_with_search() {
        let service = service(MockSelectionRepository::new());
        let all = service
            .list_symptoms(GetSymptomsFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 13);

        let found = service
            .list_symptoms(GetSymptomsFilter {
                search: Some("th".into()),
            })
            .await
            .unwrap();
        let labels: Vec<&str> = found.iter().map(Symptom::as_str).collect();
        assert_eq!(labels, vec!["Sore throat", "Shortness of breath"]);
    }

    #[tokio::test]
    async fn test_condition_advice() {
        let service = service(MockSelectionRepository::new());

        let advice = service
            .get_condition_advice(GetConditionAdviceInput {
                condition: "Migraine".into(),
            })
            .await
            .unwrap();
        assert_eq!(advice.advice.len(), 4);
        assert!(!advice.generic_diet_advice);

        let fallback = service
            .get_condition_advice(GetConditionAdviceInput {
                condition: "Asthma".into(),
            })
            .await
            .unwrap();
        assert!(fallback.generic_diet_advice);
        assert_eq!(fallback.advice, vec![GENERIC_DIET_ADVICE.to_string()]);

        let missing = service
            .get_condition_advice(GetConditionAdviceInput {
                condition: "Dragon Pox".into(),
            })
            .await;
        assert_eq!(missing, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_toggle_symptom_uses_repository_toggle() {
        let mut repository = MockSelectionRepository::new();
        repository
            .expect_toggle()
            .withf(|device_id, symptom| device_id == "tablet" && symptom.as_str() == "Cough")
            .times(1)
            .returning(|_, _| Box::pin(async { Ok((true, selection(&["Fever", "Cough"]))) }));
        repository.expect_get().never();

        let update = service(repository)
            .toggle_symptom(ToggleSymptomInput {
                device_id: "tablet".into(),
                symptom: "Cough".into(),
            })
            .await
            .unwrap();

        assert!(update.selected);
        assert_eq!(update.symptom, "Cough");
        assert_eq!(update.selection.len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_propagates_repository_error() {
        let mut repository = MockSelectionRepository::new();
        repository
            .expect_toggle()
            .returning(|_, _| Box::pin(async { Err(CoreError::InternalServerError) }));

        let result = service(repository)
            .toggle_symptom(ToggleSymptomInput {
                device_id: "tablet".into(),
                symptom: "Fever".into(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InternalServerError));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_toggles_on_one_device() {
        let service = Service::new(
            builtin_knowledge_base().unwrap(),
            InMemorySelectionRepository::new(),
            KeywordResponder::builtin().unwrap(),
        );

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .toggle_symptom(ToggleSymptomInput {
                            device_id: "tablet".into(),
                            symptom: format!("S{i}"),
                        })
                        .await
                })
            })
            .collect();

        let mut accepted = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(update) => {
                    assert!(update.selected);
                    accepted += 1;
                }
                Err(error) => assert!(matches!(error, CoreError::Invalid(_))),
            }
        }

        let stored = service
            .get_selection(SelectionInput {
                device_id: "tablet".into(),
            })
            .await
            .unwrap();
        assert_eq!(accepted, MAX_SELECTED_SYMPTOMS);
        assert_eq!(stored.len(), MAX_SELECTED_SYMPTOMS);
    }

    #[tokio::test]
    async fn test_check_selection_scores_stored_selection() {
        let mut repository = MockSelectionRepository::new();
        repository
            .expect_get()
            .with(eq("phone".to_string()))
            .returning(|_| Box::pin(async { Ok(selection(&["Vomiting", "Nausea"])) }));

        let report = service(repository)
            .check_selection(SelectionInput {
                device_id: "phone".into(),
            })
            .await
            .unwrap();

        let conditions: Vec<&str> = report
            .findings
            .iter()
            .map(|f| f.condition.as_str())
            .collect();
        assert_eq!(
            conditions,
            vec!["Food Poisoning", "Gastroenteritis", "Migraine"]
        );
    }

    #[tokio::test]
    async fn test_clear_selection_removes_entry() {
        let mut repository = MockSelectionRepository::new();
        repository
            .expect_remove()
            .with(eq("phone".to_string()))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        service(repository)
            .clear_selection(SelectionInput {
                device_id: "phone".into(),
            })
            .await
            .unwrap();
    }
}
