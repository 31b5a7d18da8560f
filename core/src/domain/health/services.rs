use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::KnowledgeBaseStatus, ports::HealthCheckService},
    symptom::ports::SelectionRepository,
};

impl<S> HealthCheckService for Service<S>
where
    S: SelectionRepository,
{
    async fn readiness(&self) -> Result<KnowledgeBaseStatus, CoreError> {
        let knowledge_base = &self.knowledge_base;
        if knowledge_base.catalog().is_empty() {
            return Err(CoreError::KnowledgeBaseUnavailable(
                "symptom catalog is empty".to_string(),
            ));
        }

        Ok(KnowledgeBaseStatus {
            symptoms: knowledge_base.catalog().len(),
            associations: knowledge_base.associations().len(),
            conditions: knowledge_base.conditions().len(),
            diet_entries: knowledge_base.diet_advice().len(),
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        Ok(self.started_at.elapsed().as_secs())
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

    #[tokio::test]
    async fn test_readiness_reports_builtin_counts() {
        let service = Service::new(
            builtin_knowledge_base().unwrap(),
            InMemorySelectionRepository::default(),
            KeywordResponder::builtin().unwrap(),
        );

        let status = service.readiness().await.unwrap();
        assert_eq!(status.symptoms, 13);
        assert_eq!(status.associations, 13);
        assert_eq!(status.diet_entries, 6);
        assert!(status.conditions >= status.diet_entries);

        assert!(service.health().await.unwrap() < 5);
    }
}
