use tracing::info;

use crate::{
    domain::{
        assistant::responder::KeywordResponder,
        common::{HealthChatConfig, entities::app_errors::CoreError, services::Service},
    },
    infrastructure::{knowledge::load_knowledge_base, selection::InMemorySelectionRepository},
};

pub type HealthChatService = Service<InMemorySelectionRepository>;

pub async fn create_service(config: HealthChatConfig) -> Result<HealthChatService, CoreError> {
    let knowledge_base = load_knowledge_base(&config.knowledge).await?;
    let responder = KeywordResponder::builtin()?;

    info!(
        symptoms = knowledge_base.catalog().len(),
        conditions = knowledge_base.conditions().len(),
        "health chat service ready"
    );

    Ok(Service::new(
        knowledge_base,
        InMemorySelectionRepository::with_max_devices(config.selection.max_devices),
        responder,
    ))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::common::KnowledgeConfig;

    #[tokio::test]
    async fn test_create_service_with_builtin_data() {
        let service = create_service(HealthChatConfig::default()).await.unwrap();
        assert_eq!(service.knowledge_base().catalog().len(), 13);
    }

    #[tokio::test]
    async fn test_create_service_missing_file() {
        let config = HealthChatConfig {
            knowledge: KnowledgeConfig {
                path: Some(PathBuf::from("/nonexistent/knowledge.json")),
            },
            ..Default::default()
        };
        assert!(matches!(
            create_service(config).await,
            Err(CoreError::KnowledgeBaseUnavailable(_))
        ));
    }
}
