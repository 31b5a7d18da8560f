use std::path::Path;

use tracing::{error, info};

use crate::domain::{
    common::{KnowledgeConfig, entities::app_errors::CoreError},
    symptom::knowledge::{KnowledgeBase, KnowledgeBaseDocument},
};

static BUILTIN_KNOWLEDGE_JSON: &str = include_str!("data/knowledge_base.json");

/// Parses and validates the tables shipped with the binary.
pub fn builtin_knowledge_base() -> Result<KnowledgeBase, CoreError> {
    parse_knowledge_base(BUILTIN_KNOWLEDGE_JSON)
}

pub fn parse_knowledge_base(json: &str) -> Result<KnowledgeBase, CoreError> {
    let document: KnowledgeBaseDocument = serde_json::from_str(json).map_err(|e| {
        error!("Failed to parse knowledge base: {}", e);
        CoreError::InvalidKnowledgeBase(format!("malformed document: {e}"))
    })?;

    KnowledgeBase::try_from(document)
}

pub async fn load_knowledge_base_file(path: &Path) -> Result<KnowledgeBase, CoreError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read knowledge base {}: {}", path.display(), e);
        CoreError::KnowledgeBaseUnavailable(format!("{}: {e}", path.display()))
    })?;

    parse_knowledge_base(&json)
}

/// Loads the configured knowledge base, falling back to the built-in tables
/// when no path is set.
pub async fn load_knowledge_base(config: &KnowledgeConfig) -> Result<KnowledgeBase, CoreError> {
    match &config.path {
        Some(path) => {
            info!(path = %path.display(), "loading knowledge base from file");
            load_knowledge_base_file(path).await
        }
        None => builtin_knowledge_base(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let kb = builtin_knowledge_base().unwrap();
        assert_eq!(kb.catalog().len(), 13);
        assert_eq!(kb.associations().len(), 13);
        assert_eq!(kb.diet_advice().len(), 6);
        for symptom in kb.catalog().iter() {
            assert!(!kb.associations().conditions_for(symptom.as_str()).is_empty());
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_knowledge_base("{ \"symptoms\": [").unwrap_err();
        assert!(matches!(err, CoreError::InvalidKnowledgeBase(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"symptoms":["Itch"],"associations":[{{"symptom":"Itch","conditions":["Hives"]}}],"diet_advice":[]}}"#
        )
        .unwrap();

        let kb = load_knowledge_base(&KnowledgeConfig {
            path: Some(file.path().to_path_buf()),
        })
        .await
        .unwrap();

        assert_eq!(kb.catalog().len(), 1);
        assert_eq!(kb.conditions().len(), 1);
        assert!(kb.advice_for("Hives").is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let err = load_knowledge_base(&KnowledgeConfig {
            path: Some("/nonexistent/healthchat/knowledge.json".into()),
        })
        .await
        .unwrap_err();

        assert!(matches!(err, CoreError::KnowledgeBaseUnavailable(_)));
    }
}
