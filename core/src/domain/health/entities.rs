use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Size of the loaded knowledge base, reported by the readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KnowledgeBaseStatus {
    pub symptoms: usize,
    pub associations: usize,
    pub conditions: usize,
    pub diet_entries: usize,
}
