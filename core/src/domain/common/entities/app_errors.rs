use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Invalid knowledge base: {0}")]
    InvalidKnowledgeBase(String),

    #[error("Knowledge base unavailable: {0}")]
    KnowledgeBaseUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}
