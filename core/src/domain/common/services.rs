use std::{sync::Arc, time::Instant};

use crate::domain::{
    assistant::responder::KeywordResponder, symptom::knowledge::KnowledgeBase,
    symptom::ports::SelectionRepository,
};

/// Application service shared by every handler. Each bounded context adds its
/// service trait as an `impl` block on this struct.
pub struct Service<S>
where
    S: SelectionRepository,
{
    pub(crate) knowledge_base: Arc<KnowledgeBase>,
    pub(crate) selection_repository: Arc<S>,
    pub(crate) responder: Arc<KeywordResponder>,
    pub(crate) started_at: Instant,
}

impl<S> Service<S>
where
    S: SelectionRepository,
{
    pub fn new(
        knowledge_base: KnowledgeBase,
        selection_repository: S,
        responder: KeywordResponder,
    ) -> Self {
        Self {
            knowledge_base: Arc::new(knowledge_base),
            selection_repository: Arc::new(selection_repository),
            responder: Arc::new(responder),
            started_at: Instant::now(),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }
}

impl<S> Clone for Service<S>
where
    S: SelectionRepository,
{
    fn clone(&self) -> Self {
        Self {
            knowledge_base: Arc::clone(&self.knowledge_base),
            selection_repository: Arc::clone(&self.selection_repository),
            responder: Arc::clone(&self.responder),
            started_at: self.started_at,
        }
    }
}
