use crate::domain::{
    assistant::{
        ports::AssistantService, responder::AssistantReply, value_objects::AssistantMessageInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    symptom::ports::SelectionRepository,
};

impl<S> AssistantService for Service<S>
where
    S: SelectionRepository,
{
    async fn reply(&self, input: AssistantMessageInput) -> Result<AssistantReply, CoreError> {
        self.responder.reply(&input.message)
    }
}
