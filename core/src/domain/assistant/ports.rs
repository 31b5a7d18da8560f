use std::future::Future;

use crate::domain::{
    assistant::{responder::AssistantReply, value_objects::AssistantMessageInput},
    common::entities::app_errors::CoreError,
};

pub trait AssistantService: Send + Sync {
    fn reply(
        &self,
        input: AssistantMessageInput,
    ) -> impl Future<Output = Result<AssistantReply, CoreError>> + Send;
}
