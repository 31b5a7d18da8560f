#[derive(Debug, Clone)]
pub struct AssistantMessageInput {
    pub message: String,
}
