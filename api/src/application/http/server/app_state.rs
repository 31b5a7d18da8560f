use std::sync::Arc;

use healthchat_core::application::HealthChatService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HealthChatService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HealthChatService) -> Self {
        Self { args, service }
    }
}
