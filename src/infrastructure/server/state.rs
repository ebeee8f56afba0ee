use super::session::SessionResolver;
use crate::application::chat::ChatService;
use crate::infrastructure::model::CompletionClient;
use std::sync::Arc;

pub struct ServerState<C: CompletionClient> {
    chat: Arc<ChatService<C>>,
    sessions: Arc<dyn SessionResolver>,
}

impl<C: CompletionClient> ServerState<C> {
    pub fn new(chat: Arc<ChatService<C>>, sessions: Arc<dyn SessionResolver>) -> Self {
        Self { chat, sessions }
    }

    pub fn chat(&self) -> Arc<ChatService<C>> {
        Arc::clone(&self.chat)
    }

    pub fn sessions(&self) -> &dyn SessionResolver {
        self.sessions.as_ref()
    }
}
