use crate::application::ports::{ChatClient, ChatClientError};

/// Chat client returning a canned reply, for tests and scaffold mode.
pub struct MockChatClient {
    reply: String,
}

impl MockChatClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new(r#"{"feedback": "Mock feedback.", "rating": "4.0"}"#)
    }
}

#[async_trait::async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, ChatClientError> {
        Ok(self.reply.clone())
    }
}
