mod mock_chat_client;
mod openrouter_client;

pub use mock_chat_client::MockChatClient;
pub use openrouter_client::OpenRouterClient;
