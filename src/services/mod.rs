pub mod chat_client_http;
pub mod prompt_assets;
pub mod prompt_builder;
pub mod resource_directory;

pub use chat_client_http::{API_KEY_ENV, FALLBACK_API_KEY_ENV, HttpChatClient};
pub use prompt_builder::build_prompt;
pub use resource_directory::DirectoryResourceSink;
