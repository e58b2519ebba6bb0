mod generation_client;
mod resource_sink;

pub use generation_client::GenerationClient;
pub use resource_sink::ResourceSink;
