mod fake_generation_client;
mod memory_resource_sink;

pub use fake_generation_client::FakeGenerationClient;
pub use memory_resource_sink::MemoryResourceSink;
