use crate::ports::{GenerationClient, ResourceSink};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: GenerationClient, S: ResourceSink> {
    client: C,
    sink: Option<S>,
    model: String,
}

impl<C: GenerationClient, S: ResourceSink> AppContext<C, S> {
    /// Create a new application context.
    ///
    /// With no sink, generated resources are returned but not exported.
    pub fn new(client: C, sink: Option<S>, model: impl Into<String>) -> Self {
        Self { client, sink, model: model.into() }
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the resource sink, if exporting is enabled.
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }
}
