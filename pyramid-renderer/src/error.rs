use crate::gl::ShaderError;

/// Error categories.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to retrieve or create DOM elements.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// The canvas could not provide a WebGL2 rendering context.
    #[error("WebGL2 context unavailable: {0}")]
    ContextUnavailable(String),

    /// Shader compilation, linking, or program creation errors.
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// WebGL resource creation or lookup errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// A frame was requested from a renderer whose initialization failed.
    #[error("Renderer is not initialized: shaders haven't been compiled correctly")]
    NotInitialized,

    /// Event listener errors.
    #[error("Event listener error: {0}")]
    Callback(String),
}

impl Error {
    // Initialization errors
    pub fn window_not_found() -> Self {
        Self::Initialization("Unable to retrieve window".to_string())
    }

    pub fn document_not_found() -> Self {
        Self::Initialization("Unable to retrieve document".to_string())
    }

    pub fn body_not_found() -> Self {
        Self::Initialization("Unable to retrieve document body".to_string())
    }

    pub fn canvas_not_found() -> Self {
        Self::Initialization("Unable to retrieve canvas".to_string())
    }

    pub fn element_creation_failed(element_type: &str) -> Self {
        Self::Initialization(format!("Failed to create element: {element_type}"))
    }

    // Context errors
    pub fn webgl_context_failed() -> Self {
        Self::ContextUnavailable("Failed to retrieve WebGL2 rendering context".to_string())
    }

    pub fn canvas_context_failed() -> Self {
        Self::ContextUnavailable("Failed to query canvas rendering context".to_string())
    }

    // Resource errors
    pub fn buffer_creation_failed(buffer_type: &str) -> Self {
        Self::Resource(format!("Failed to create {buffer_type} buffer"))
    }

    pub fn attrib_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get attribute location: {name}"))
    }

    pub fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get uniform location: {name}"))
    }

    // Callback errors
    pub fn listener_failed(event: &str) -> Self {
        Self::Callback(format!("Failed to add {event} listener"))
    }
}
