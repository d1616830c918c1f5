use thiserror::Error;

/// Errors that can occur during limelight initialization and runtime.
#[derive(Debug, Error)]
pub enum LimelightError {
    #[error("Canvas element not found: {0}")]
    CanvasNotFound(String),

    #[error("WebGPU adapter not found: {0}")]
    AdapterNotFound(String),

    #[error("Failed to request GPU device: {0}")]
    DeviceRequestFailed(String),

    #[error("Surface configuration failed: {0}")]
    SurfaceConfigFailed(String),

    #[error("Surface texture error: {0}")]
    SurfaceTextureError(String),

    #[error("Render pipeline creation failed: {0}")]
    RenderPipelineError(String),

    #[error("Failed to parse site content: {0}")]
    ContentParseFailed(String),
}
