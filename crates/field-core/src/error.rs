//! Error types for engine setup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    /// No drawing surface with the given element id exists.
    #[error("drawing surface #{0} not found")]
    MissingSurface(String),
    /// The surface exists but a 2D context could not be acquired.
    #[error("2d context unavailable on #{0}")]
    ContextUnavailable(String),
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}
