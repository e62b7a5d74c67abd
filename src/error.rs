use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// The single error surfaced by [`DocumentAssembler::generate`](crate::DocumentAssembler::generate).
///
/// Image failures never appear here; they only drop the affected image.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("A document is already being generated")]
    AlreadyRunning,
}

impl From<serde_json::Error> for GenerateError {
    fn from(e: serde_json::Error) -> Self {
        GenerateError::Config(e.to_string())
    }
}
