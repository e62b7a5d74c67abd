//! PDF renderer using lopdf.
//!
//! This crate turns a laid-out document into a PDF that uses only the
//! standard Type1 fonts, with images embedded as RGB XObjects.

mod content;
mod renderer;
mod writer;

pub use renderer::LopdfRenderer;
pub use writer::PdfDocumentWriter;
