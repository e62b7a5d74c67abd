//! Core rendering abstractions for folio output backends.
//!
//! This crate provides the fundamental traits and types used by rendering backends:
//! - `DocumentRenderer` trait for writing a laid-out document page by page
//! - Error types for rendering operations
//! - Shared utility functions for text encoding and coordinate conversion

mod error;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use traits::{render_document, DocumentRenderer};
pub use types::DocumentInfo;
