//! Paginated portfolio documents.
//!
//! A [`ContentModel`] built from a student's achievement records, academic
//! summary and answered insight questions is handed to a
//! [`DocumentAssembler`], which lays it out in one of three
//! [`DocumentStyle`]s and serializes the pages as PDF or plain text.
//!
//! ```ignore
//! use folio::{ContentModel, DocumentAssembler, DocumentStyle, GeneratorConfig};
//!
//! let input = serde_json::from_str(&payload)?;
//! let model = ContentModel::from_input(input);
//! let assembler = DocumentAssembler::with_config(GeneratorConfig::default());
//! let document = assembler.generate(&model, DocumentStyle::Professional).await?;
//! std::fs::write(&document.filename, &document.bytes)?;
//! ```

pub mod error;
pub mod model;
pub mod pipeline;
pub mod styles;

pub use error::GenerateError;
pub use model::{AnsweredInsight, ContentModel, ContentModelBuilder, PortfolioStats, Question, QuestionSet};
pub use pipeline::{
    document_filename, sanitize_name, ApplicationLimits, AssemblerBuilder, DocumentAssembler,
    GeneratedDocument, GeneratorConfig, OutputFormat,
};
pub use styles::{DocumentStyle, RenderContext, StyleRenderer, StyleSheet};

// Re-export the workspace crates so callers need a single dependency
pub use folio_layout as layout;
pub use folio_resource as resource;
pub use folio_traits as traits;
pub use folio_types as types;
