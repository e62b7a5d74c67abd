//! Drives a style renderer end to end and serializes the result.

mod assembler;
mod builder;
mod config;
mod filename;

pub use assembler::{DocumentAssembler, GeneratedDocument};
pub use builder::AssemblerBuilder;
pub use config::{ApplicationLimits, GeneratorConfig, OutputFormat};
pub use filename::{document_filename, sanitize_name};
