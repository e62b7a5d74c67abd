//! Normalized, read-only view of one student's records.

mod content;
mod questions;
mod stats;

pub use content::{AnsweredInsight, ContentModel, ContentModelBuilder};
pub use questions::{Question, QuestionSet};
pub use stats::PortfolioStats;
