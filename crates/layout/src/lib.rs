use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
    #[error("{kind:?} block measured a non-finite height ({height}).")]
    NonFiniteHeight { kind: BlockKind, height: f32 },
}

pub mod algorithms;
pub mod blocks;
pub mod config;
pub mod engine;
pub mod fonts;
pub mod output;
pub mod painting;
pub mod style;
pub mod text;

pub use self::algorithms::pagination::{check_fit, BreakAnalysis, PageCursor};
pub use self::blocks::{
    ActivityCard, Banner, BlockKind, CardChrome, ContentBlock, Divider, DividerStyle,
    EmbeddedImage, FieldRow, ImageRow, Paragraph, Rule, SectionHeader, StatCell, StatGrid, StyledText,
};
pub use self::config::PageGeometry;
pub use self::engine::LayoutEngine;
pub use self::fonts::{FontFamily, FontSpec, STANDARD_FONTS};
pub use self::output::{DrawOp, Footer, LaidOutDocument, Page, Placement};
pub use self::style::{Align, FooterSpec, PageChrome, TextStyle};
pub use self::text::{MeasuredText, TextMeasurer};

// Re-export foundation types used in block and output definitions
pub use folio_traits::ResolvedImage;
pub use folio_types::{Color, Rect, Size};

#[cfg(test)]
mod test_utils;
