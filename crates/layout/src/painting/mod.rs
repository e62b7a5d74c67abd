//! Converts content blocks into positioned draw operations.
//!
//! Preparing a block both measures it and paints it, relative to a block
//! origin at `y = 0`. The engine measures and places through the same call,
//! so a block's reserved height and its painted height cannot disagree.

pub mod block_painter;
pub mod box_painter;

use crate::LayoutError;
use crate::blocks::{BlockKind, ContentBlock, EmbeddedImage};
use crate::output::DrawOp;
use crate::text::TextMeasurer;

/// The horizontal band blocks are laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedBlock {
    pub kind: BlockKind,
    pub height: f32,
    pub ops: Vec<DrawOp>,
    pub images: Vec<EmbeddedImage>,
}

pub fn prepare_block(
    block: &ContentBlock,
    frame: Frame,
    measurer: &TextMeasurer,
) -> Result<PreparedBlock, LayoutError> {
    let mut ops = Vec::new();
    let mut images = Vec::new();

    let height = match block {
        ContentBlock::Banner(b) => block_painter::paint_banner(b, frame, measurer, &mut ops),
        ContentBlock::SectionHeader(h) => {
            block_painter::paint_section_header(h, frame, measurer, &mut ops)
        }
        ContentBlock::FieldRow(r) => block_painter::paint_field_row(r, frame, measurer, &mut ops),
        ContentBlock::Paragraph(p) => block_painter::paint_paragraph(p, frame, measurer, &mut ops),
        ContentBlock::ActivityCard(c) => {
            images.extend(c.images.iter().cloned());
            block_painter::paint_card(c, frame, measurer, &mut ops)
        }
        ContentBlock::ImageRow(r) => {
            images.extend(r.images.iter().cloned());
            block_painter::paint_image_row(r, frame, &mut ops)
        }
        ContentBlock::StatGrid(g) => block_painter::paint_stat_grid(g, frame, measurer, &mut ops),
        ContentBlock::Divider(d) => block_painter::paint_divider(d, frame, &mut ops),
        ContentBlock::Spacer(h) => h.max(0.0),
    };

    if !height.is_finite() {
        return Err(LayoutError::NonFiniteHeight {
            kind: block.kind(),
            height,
        });
    }

    Ok(PreparedBlock {
        kind: block.kind(),
        height,
        ops,
        images,
    })
}
