//! Output types from the layout engine.
//!
//! A `LaidOutDocument` holds positioned drawing operations organized by page,
//! plus the images they reference. Coordinates are in points with the origin
//! at the top-left corner of the page; renderers flip Y as their format needs.

use crate::blocks::BlockKind;
use crate::config::PageGeometry;
use crate::style::TextStyle;
use folio_traits::ResolvedImage;
use folio_types::{Color, Rect};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        /// Y position of the text baseline.
        baseline: f32,
        text: String,
        style: TextStyle,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        width: f32,
    },
    Image {
        key: String,
        rect: Rect,
    },
    /// A check mark drawn inside `rect`.
    CheckMark {
        rect: Rect,
        color: Color,
    },
}

impl DrawOp {
    pub fn translate_y(&mut self, dy: f32) {
        match self {
            DrawOp::Text { baseline, .. } => *baseline += dy,
            DrawOp::FillRect { rect, .. }
            | DrawOp::StrokeRect { rect, .. }
            | DrawOp::Image { rect, .. }
            | DrawOp::CheckMark { rect, .. } => *rect = rect.offset_y(dy),
            DrawOp::Line { from, to, .. } => {
                from.1 += dy;
                to.1 += dy;
            }
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Where one block landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: BlockKind,
    pub y: f32,
    pub height: f32,
    /// The block extends past the bottom margin.
    pub overflow: bool,
}

impl Placement {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub label: Option<String>,
    pub page_number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub ops: Vec<DrawOp>,
    pub placements: Vec<Placement>,
    pub footer: Option<Footer>,
}

impl Page {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            ops: Vec::new(),
            placements: Vec::new(),
            footer: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::text)
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().any(|run| run.contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
    /// Images referenced by `DrawOp::Image`, keyed by their key.
    pub images: BTreeMap<String, ResolvedImage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn placements(&self) -> impl Iterator<Item = (&Page, &Placement)> {
        self.pages
            .iter()
            .flat_map(|page| page.placements.iter().map(move |p| (page, p)))
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|page| page.contains_text(needle))
    }

    /// Number of image draw operations across all pages.
    pub fn image_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|page| &page.ops)
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .count()
    }
}
