//! The content blocks a style renderer feeds to the layout engine.
//!
//! A block is an indivisible unit: the engine never splits one across pages.
//! Blocks carry everything needed to measure and paint them, including any
//! images already resolved for them.

use crate::style::{Align, TextStyle};
use folio_traits::ResolvedImage;
use folio_types::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub style: TextStyle,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub color: Color,
    pub thickness: f32,
}

impl Rule {
    pub const fn new(color: Color, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

/// Title block at the top of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub title: StyledText,
    pub lines: Vec<StyledText>,
    pub fill: Option<Color>,
    pub padding: f32,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeader {
    pub title: StyledText,
    /// Colored band behind the title.
    pub bar: Option<Color>,
    /// Line under the title.
    pub underline: Option<Rule>,
    /// Row of this character under the title, for monospaced layouts.
    pub ascii_rule: Option<char>,
    pub padding: f32,
}

impl SectionHeader {
    pub fn new(title: StyledText) -> Self {
        Self {
            title,
            bar: None,
            underline: None,
            ascii_rule: None,
            padding: 0.0,
        }
    }
}

/// A label column and a wrapping value column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub label: StyledText,
    pub value: StyledText,
    pub label_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: StyledText,
    pub indent: f32,
    pub align: Align,
}

impl Paragraph {
    pub fn new(text: StyledText) -> Self {
        Self {
            text,
            indent: 0.0,
            align: Align::Left,
        }
    }

    pub fn indented(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    /// Identifies the image in the document's image table.
    pub key: String,
    pub image: ResolvedImage,
}

/// Box decoration and spacing for [`ActivityCard`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardChrome {
    pub padding: f32,
    pub background: Option<Color>,
    pub border: Option<Color>,
    /// Stripe along the left edge.
    pub accent: Option<Color>,
    /// Gap between title, meta lines and body paragraphs.
    pub gap: f32,
    /// Height of the image row. The row keeps this height whatever the
    /// number of images, so a dropped image never moves other content.
    pub image_height: f32,
    /// Number of equal slots the image row is divided into.
    pub image_slots: usize,
    /// Color of the verification check mark.
    pub check: Option<Color>,
}

impl Default for CardChrome {
    fn default() -> Self {
        Self {
            padding: 8.0,
            background: None,
            border: None,
            accent: None,
            gap: 4.0,
            image_height: 90.0,
            image_slots: 3,
            check: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub title: StyledText,
    pub meta: Vec<StyledText>,
    pub body: Vec<StyledText>,
    pub verified: bool,
    pub images: Vec<EmbeddedImage>,
    pub chrome: CardChrome,
}

/// A row of images in equal slots of a fixed height.
///
/// The height does not depend on how many images are present, so an image
/// that failed to resolve leaves the row, and everything below it, in place.
/// [`ActivityCard`] paints its images the same way, inside its padding.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRow {
    pub images: Vec<EmbeddedImage>,
    pub height: f32,
    pub slots: usize,
    pub gap: f32,
}

impl ImageRow {
    pub fn new(images: Vec<EmbeddedImage>, height: f32, slots: usize) -> Self {
        Self {
            images,
            height,
            slots,
            gap: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCell {
    pub value: String,
    pub label: String,
}

impl StatCell {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatGrid {
    pub cells: Vec<StatCell>,
    pub columns: usize,
    pub value_style: TextStyle,
    pub label_style: TextStyle,
    pub fill: Option<Color>,
    pub gap: f32,
    pub padding: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerStyle {
    Rule(Rule),
    /// A full-width row of one character.
    Ascii { ch: char, style: TextStyle },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub style: DividerStyle,
    /// Space above and below.
    pub margin: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Banner(Banner),
    SectionHeader(SectionHeader),
    FieldRow(FieldRow),
    Paragraph(Paragraph),
    ActivityCard(ActivityCard),
    ImageRow(ImageRow),
    StatGrid(StatGrid),
    Divider(Divider),
    Spacer(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Banner,
    SectionHeader,
    FieldRow,
    Paragraph,
    ActivityCard,
    ImageRow,
    StatGrid,
    Divider,
    Spacer,
}

impl ContentBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Banner(_) => BlockKind::Banner,
            ContentBlock::SectionHeader(_) => BlockKind::SectionHeader,
            ContentBlock::FieldRow(_) => BlockKind::FieldRow,
            ContentBlock::Paragraph(_) => BlockKind::Paragraph,
            ContentBlock::ActivityCard(_) => BlockKind::ActivityCard,
            ContentBlock::ImageRow(_) => BlockKind::ImageRow,
            ContentBlock::StatGrid(_) => BlockKind::StatGrid,
            ContentBlock::Divider(_) => BlockKind::Divider,
            ContentBlock::Spacer(_) => BlockKind::Spacer,
        }
    }

    /// Headers are never left as the last block on a page.
    pub fn is_header(&self) -> bool {
        self.kind().is_header()
    }

    /// Spacing blocks are dropped rather than pushed to a new page.
    pub fn is_spacing(&self) -> bool {
        self.kind().is_spacing()
    }
}

impl BlockKind {
    pub fn is_header(self) -> bool {
        matches!(self, BlockKind::SectionHeader)
    }

    pub fn is_spacing(self) -> bool {
        matches!(self, BlockKind::Divider | BlockKind::Spacer)
    }
}

impl From<Banner> for ContentBlock {
    fn from(b: Banner) -> Self {
        ContentBlock::Banner(b)
    }
}

impl From<Paragraph> for ContentBlock {
    fn from(p: Paragraph) -> Self {
        ContentBlock::Paragraph(p)
    }
}

impl From<SectionHeader> for ContentBlock {
    fn from(h: SectionHeader) -> Self {
        ContentBlock::SectionHeader(h)
    }
}

impl From<FieldRow> for ContentBlock {
    fn from(r: FieldRow) -> Self {
        ContentBlock::FieldRow(r)
    }
}

impl From<ActivityCard> for ContentBlock {
    fn from(c: ActivityCard) -> Self {
        ContentBlock::ActivityCard(c)
    }
}

impl From<ImageRow> for ContentBlock {
    fn from(r: ImageRow) -> Self {
        ContentBlock::ImageRow(r)
    }
}

impl From<StatGrid> for ContentBlock {
    fn from(g: StatGrid) -> Self {
        ContentBlock::StatGrid(g)
    }
}

impl From<Divider> for ContentBlock {
    fn from(d: Divider) -> Self {
        ContentBlock::Divider(d)
    }
}
