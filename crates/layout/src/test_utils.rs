use crate::blocks::{ContentBlock, Divider, DividerStyle, Paragraph, Rule, SectionHeader, StyledText};
use crate::config::PageGeometry;
use crate::engine::LayoutEngine;
use crate::fonts::FontSpec;
use crate::output::LaidOutDocument;
use crate::style::{FooterSpec, PageChrome, TextStyle};
use folio_types::Color;

/// Line height of [`body_style`], in points.
pub const LINE: f32 = 12.0;

pub fn body_style() -> TextStyle {
    TextStyle::new(FontSpec::helvetica(10.0).with_line_height(1.2), Color::BLACK)
}

/// A 300 x 200 page with 20pt margins: 160pt of usable height.
pub fn small_page() -> PageGeometry {
    PageGeometry {
        width: 300.0,
        height: 200.0,
        top_margin: 20.0,
        bottom_margin: 20.0,
        left_margin: 20.0,
        right_margin: 20.0,
        footer_height: 16.0,
    }
}

pub fn test_chrome() -> PageChrome {
    PageChrome::new(FooterSpec::new(body_style()), 0.0)
}

pub fn create_test_engine() -> LayoutEngine {
    LayoutEngine::new(small_page(), test_chrome()).unwrap()
}

/// A paragraph exactly `lines * LINE` tall.
pub fn lines_block(lines: usize) -> ContentBlock {
    let text = (0..lines)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    Paragraph::new(StyledText::new(text, body_style())).into()
}

pub fn header(title: &str) -> ContentBlock {
    SectionHeader::new(StyledText::new(title, body_style())).into()
}

pub fn divider() -> ContentBlock {
    Divider {
        style: DividerStyle::Rule(Rule::new(Color::gray(180), 1.0)),
        margin: 2.0,
    }
    .into()
}

pub fn paginate(blocks: Vec<ContentBlock>) -> LaidOutDocument {
    let mut engine = create_test_engine();
    engine.place_all(blocks).unwrap();
    engine.finish()
}
