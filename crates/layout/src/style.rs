use crate::fonts::FontSpec;
use folio_types::Color;

/// Font plus fill color for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(font: FontSpec, color: Color) -> Self {
        Self { font, color }
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.font.line_height_pt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// X position of a run `run_width` wide inside `[x, x + width]`.
    pub fn position(self, x: f32, width: f32, run_width: f32) -> f32 {
        let slack = (width - run_width).max(0.0);
        match self {
            Align::Left => x,
            Align::Center => x + slack / 2.0,
            Align::Right => x + slack,
        }
    }
}

/// What every page carries in its bottom margin.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterSpec {
    pub style: TextStyle,
    /// Left-aligned label, e.g. the document name.
    pub label: Option<String>,
    /// Word printed before the page number.
    pub page_word: String,
    pub number_align: Align,
    /// Hairline drawn above the footer text.
    pub rule: Option<Color>,
}

impl FooterSpec {
    pub fn new(style: TextStyle) -> Self {
        Self {
            style,
            label: None,
            page_word: "Page".to_string(),
            number_align: Align::Center,
            rule: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_rule(mut self, color: Color) -> Self {
        self.rule = Some(color);
        self
    }

    pub fn with_number_align(mut self, align: Align) -> Self {
        self.number_align = align;
        self
    }

    pub fn page_text(&self, page_number: usize) -> String {
        format!("{} {}", self.page_word, page_number)
    }
}

/// Per-document decoration the engine applies around placed blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct PageChrome {
    pub footer: FooterSpec,
    /// Vertical gap inserted after every placed block.
    pub block_spacing: f32,
}

impl PageChrome {
    pub fn new(footer: FooterSpec, block_spacing: f32) -> Self {
        Self {
            footer,
            block_spacing,
        }
    }
}
