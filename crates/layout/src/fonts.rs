//! Standard PDF font metrics.
//!
//! Documents only use the base-14 Helvetica and Courier faces, so no font
//! files are loaded or embedded. Advance widths come from the Adobe AFM files
//! in thousandths of an em.

use serde::{Deserialize, Serialize};

/// Every font a document may reference, in the order renderers register them.
pub const STANDARD_FONTS: [&str; 8] = [
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Helvetica,
    Courier,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub family: FontFamily,
    pub bold: bool,
    pub italic: bool,
    pub size: f32,
    /// Line height as a multiple of `size`.
    pub line_height: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::helvetica(10.0)
    }
}

impl FontSpec {
    pub const DEFAULT_LINE_HEIGHT: f32 = 1.3;

    pub const fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            bold: false,
            italic: false,
            size,
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }

    pub const fn helvetica(size: f32) -> Self {
        Self::new(FontFamily::Helvetica, size)
    }

    pub const fn courier(size: f32) -> Self {
        Self::new(FontFamily::Courier, size)
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn postscript_name(&self) -> &'static str {
        let index = match self.family {
            FontFamily::Helvetica => 0,
            FontFamily::Courier => 4,
        } + match (self.bold, self.italic) {
            (false, false) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (true, true) => 3,
        };
        STANDARD_FONTS[index]
    }

    /// Distance between consecutive baselines, in points.
    pub fn line_height_pt(&self) -> f32 {
        self.size * self.line_height
    }

    /// Offset from the top of a line box to its baseline.
    pub fn baseline_offset(&self) -> f32 {
        (self.line_height_pt() - self.size) / 2.0 + self.size * 0.8
    }

    pub fn char_width(&self, ch: char) -> f32 {
        glyph_units(self.family, self.bold, ch) as f32 * self.size / 1000.0
    }

    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_width(ch)).sum()
    }
}

fn glyph_units(family: FontFamily, bold: bool, ch: char) -> u16 {
    if family == FontFamily::Courier {
        return 600;
    }
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    match ch {
        ' '..='~' => table[ch as usize - 32],
        '\u{2022}' => 350,
        '\u{2013}' => 556,
        '\u{2014}' | '\u{2026}' => 1000,
        '\u{2018}' | '\u{2019}' => if bold { 278 } else { 222 },
        '\u{201C}' | '\u{201D}' => if bold { 500 } else { 333 },
        '\u{00B7}' => 278,
        '\u{2713}' | '\u{2714}' => 833,
        _ => 556,
    }
}

// ASCII 32..=126
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];
