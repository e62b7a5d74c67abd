use super::wrapper::break_lines;
use crate::fonts::FontSpec;

/// The result of wrapping a string into a column.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredText {
    pub lines: Vec<String>,
    pub line_height: f32,
    pub height: f32,
}

impl MeasuredText {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Wraps and measures text with the standard font metrics.
///
/// Measurement is a pure function of its inputs: the same text, width and
/// font always give the same lines, and height is `line_count * line_height`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMeasurer;

impl TextMeasurer {
    pub fn new() -> Self {
        Self
    }

    /// Wraps `text` to `max_width`. Explicit newlines start new lines; blank
    /// text measures zero lines and zero height.
    pub fn measure(&self, text: &str, max_width: f32, font: &FontSpec) -> MeasuredText {
        let line_height = self.line_height(font);
        let text = text.trim();
        if text.is_empty() {
            return MeasuredText {
                lines: Vec::new(),
                line_height,
                height: 0.0,
            };
        }

        let max_width = if max_width.is_nan() { 0.0 } else { max_width.max(0.0) };
        let mut lines = Vec::new();
        for paragraph in text.lines() {
            break_lines(paragraph, max_width, font, &mut lines);
        }

        let height = lines.len() as f32 * line_height;
        MeasuredText {
            lines,
            line_height,
            height,
        }
    }

    pub fn width(&self, text: &str, font: &FontSpec) -> f32 {
        font.text_width(text)
    }

    pub fn line_height(&self, font: &FontSpec) -> f32 {
        font.line_height_pt()
    }
}
