//! Plain-text renderer.
//!
//! Writes each page's text runs in reading order, one output line per
//! baseline, with pages separated by form feeds. Runs sharing a baseline
//! are padded toward their horizontal position. Images become `[image]`.

use folio_layout::{DrawOp, Page, PageGeometry, ResolvedImage};
use folio_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use std::collections::BTreeMap;
use std::io::Write;

/// Approximate width of one output column, in points.
const COLUMN_WIDTH: f32 = 6.0;
/// Runs whose baselines differ by less than this share an output line.
const BASELINE_TOLERANCE: f32 = 1.0;
pub const IMAGE_PLACEHOLDER: &str = "[image]";

pub struct TextRenderer<W: Write + Send> {
    writer: Option<W>,
    pages_written: usize,
}

impl<W: Write + Send> Default for TextRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> TextRenderer<W> {
    pub fn new() -> Self {
        Self {
            writer: None,
            pages_written: 0,
        }
    }
}

struct Run {
    y: f32,
    x: f32,
    text: String,
}

/// Collects a page's runs into lines, top to bottom.
fn page_lines(page: &Page, geometry: &PageGeometry) -> Vec<String> {
    let mut runs: Vec<Run> = page
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                x, baseline, text, ..
            } if !text.trim().is_empty() => Some(Run {
                y: *baseline,
                x: *x,
                text: text.clone(),
            }),
            DrawOp::Image { rect, .. } => Some(Run {
                y: rect.y,
                x: rect.x,
                text: IMAGE_PLACEHOLDER.to_string(),
            }),
            _ => None,
        })
        .collect();
    runs.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut lines: Vec<String> = Vec::new();
    let mut line_y: Option<f32> = None;
    for run in runs {
        let column = ((run.x - geometry.left_margin).max(0.0) / COLUMN_WIDTH).round() as usize;
        match line_y {
            Some(y) if (run.y - y).abs() < BASELINE_TOLERANCE => {
                if let Some(line) = lines.last_mut() {
                    let width = line.chars().count();
                    let pad = if column > width { column - width } else { 1 };
                    line.extend(std::iter::repeat_n(' ', pad));
                    line.push_str(&run.text);
                }
            }
            _ => {
                let mut line = " ".repeat(column);
                line.push_str(&run.text);
                lines.push(line);
                line_y = Some(run.y);
            }
        }
    }
    lines
}

impl<W: Write + Send> DocumentRenderer<W> for TextRenderer<W> {
    fn begin_document(&mut self, mut writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        log::debug!("Starting text document '{}'", info.title);
        // Title is carried by the document content itself
        writer.flush()?;
        self.writer = Some(writer);
        self.pages_written = 0;
        Ok(())
    }

    fn add_images(&mut self, _images: &BTreeMap<String, ResolvedImage>) -> Result<(), RenderError> {
        Ok(())
    }

    fn render_page(&mut self, page: &Page, geometry: &PageGeometry) -> Result<(), RenderError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))?;
        if self.pages_written > 0 {
            writer.write_all(b"\x0C\n")?;
        }
        for line in page_lines(page, geometry) {
            writeln!(writer, "{}", line.trim_end())?;
        }
        self.pages_written += 1;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut writer = self.writer.ok_or_else(|| {
            RenderError::Other("Document was never started with begin_document".into())
        })?;
        writer.flush()?;
        Ok(writer)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_layout::{FontSpec, TextStyle};
    use folio_render_core::render_document;
    use folio_types::{Color, Rect};
    use folio_layout::LaidOutDocument;

    fn text(x: f32, baseline: f32, s: &str) -> DrawOp {
        DrawOp::Text {
            x,
            baseline,
            text: s.to_string(),
            style: TextStyle::new(FontSpec::courier(10.0), Color::BLACK),
        }
    }

    fn document(pages: Vec<Vec<DrawOp>>) -> LaidOutDocument {
        LaidOutDocument {
            geometry: PageGeometry::a4(),
            pages: pages
                .into_iter()
                .enumerate()
                .map(|(i, ops)| Page {
                    ops,
                    ..Page::new(i + 1)
                })
                .collect(),
            images: BTreeMap::new(),
        }
    }

    fn render(doc: &LaidOutDocument) -> String {
        let renderer: Box<dyn DocumentRenderer<Vec<u8>>> = Box::new(TextRenderer::new());
        let bytes = render_document(renderer, doc, &DocumentInfo::new("t"), Vec::new()).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_reading_order() {
        let doc = document(vec![vec![
            text(50.0, 200.0, "second"),
            text(50.0, 100.0, "first"),
            text(50.0, 300.0, "third"),
        ]]);
        assert_eq!(render(&doc), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_runs_on_one_baseline_share_a_line() {
        let doc = document(vec![vec![
            text(170.0, 100.0, "Jane Doe"),
            text(50.0, 100.0, "Name:"),
        ]]);
        // 120pt right of the margin is column 20
        assert_eq!(render(&doc), format!("Name:{}Jane Doe\n", " ".repeat(15)));
    }

    #[test]
    fn test_pages_separated_by_form_feed() {
        let doc = document(vec![vec![text(50.0, 100.0, "one")], vec![text(50.0, 100.0, "two")]]);
        assert_eq!(render(&doc), "one\n\x0C\ntwo\n");
    }

    #[test]
    fn test_images_become_placeholders() {
        let doc = document(vec![vec![
            text(50.0, 100.0, "Science Fair"),
            DrawOp::Image {
                key: "img".to_string(),
                rect: Rect::new(50.0, 120.0, 40.0, 40.0),
            },
        ]]);
        assert_eq!(render(&doc), "Science Fair\n[image]\n");
    }

    #[test]
    fn test_extension() {
        assert_eq!(TextRenderer::<Vec<u8>>::new().extension(), "txt");
    }
}
