use folio_layout::{DrawOp, TextStyle};
use folio_render_core::utils::{flip_y, to_win_ansi};
use folio_render_core::RenderError;
use folio_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::collections::HashMap;

/// Translates one page of draw operations into a PDF content stream.
pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    font_map: &'a HashMap<&'static str, String>,
    image_map: &'a HashMap<String, String>,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
}

fn rgb_operands(color: Color) -> Vec<Object> {
    color.to_unit().into_iter().map(Object::from).collect()
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(
        page_height: f32,
        font_map: &'a HashMap<&'static str, String>,
        image_map: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            font_map,
            image_map,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub(crate) fn draw(&mut self, op: &DrawOp) -> Result<(), RenderError> {
        match op {
            DrawOp::Text {
                x,
                baseline,
                text,
                style,
            } => self.draw_text(*x, *baseline, text, style),
            DrawOp::FillRect { rect, color } => {
                self.set_fill_color(*color);
                self.push_rect(rect);
                self.push("f", vec![]);
                Ok(())
            }
            DrawOp::StrokeRect { rect, color, width } => {
                self.set_stroke(*color, *width);
                self.push_rect(rect);
                self.push("S", vec![]);
                Ok(())
            }
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => {
                self.set_stroke(*color, *width);
                self.push("m", vec![from.0.into(), self.flip(from.1).into()]);
                self.push("l", vec![to.0.into(), self.flip(to.1).into()]);
                self.push("S", vec![]);
                Ok(())
            }
            DrawOp::Image { key, rect } => self.draw_image(key, rect),
            DrawOp::CheckMark { rect, color } => {
                self.draw_check_mark(rect, *color);
                Ok(())
            }
        }
    }

    fn flip(&self, y: f32) -> f32 {
        flip_y(y, self.page_height)
    }

    fn push_rect(&mut self, rect: &Rect) {
        let y = self.flip(rect.bottom());
        self.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", rgb_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.push("RG", rgb_operands(color));
        self.push("w", vec![width.into()]);
    }

    fn set_font(&mut self, style: &TextStyle) -> Result<(), RenderError> {
        let postscript_name = style.font.postscript_name();
        let internal_name = self.font_map.get(postscript_name).ok_or_else(|| {
            RenderError::Other(format!("Font '{}' is not registered", postscript_name))
        })?;

        if self.state.font_name != *internal_name || self.state.font_size != style.font.size {
            let name = internal_name.clone();
            self.push(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), style.font.size.into()],
            );
            self.state.font_name = name;
            self.state.font_size = style.font.size;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: f32,
        baseline: f32,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.set_font(style)?;
        self.set_fill_color(style.color);
        let pdf_y = self.flip(baseline);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }

    fn draw_image(&mut self, key: &str, rect: &Rect) -> Result<(), RenderError> {
        let name = self
            .image_map
            .get(key)
            .ok_or_else(|| RenderError::MissingImage(key.to_string()))?
            .clone();
        let y = self.flip(rect.bottom());
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn draw_check_mark(&mut self, rect: &Rect, color: Color) {
        let point = |fx: f32, fy: f32| -> Vec<Object> {
            vec![
                (rect.x + rect.width * fx).into(),
                flip_y(rect.y + rect.height * fy, self.page_height).into(),
            ]
        };
        let (start, corner, end) = (point(0.15, 0.55), point(0.4, 0.8), point(0.85, 0.2));

        self.push("q", vec![]);
        self.push("J", vec![1.into()]);
        self.push("j", vec![1.into()]);
        self.set_stroke(color, (rect.width * 0.15).max(0.5));
        self.push("m", start);
        self.push("l", corner);
        self.push("l", end);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }
}
