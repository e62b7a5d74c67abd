use crate::output::DrawOp;
use folio_types::{Color, Rect};

/// Width of the accent stripe on the left edge of a box.
pub const ACCENT_WIDTH: f32 = 3.0;
pub const BORDER_WIDTH: f32 = 0.75;

/// Generates background, accent and border operations for a rectangular region.
///
/// Operations are returned in paint order, so they go before the box content.
pub fn create_background_and_borders(
    bounds: Rect,
    background: Option<Color>,
    accent: Option<Color>,
    border: Option<Color>,
) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return ops;
    }

    if let Some(color) = background {
        ops.push(DrawOp::FillRect {
            rect: bounds,
            color,
        });
    }

    if let Some(color) = accent {
        ops.push(DrawOp::FillRect {
            rect: Rect::new(bounds.x, bounds.y, ACCENT_WIDTH, bounds.height),
            color,
        });
    }

    if let Some(color) = border {
        ops.push(DrawOp::StrokeRect {
            rect: bounds,
            color,
            width: BORDER_WIDTH,
        });
    }

    ops
}
