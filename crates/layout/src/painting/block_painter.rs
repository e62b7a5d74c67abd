//! Per-block measure-and-paint routines.
//!
//! Each function appends operations relative to the block's top edge and
//! returns the block height.

use super::Frame;
use super::box_painter::{ACCENT_WIDTH, create_background_and_borders};
use crate::blocks::{
    ActivityCard, Banner, Divider, DividerStyle, EmbeddedImage, FieldRow, ImageRow, Paragraph,
    SectionHeader, StatGrid, StyledText,
};
use crate::output::DrawOp;
use crate::style::{Align, TextStyle};
use crate::text::{MeasuredText, TextMeasurer};
use folio_types::{Rect, Size};

/// Gap between a field label and its value.
const FIELD_GUTTER: f32 = 6.0;
const UNDERLINE_GAP: f32 = 2.0;

/// Emits one `Text` op per non-empty line and returns the text height.
fn push_lines(
    ops: &mut Vec<DrawOp>,
    measured: &MeasuredText,
    style: &TextStyle,
    x: f32,
    top: f32,
    width: f32,
    align: Align,
) -> f32 {
    let baseline_offset = style.font.baseline_offset();
    for (i, line) in measured.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let run_width = style.font.text_width(line);
        ops.push(DrawOp::Text {
            x: align.position(x, width, run_width),
            baseline: top + i as f32 * measured.line_height + baseline_offset,
            text: line.clone(),
            style: *style,
        });
    }
    measured.height
}

fn paint_text(
    ops: &mut Vec<DrawOp>,
    measurer: &TextMeasurer,
    text: &StyledText,
    x: f32,
    top: f32,
    width: f32,
    align: Align,
) -> f32 {
    let measured = measurer.measure(&text.text, width, &text.style.font);
    push_lines(ops, &measured, &text.style, x, top, width, align)
}

/// A single line of `ch` repeated across `width`.
fn ascii_rule(ch: char, style: &TextStyle, width: f32) -> String {
    let ch_width = style.font.char_width(ch);
    let count = if ch_width > 0.0 {
        (width / ch_width).floor().max(1.0) as usize
    } else {
        1
    };
    std::iter::repeat_n(ch, count).collect()
}

pub fn paint_banner(
    banner: &Banner,
    frame: Frame,
    measurer: &TextMeasurer,
    ops: &mut Vec<DrawOp>,
) -> f32 {
    let padding = banner.padding.max(0.0);
    let inner_x = frame.x + padding;
    let inner_width = frame.width - 2.0 * padding;

    let mut content = Vec::new();
    let mut y = padding;
    y += paint_text(
        &mut content,
        measurer,
        &banner.title,
        inner_x,
        y,
        inner_width,
        banner.align,
    );
    for line in &banner.lines {
        if line.text.trim().is_empty() {
            continue;
        }
        y += UNDERLINE_GAP;
        y += paint_text(&mut content, measurer, line, inner_x, y, inner_width, banner.align);
    }
    let height = y + padding;

    ops.extend(create_background_and_borders(
        Rect::new(frame.x, 0.0, frame.width, height),
        banner.fill,
        None,
        None,
    ));
    ops.extend(content);
    height
}

pub fn paint_section_header(
    header: &SectionHeader,
    frame: Frame,
    measurer: &TextMeasurer,
    ops: &mut Vec<DrawOp>,
) -> f32 {
    let padding = header.padding.max(0.0);
    let (text_x, text_width) = if header.bar.is_some() {
        (frame.x + padding, frame.width - 2.0 * padding)
    } else {
        (frame.x, frame.width)
    };

    let mut content = Vec::new();
    let mut y = padding;
    y += paint_text(
        &mut content,
        measurer,
        &header.title,
        text_x,
        y,
        text_width,
        Align::Left,
    );

    if let Some(ch) = header.ascii_rule {
        let style = header.title.style;
        let line = ascii_rule(ch, &style, text_width);
        content.push(DrawOp::Text {
            x: text_x,
            baseline: y + style.font.baseline_offset(),
            text: line,
            style,
        });
        y += style.line_height();
    }

    if let Some(rule) = header.underline {
        y += UNDERLINE_GAP;
        let line_y = y + rule.thickness / 2.0;
        content.push(DrawOp::Line {
            from: (frame.x, line_y),
            to: (frame.x + frame.width, line_y),
            color: rule.color,
            width: rule.thickness,
        });
        y += rule.thickness;
    }

    let height = y + padding;
    ops.extend(create_background_and_borders(
        Rect::new(frame.x, 0.0, frame.width, height),
        header.bar,
        None,
        None,
    ));
    ops.extend(content);
    height
}

pub fn paint_field_row(
    row: &FieldRow,
    frame: Frame,
    measurer: &TextMeasurer,
    ops: &mut Vec<DrawOp>,
) -> f32 {
    let label_width = row.label_width.clamp(0.0, frame.width * 0.6);
    let label_height = paint_text(
        ops,
        measurer,
        &row.label,
        frame.x,
        0.0,
        (label_width - FIELD_GUTTER).max(0.0),
        Align::Left,
    );
    let value_height = paint_text(
        ops,
        measurer,
        &row.value,
        frame.x + label_width,
        0.0,
        frame.width - label_width,
        Align::Left,
    );
    label_height.max(value_height)
}

pub fn paint_paragraph(
    paragraph: &Paragraph,
    frame: Frame,
    measurer: &TextMeasurer,
    ops: &mut Vec<DrawOp>,
) -> f32 {
    let indent = paragraph.indent.clamp(0.0, frame.width);
    paint_text(
        ops,
        measurer,
        &paragraph.text,
        frame.x + indent,
        0.0,
        frame.width - indent,
        paragraph.align,
    )
}

pub fn paint_card(
    card: &ActivityCard,
    frame: Frame,
    measurer: &TextMeasurer,
    ops: &mut Vec<DrawOp>,
) -> f32 {
    let chrome = &card.chrome;
    let padding = chrome.padding.max(0.0);
    let accent_width = if chrome.accent.is_some() { ACCENT_WIDTH } else { 0.0 };
    let inner_x = frame.x + accent_width + padding;
    let inner_width = frame.width - accent_width - 2.0 * padding;

    let mut content = Vec::new();
    let mut y = padding;

    let title_font = card.title.style.font;
    let check_size = title_font.size * 0.8;
    let check = chrome.check.filter(|_| card.verified);
    let title_width = if check.is_some() {
        inner_width - check_size - 4.0
    } else {
        inner_width
    };
    let title = measurer.measure(&card.title.text, title_width, &title_font);
    push_lines(
        &mut content,
        &title,
        &card.title.style,
        inner_x,
        y,
        title_width,
        Align::Left,
    );
    if let Some(color) = check {
        content.push(DrawOp::CheckMark {
            rect: Rect::new(
                inner_x + inner_width - check_size,
                y + (title.line_height - check_size) / 2.0,
                check_size,
                check_size,
            ),
            color,
        });
    }
    y += title.height;

    for meta in card.meta.iter().filter(|m| !m.text.trim().is_empty()) {
        y += chrome.gap * 0.5;
        y += paint_text(&mut content, measurer, meta, inner_x, y, inner_width, Align::Left);
    }

    for body in card.body.iter().filter(|b| !b.text.trim().is_empty()) {
        y += chrome.gap;
        y += paint_text(&mut content, measurer, body, inner_x, y, inner_width, Align::Left);
    }

    if !card.images.is_empty() {
        y += chrome.gap;
        y += paint_image_slots(
            &mut content,
            &card.images,
            chrome.image_slots,
            chrome.image_height,
            chrome.gap,
            Frame {
                x: inner_x,
                width: inner_width,
            },
            y,
        );
    }

    let height = y + padding;
    ops.extend(create_background_and_borders(
        Rect::new(frame.x, 0.0, frame.width, height),
        chrome.background,
        chrome.accent,
        chrome.border,
    ));
    ops.extend(content);
    height
}

/// Fits each image into its slot, centered vertically. Returns the row height.
fn paint_image_slots(
    ops: &mut Vec<DrawOp>,
    images: &[EmbeddedImage],
    slots: usize,
    height: f32,
    gap: f32,
    frame: Frame,
    y: f32,
) -> f32 {
    let slots = slots.max(images.len()).max(1);
    let slot_width = (frame.width - gap * (slots - 1) as f32) / slots as f32;
    let slot = Size::new(slot_width.max(0.0), height.max(0.0));
    for (i, embedded) in images.iter().enumerate() {
        let natural = Size::new(embedded.image.width as f32, embedded.image.height as f32);
        let fitted = natural.fit_within(slot);
        ops.push(DrawOp::Image {
            key: embedded.key.clone(),
            rect: Rect::new(
                frame.x + i as f32 * (slot_width + gap),
                y + (slot.height - fitted.height) / 2.0,
                fitted.width,
                fitted.height,
            ),
        });
    }
    slot.height
}

pub fn paint_image_row(row: &ImageRow, frame: Frame, ops: &mut Vec<DrawOp>) -> f32 {
    paint_image_slots(ops, &row.images, row.slots, row.height, row.gap.max(0.0), frame, 0.0)
}

pub fn paint_stat_grid(
    grid: &StatGrid,
    frame: Frame,
    measurer: &TextMeasurer,
    ops: &mut Vec<DrawOp>,
) -> f32 {
    if grid.cells.is_empty() {
        return 0.0;
    }
    let columns = grid.columns.max(1);
    let padding = grid.padding.max(0.0);
    let cell_width = (frame.width - grid.gap * (columns - 1) as f32) / columns as f32;
    let text_width = cell_width - 2.0 * padding;

    let mut y = 0.0;
    for (row_index, row) in grid.cells.chunks(columns).enumerate() {
        if row_index > 0 {
            y += grid.gap;
        }
        let measured: Vec<_> = row
            .iter()
            .map(|cell| {
                (
                    measurer.measure(&cell.value, text_width, &grid.value_style.font),
                    measurer.measure(&cell.label, text_width, &grid.label_style.font),
                )
            })
            .collect();
        let row_height = measured
            .iter()
            .map(|(value, label)| value.height + label.height)
            .fold(0.0, f32::max)
            + 2.0 * padding;

        for (col, (value, label)) in measured.iter().enumerate() {
            let cell_x = frame.x + col as f32 * (cell_width + grid.gap);
            ops.extend(create_background_and_borders(
                Rect::new(cell_x, y, cell_width, row_height),
                grid.fill,
                None,
                None,
            ));
            let text_x = cell_x + padding;
            let top = y + padding;
            push_lines(ops, value, &grid.value_style, text_x, top, text_width, Align::Center);
            push_lines(
                ops,
                label,
                &grid.label_style,
                text_x,
                top + value.height,
                text_width,
                Align::Center,
            );
        }
        y += row_height;
    }
    y
}

pub fn paint_divider(divider: &Divider, frame: Frame, ops: &mut Vec<DrawOp>) -> f32 {
    let margin = divider.margin.max(0.0);
    match divider.style {
        DividerStyle::Rule(rule) => {
            let line_y = margin + rule.thickness / 2.0;
            ops.push(DrawOp::Line {
                from: (frame.x, line_y),
                to: (frame.x + frame.width, line_y),
                color: rule.color,
                width: rule.thickness,
            });
            2.0 * margin + rule.thickness
        }
        DividerStyle::Ascii { ch, style } => {
            ops.push(DrawOp::Text {
                x: frame.x,
                baseline: margin + style.font.baseline_offset(),
                text: ascii_rule(ch, &style, frame.width),
                style,
            });
            2.0 * margin + style.line_height()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{CardChrome, EmbeddedImage, Rule, StatCell};
    use crate::fonts::FontSpec;
    use folio_traits::ResolvedImage;
    use folio_types::Color;
    use std::sync::Arc;

    const FRAME: Frame = Frame {
        x: 50.0,
        width: 400.0,
    };

    fn style() -> TextStyle {
        TextStyle::new(FontSpec::helvetica(10.0).with_line_height(1.2), Color::BLACK)
    }

    fn card(images: usize) -> ActivityCard {
        let image = ResolvedImage {
            width: 40,
            height: 20,
            rgb: Arc::new(vec![0; 40 * 20 * 3]),
        };
        ActivityCard {
            title: StyledText::new("Robotics Club", style()),
            meta: vec![StyledText::new("Club", style())],
            body: vec![StyledText::new("Built a robot.", style())],
            verified: true,
            images: (0..images)
                .map(|i| EmbeddedImage {
                    key: format!("img{}", i),
                    image: image.clone(),
                })
                .collect(),
            chrome: CardChrome {
                check: Some(Color::rgb(0, 160, 0)),
                ..CardChrome::default()
            },
        }
    }

    #[test]
    fn test_card_height_ignores_image_count() {
        let measurer = TextMeasurer::new();
        let mut ops = Vec::new();
        let one = paint_card(&card(1), FRAME, &measurer, &mut ops);
        let three = paint_card(&card(3), FRAME, &measurer, &mut ops);
        let none = paint_card(&card(0), FRAME, &measurer, &mut ops);
        assert_eq!(one, three);
        assert!(none < one);
    }

    #[test]
    fn test_image_row_keeps_its_height_and_slots() {
        let full = card(3).images;
        let mut partial = full.clone();
        partial.remove(1);

        let mut full_ops = Vec::new();
        let mut partial_ops = Vec::new();
        let full_height = paint_image_row(&ImageRow::new(full, 60.0, 3), FRAME, &mut full_ops);
        let partial_height =
            paint_image_row(&ImageRow::new(partial, 60.0, 3), FRAME, &mut partial_ops);

        assert_eq!(full_height, 60.0);
        assert_eq!(partial_height, 60.0);
        assert_eq!(full_ops.len(), 3);
        assert_eq!(partial_ops.len(), 2);
        // Remaining images keep the leading slots.
        assert_eq!(full_ops[0], partial_ops[0]);
    }

    #[test]
    fn test_card_draws_check_only_when_verified() {
        let measurer = TextMeasurer::new();
        let mut ops = Vec::new();
        paint_card(&card(0), FRAME, &measurer, &mut ops);
        assert!(ops.iter().any(|op| matches!(op, DrawOp::CheckMark { .. })));

        let mut unverified = card(0);
        unverified.verified = false;
        let mut ops = Vec::new();
        paint_card(&unverified, FRAME, &measurer, &mut ops);
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::CheckMark { .. })));
    }

    #[test]
    fn test_divider_height() {
        let mut ops = Vec::new();
        let divider = Divider {
            style: DividerStyle::Rule(Rule::new(Color::gray(200), 1.0)),
            margin: 4.0,
        };
        assert_eq!(paint_divider(&divider, FRAME, &mut ops), 9.0);
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn test_ascii_divider_fills_width() {
        let mono = TextStyle::new(FontSpec::courier(10.0), Color::BLACK);
        let mut ops = Vec::new();
        let divider = Divider {
            style: DividerStyle::Ascii { ch: '-', style: mono },
            margin: 0.0,
        };
        paint_divider(&divider, FRAME, &mut ops);
        // 400pt / 6pt per Courier glyph
        assert_eq!(ops[0].text().map(|t| t.len()), Some(66));
    }

    #[test]
    fn test_stat_grid_rows() {
        let grid = StatGrid {
            cells: (0..4).map(|i| StatCell::new(i.to_string(), "Label")).collect(),
            columns: 2,
            value_style: style(),
            label_style: style(),
            fill: None,
            gap: 10.0,
            padding: 5.0,
        };
        let mut ops = Vec::new();
        let height = paint_stat_grid(&grid, FRAME, &TextMeasurer::new(), &mut ops);
        // two rows of (12 + 12 + 10), one gap
        assert!((height - 78.0).abs() < 1e-3);
        assert_eq!(ops.iter().filter(|op| op.text().is_some()).count(), 8);
    }

    #[test]
    fn test_field_row_takes_taller_column() {
        let row = FieldRow {
            label: StyledText::new("Name:", style()),
            value: StyledText::new("word ".repeat(200), style()),
            label_width: 100.0,
        };
        let mut ops = Vec::new();
        let height = paint_field_row(&row, FRAME, &TextMeasurer::new(), &mut ops);
        assert!(height > 12.0);
    }
}
