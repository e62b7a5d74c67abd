//! The paginating layout engine.
//!
//! Blocks are placed top to bottom in the order given. A block that does not
//! fit the rest of the current page moves to a new page; blocks are never
//! split. Section headers are held back until the block after them is known,
//! and move to a new page together with it; a header with nothing after it is
//! dropped. Dividers and spacers are dropped instead of starting a page.

use crate::LayoutError;
use crate::algorithms::pagination::{check_fit, PageCursor, EPSILON};
use crate::blocks::ContentBlock;
use crate::config::PageGeometry;
use crate::output::{DrawOp, Footer, LaidOutDocument, Page, Placement};
use crate::painting::{prepare_block, Frame, PreparedBlock};
use crate::style::{Align, PageChrome};
use crate::text::TextMeasurer;
use folio_traits::ResolvedImage;
use std::collections::BTreeMap;

pub struct LayoutEngine {
    geometry: PageGeometry,
    chrome: PageChrome,
    measurer: TextMeasurer,
    cursor: PageCursor,
    current: Page,
    pages: Vec<Page>,
    /// Headers (and spacing after them) waiting for the next content block.
    pending: Vec<PreparedBlock>,
    images: BTreeMap<String, ResolvedImage>,
}

impl LayoutEngine {
    pub fn new(geometry: PageGeometry, chrome: PageChrome) -> Result<Self, LayoutError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            chrome,
            measurer: TextMeasurer::new(),
            cursor: PageCursor::new(geometry.top_margin),
            current: Page::new(1),
            pages: Vec::new(),
            pending: Vec::new(),
            images: BTreeMap::new(),
        })
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn measurer(&self) -> &TextMeasurer {
        &self.measurer
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Height of the area between the margins of one page.
    pub fn usable_height(&self) -> f32 {
        self.geometry.usable_height()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            x: self.geometry.left_margin,
            width: self.geometry.content_width(),
        }
    }

    /// The height `block` occupies when placed.
    pub fn measure(&self, block: &ContentBlock) -> Result<f32, LayoutError> {
        Ok(self.prepare(block)?.height)
    }

    /// Whether `block` fits below the cursor on the current page.
    pub fn reserve(&self, block: &ContentBlock) -> Result<bool, LayoutError> {
        let height = self.measure(block)?;
        Ok(self.fits(height))
    }

    pub fn place(&mut self, block: ContentBlock) -> Result<(), LayoutError> {
        let prepared = self.prepare(&block)?;

        if block.is_header() {
            self.pending.push(prepared);
            return Ok(());
        }

        if block.is_spacing() {
            if !self.pending.is_empty() {
                self.pending.push(prepared);
            } else if self.current.is_empty() || !self.fits(prepared.height) {
                log::trace!(
                    "Dropping {:?} at y={:.1} on page {}",
                    prepared.kind,
                    self.cursor.offset,
                    self.cursor.page
                );
            } else {
                self.commit(prepared);
            }
            return Ok(());
        }

        let mut group = std::mem::take(&mut self.pending);
        group.push(prepared);
        self.place_group(group);
        Ok(())
    }

    pub fn place_all<I>(&mut self, blocks: I) -> Result<(), LayoutError>
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        blocks.into_iter().try_for_each(|block| self.place(block))
    }

    /// Draws every footer and returns the finished document. Headers still
    /// held at this point have no content after them and are dropped.
    pub fn finish(mut self) -> LaidOutDocument {
        if !self.pending.is_empty() {
            log::debug!(
                "Dropping {} trailing held block(s) with no content after them",
                self.pending.len()
            );
            self.pending.clear();
        }
        let last = std::mem::replace(&mut self.current, Page::new(0));
        let last = self.finalize_page(last);
        self.pages.push(last);

        log::debug!("Layout finished with {} page(s)", self.pages.len());
        LaidOutDocument {
            geometry: self.geometry,
            pages: self.pages,
            images: self.images,
        }
    }

    fn prepare(&self, block: &ContentBlock) -> Result<PreparedBlock, LayoutError> {
        prepare_block(block, self.frame(), &self.measurer)
    }

    fn fits(&self, height: f32) -> bool {
        !check_fit(self.cursor.offset, height, self.geometry.content_bottom()).should_break
    }

    /// Places blocks that must share a page: held headers plus the block after them.
    fn place_group(&mut self, group: Vec<PreparedBlock>) {
        let spacing = self.chrome.block_spacing * group.len().saturating_sub(1) as f32;
        let needed: f32 = group.iter().map(|b| b.height).sum::<f32>() + spacing;

        if !self.fits(needed) && !self.current.is_empty() {
            if group.len() > 1 {
                log::debug!(
                    "Deferring {} held block(s) to page {} with the block that follows",
                    group.len() - 1,
                    self.cursor.page + 1
                );
            }
            self.break_page();
        }

        let mut group = group.into_iter().peekable();
        // Spacing held after a header is dropped at the top of a page.
        while let Some(block) = group.next_if(|b| b.kind.is_spacing() && self.current.is_empty()) {
            log::trace!("Dropping {:?} at top of page {}", block.kind, self.cursor.page);
        }
        group.for_each(|block| self.commit(block));
    }

    fn commit(&mut self, block: PreparedBlock) {
        let y = self.cursor.offset;
        let overflow = y + block.height > self.geometry.content_bottom() + EPSILON;
        if overflow {
            log::warn!(
                "{:?} block of height {:.1} exceeds the page (usable height {:.1}) on page {}",
                block.kind,
                block.height,
                self.geometry.usable_height(),
                self.cursor.page
            );
        }

        self.current.ops.extend(block.ops.into_iter().map(|mut op| {
            op.translate_y(y);
            op
        }));
        for embedded in block.images {
            self.images.entry(embedded.key).or_insert(embedded.image);
        }
        self.current.placements.push(Placement {
            kind: block.kind,
            y,
            height: block.height,
            overflow,
        });
        self.cursor.advance(block.height + self.chrome.block_spacing);
    }

    fn break_page(&mut self) {
        log::debug!(
            "Page break after page {} at y={:.1}",
            self.cursor.page,
            self.cursor.offset
        );
        self.cursor.next_page(self.geometry.top_margin);
        let finished = std::mem::replace(&mut self.current, Page::new(self.cursor.page));
        let finished = self.finalize_page(finished);
        self.pages.push(finished);
    }

    /// Draws the footer into the top of the bottom margin.
    fn finalize_page(&self, mut page: Page) -> Page {
        page.number = self.pages.len() + 1;
        let spec = &self.chrome.footer;
        let style = spec.style;
        let frame = self.frame();
        let top = self.geometry.content_bottom();
        let footer_height = self.geometry.footer_height;

        if let Some(color) = spec.rule {
            let y = top + footer_height * 0.3;
            page.ops.push(DrawOp::Line {
                from: (frame.x, y),
                to: (frame.x + frame.width, y),
                color,
                width: 0.5,
            });
        }

        let baseline = top + footer_height * 0.75;
        if let Some(label) = &spec.label {
            page.ops.push(DrawOp::Text {
                x: frame.x,
                baseline,
                text: label.clone(),
                style,
            });
        }

        let number_text = spec.page_text(page.number);
        let number_x = match (spec.number_align, &spec.label) {
            (Align::Left, Some(label)) => {
                frame.x + style.font.text_width(label) + style.font.char_width(' ') * 2.0
            }
            (align, _) => align.position(frame.x, frame.width, style.font.text_width(&number_text)),
        };
        page.ops.push(DrawOp::Text {
            x: number_x,
            baseline,
            text: number_text.clone(),
            style,
        });

        page.footer = Some(Footer {
            label: spec.label.clone(),
            page_number: page.number,
            text: number_text,
        });
        page
    }
}
