use crate::error::RenderError;
use crate::types::DocumentInfo;
use folio_layout::{LaidOutDocument, Page, PageGeometry, ResolvedImage};
use std::collections::BTreeMap;
use std::io::Write;

/// A trait for document renderers, abstracting the output-format primitives.
///
/// Callers drive a renderer in a fixed order: `begin_document`, `add_images`,
/// one `render_page` per page, then `finish`.
pub trait DocumentRenderer<W: Write + Send> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    fn add_images(&mut self, images: &BTreeMap<String, ResolvedImage>) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &Page, geometry: &PageGeometry) -> Result<(), RenderError>;

    fn finish(self: Box<Self>) -> Result<W, RenderError>;

    /// File extension for documents this renderer produces, without the dot.
    fn extension(&self) -> &'static str;
}

/// Runs `renderer` over every page of `document` and returns the writer.
pub fn render_document<W: Write + Send>(
    mut renderer: Box<dyn DocumentRenderer<W>>,
    document: &LaidOutDocument,
    info: &DocumentInfo,
    writer: W,
) -> Result<W, RenderError> {
    renderer.begin_document(writer, info)?;
    renderer.add_images(&document.images)?;
    for page in &document.pages {
        renderer.render_page(page, &document.geometry)?;
    }
    log::debug!(
        "Rendered {} page(s) as .{}",
        document.page_count(),
        renderer.extension()
    );
    renderer.finish()
}
