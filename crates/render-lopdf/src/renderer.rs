use crate::content::PageContext;
use crate::writer::PdfDocumentWriter;
use folio_layout::{Page, PageGeometry, ResolvedImage, STANDARD_FONTS};
use folio_render_core::utils::to_win_ansi;
use folio_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use lopdf::{dictionary, Dictionary, Object, Stream, StringFormat};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;

const PDF_VERSION: &str = "1.7";

/// A PDF renderer using the `lopdf` library.
///
/// All eight standard Helvetica and Courier faces are registered as
/// `F1`..`F8`; images become `Im1`..`ImN` in key order.
pub struct LopdfRenderer<W: Write + Send> {
    writer: Option<PdfDocumentWriter<W>>,
    font_map: HashMap<&'static str, String>,
    image_map: HashMap<String, String>,
}

impl<W: Write + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        let font_map = STANDARD_FONTS
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, format!("F{}", i + 1)))
            .collect();
        Self {
            writer: None,
            font_map,
            image_map: HashMap::new(),
        }
    }

    fn writer_mut(&mut self) -> Result<&mut PdfDocumentWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let text = |s: &str| Object::String(to_win_ansi(s), StringFormat::Literal);
    let mut dict = dictionary! {
        "Title" => text(&info.title),
        "Producer" => text("folio"),
    };
    if let Some(author) = &info.author {
        dict.set("Author", text(author));
    }
    if let Some(subject) = &info.subject {
        dict.set("Subject", text(subject));
    }
    if let Some(creator) = &info.creator {
        dict.set("Creator", text(creator));
    }
    dict
}

fn image_stream(key: &str, image: &ResolvedImage) -> Result<Stream, RenderError> {
    let expected = image.width as usize * image.height as usize * 3;
    if image.rgb.len() != expected {
        return Err(RenderError::Other(format!(
            "Image '{}' has {} bytes of pixel data, expected {}",
            key,
            image.rgb.len(),
            expected
        )));
    }
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => image.width as i64,
        "Height" => image.height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };
    Ok(Stream::new(dict, image.rgb.to_vec()))
}

impl<W: Write + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        let mut font_dict = Dictionary::new();
        for name in STANDARD_FONTS {
            if let Some(internal_name) = self.font_map.get(name) {
                let single_font_dict = dictionary! {
                    "Type" => "Font", "Subtype" => "Type1", "BaseFont" => name, "Encoding" => "WinAnsiEncoding",
                };
                font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
            }
        }

        let mut pdf = PdfDocumentWriter::new(writer, PDF_VERSION, font_dict);
        pdf.set_info(info_dictionary(info));
        self.writer = Some(pdf);
        self.image_map.clear();
        Ok(())
    }

    fn add_images(&mut self, images: &BTreeMap<String, ResolvedImage>) -> Result<(), RenderError> {
        let mut registered = Vec::with_capacity(images.len());
        let writer = self.writer_mut()?;
        for (i, (key, image)) in images.iter().enumerate() {
            let name = format!("Im{}", i + 1);
            writer.add_xobject(&name, image_stream(key, image)?);
            registered.push((key.clone(), name));
        }
        self.image_map.extend(registered);
        Ok(())
    }

    fn render_page(&mut self, page: &Page, geometry: &PageGeometry) -> Result<(), RenderError> {
        let mut ctx = PageContext::new(geometry.height, &self.font_map, &self.image_map);
        for op in &page.ops {
            ctx.draw(op)?;
        }
        let content = ctx.finish();

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))?;
        let content_id = writer.buffer_content_stream(content)?;
        writer.add_page(content_id, geometry.width, geometry.height);
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        match renderer.writer.take() {
            Some(writer) => {
                log::debug!("Writing PDF with {} page(s)", writer.page_count());
                writer.finish()
            }
            None => Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            )),
        }
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}
