use folio_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// Buffers PDF objects in a `lopdf::Document` and writes them out on `finish`.
///
/// The pages, resources and catalog objects get their ids up front so page
/// dictionaries can reference them before they exist.
pub struct PdfDocumentWriter<W: Write> {
    writer: W,
    document: Document,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    font_dict: Dictionary,
    xobject_dict: Dictionary,
    page_ids: Vec<ObjectId>,
    info: Option<Dictionary>,
}

impl<W: Write> PdfDocumentWriter<W> {
    pub fn new(writer: W, version: &str, font_dict: Dictionary) -> Self {
        let mut document = Document::with_version(version);
        let resources_id = document.new_object_id();
        let pages_id = document.new_object_id();
        let catalog_id = document.new_object_id();

        Self {
            writer,
            document,
            catalog_id,
            pages_id,
            resources_id,
            font_dict,
            xobject_dict: Dictionary::new(),
            page_ids: Vec::new(),
            info: None,
        }
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        self.document.add_object(object)
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    /// Registers an image XObject under `name` in the shared resources.
    pub fn add_xobject(&mut self, name: &str, stream: Stream) -> ObjectId {
        let id = self.buffer_object(Object::Stream(stream));
        self.xobject_dict.set(name.as_bytes(), Object::Reference(id));
        id
    }

    pub fn add_page(&mut self, content_id: ObjectId, page_width: f32, page_height: f32) -> ObjectId {
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.buffer_object(page_dict.into());
        self.page_ids.push(page_id);
        page_id
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    pub fn finish(mut self) -> Result<W, RenderError> {
        let mut resources = dictionary! { "Font" => std::mem::replace(&mut self.font_dict, Dictionary::new()) };
        if !self.xobject_dict.is_empty() {
            resources.set("XObject", std::mem::replace(&mut self.xobject_dict, Dictionary::new()));
        }
        self.document
            .objects
            .insert(self.resources_id, resources.into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.document.objects.insert(self.catalog_id, catalog_dict.into());
        self.document.trailer.set("Root", self.catalog_id);

        if let Some(info) = self.info.take() {
            let info_id = self.document.add_object(info);
            self.document.trailer.set("Info", info_id);
        }

        self.document.compress();
        self.document.save_to(&mut self.writer)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
