pub mod fixtures;
pub mod pdf_assertions;

use folio::traits::{ImageResolver, InMemoryImageResolver, ResolveError, ResolvedImage};
use folio::{
    ContentModel, DocumentAssembler, DocumentStyle, GenerateError, GeneratedDocument,
    GeneratorConfig,
};
use lopdf::Document as LopdfDocument;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generates `model` as a PDF with default settings and an in-memory resolver.
pub async fn generate(
    model: &ContentModel,
    style: DocumentStyle,
) -> Result<GeneratedDocument, GenerateError> {
    let assembler = DocumentAssembler::new(GeneratorConfig::default(), InMemoryImageResolver::new());
    assembler.generate(model, style).await
}

/// Every text run of the laid-out document, in drawing order.
pub fn text_runs(doc: &GeneratedDocument) -> Vec<String> {
    doc.layout
        .pages
        .iter()
        .flat_map(|page| page.text_runs())
        .map(str::to_string)
        .collect()
}

/// Resolver over an in-memory store that records every URL it is asked for.
#[derive(Debug, Default)]
pub struct RecordingResolver {
    pub store: InMemoryImageResolver,
    requested: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch sleeps for `delay` before answering.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl ImageResolver for RecordingResolver {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<ResolvedImage, ResolveError>> + Send {
        self.requested.lock().unwrap().push(url.to_string());
        let delay = self.delay;
        let result = self.store.fetch(url);
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            result.await
        }
    }

    fn name(&self) -> &'static str {
        "RecordingResolver"
    }
}
