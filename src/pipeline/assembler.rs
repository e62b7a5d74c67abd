use super::config::{GeneratorConfig, OutputFormat};
use super::filename::document_filename;
use crate::error::GenerateError;
use crate::model::ContentModel;
use crate::styles::DocumentStyle;
use folio_layout::LaidOutDocument;
use folio_render_core::{render_document, DocumentInfo, DocumentRenderer};
use folio_render_lopdf::LopdfRenderer;
use folio_render_text::TextRenderer;
use folio_resource::RoutingImageResolver;
use folio_traits::ImageResolver;
use folio_types::PortfolioInput;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// A finished document. Nothing is produced unless every stage succeeded.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub style: DocumentStyle,
    pub page_count: usize,
    /// The pages as laid out, before serialization.
    pub layout: LaidOutDocument,
}

/// Produces one document per [`generate`](Self::generate) call.
///
/// Only one generation may run at a time per assembler; a second call made
/// while one is in flight fails with [`GenerateError::AlreadyRunning`].
pub struct DocumentAssembler<R: ImageResolver> {
    config: GeneratorConfig,
    resolver: R,
    in_flight: AtomicBool,
}

impl DocumentAssembler<RoutingImageResolver> {
    /// An assembler that fetches `http(s)` images with the configured limits.
    pub fn with_config(config: GeneratorConfig) -> Self {
        let resolver = RoutingImageResolver::new(config.resolver);
        Self::new(config, resolver)
    }
}

impl Default for DocumentAssembler<RoutingImageResolver> {
    fn default() -> Self {
        Self::with_config(GeneratorConfig::default())
    }
}

impl<R: ImageResolver> DocumentAssembler<R> {
    pub fn new(config: GeneratorConfig, resolver: R) -> Self {
        Self {
            config,
            resolver,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Whether a generation is currently running.
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Builds the content model from a raw payload with this assembler's
    /// question set.
    pub fn model_from_input(&self, input: PortfolioInput) -> ContentModel {
        ContentModel::builder()
            .questions(self.config.questions.clone())
            .input(input)
            .build()
    }

    pub async fn generate(
        &self,
        model: &ContentModel,
        style: DocumentStyle,
    ) -> Result<GeneratedDocument, GenerateError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        let start = Instant::now();
        info!(
            "Generating {} document ({} entries, {} insights)",
            style,
            model.entries.len(),
            model.insights.len()
        );

        self.config.validate()?;
        let layout = style.lay_out(model, &self.resolver, &self.config).await?;
        debug!(
            "Layout produced {} page(s) in {:.2?}",
            layout.page_count(),
            start.elapsed()
        );

        let name = model.profile.name();
        let (bytes, extension) = self.serialize(&layout, name)?;
        let filename = document_filename(
            name,
            &self.config.fallback_name,
            &self.config.document_label,
            style,
            extension,
        );

        info!(
            "Generated {} ({} page(s), {} bytes) in {:.2?}",
            filename,
            layout.page_count(),
            bytes.len(),
            start.elapsed()
        );
        Ok(GeneratedDocument {
            bytes,
            filename,
            style,
            page_count: layout.page_count(),
            layout,
        })
    }

    /// Runs [`generate`](Self::generate) to completion on a fresh
    /// current-thread runtime, for callers outside an async context.
    pub fn generate_blocking(
        &self,
        model: &ContentModel,
        style: DocumentStyle,
    ) -> Result<GeneratedDocument, GenerateError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GenerateError::Config(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.generate(model, style))
    }

    fn serialize(
        &self,
        layout: &LaidOutDocument,
        name: Option<&str>,
    ) -> Result<(Vec<u8>, &'static str), GenerateError> {
        let renderer: Box<dyn DocumentRenderer<Vec<u8>>> = match self.config.output {
            OutputFormat::Pdf => Box::new(LopdfRenderer::new()),
            OutputFormat::Text => Box::new(TextRenderer::new()),
        };
        let extension = renderer.extension();
        let info = DocumentInfo::new(self.config.document_title(name))
            .with_subject(format!("{} document", self.config.document_label));
        let info = match name {
            Some(author) => info.with_author(author),
            None => info,
        };
        let bytes = render_document(renderer, layout, &info, Vec::new())?;
        Ok((bytes, extension))
    }
}

/// Holds the in-flight flag for the duration of one generation.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, GenerateError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GenerateError::AlreadyRunning)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
