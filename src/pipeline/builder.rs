use super::assembler::DocumentAssembler;
use super::config::{ApplicationLimits, GeneratorConfig, OutputFormat};
use crate::error::GenerateError;
use crate::model::QuestionSet;
use folio_layout::PageGeometry;
use folio_resource::RoutingImageResolver;
use folio_traits::ImageResolver;
use std::fs;
use std::path::{Path, PathBuf};

/// A builder for creating a [`DocumentAssembler`].
#[derive(Debug, Default)]
pub struct AssemblerBuilder {
    config: GeneratorConfig,
    local_images: Option<PathBuf>,
}

impl AssemblerBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            GenerateError::Config(format!("Failed to read config from '{}': {}", path.display(), e))
        })?;
        Ok(self.with_config(GeneratorConfig::from_json(&json)?))
    }

    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.config.page = page;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.config.output = output;
        self
    }

    pub fn with_application_limits(mut self, limits: ApplicationLimits) -> Self {
        self.config.application_limits = limits;
        self
    }

    pub fn with_questions(mut self, questions: QuestionSet) -> Self {
        self.config.questions = questions;
        self
    }

    /// Also resolve relative and `file://` image locations under `base_path`.
    pub fn with_local_images<P: AsRef<Path>>(mut self, base_path: P) -> Self {
        self.local_images = Some(base_path.as_ref().to_path_buf());
        self
    }

    /// Builds an assembler using the routing resolver.
    pub fn build(self) -> Result<DocumentAssembler<RoutingImageResolver>, GenerateError> {
        self.config.validate()?;
        let resolver = RoutingImageResolver::new(self.config.resolver);
        let resolver = match &self.local_images {
            Some(root) => resolver.with_local_root(root),
            None => resolver,
        };
        Ok(DocumentAssembler::new(self.config, resolver))
    }

    /// Builds an assembler around a caller-supplied resolver.
    pub fn build_with_resolver<R: ImageResolver>(
        self,
        resolver: R,
    ) -> Result<DocumentAssembler<R>, GenerateError> {
        self.config.validate()?;
        if self.local_images.is_some() {
            log::warn!("Local image root ignored: a custom resolver was supplied");
        }
        Ok(DocumentAssembler::new(self.config, resolver))
    }
}
