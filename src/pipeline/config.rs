use crate::error::GenerateError;
use crate::model::QuestionSet;
use folio_layout::PageGeometry;
use folio_resource::ResolverConfig;
use serde::{Deserialize, Serialize};

/// Selects the serialization backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PDF written with `lopdf`.
    #[default]
    Pdf,
    /// Plain text, pages separated by form feeds.
    Text,
}

/// Caps applied by the application-format style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationLimits {
    /// Longest description or impact text, ellipsis included.
    pub description_chars: usize,
    /// Longest insight answer, ellipsis included.
    pub insight_chars: usize,
    pub max_honors: usize,
    pub max_activities: usize,
}

impl Default for ApplicationLimits {
    fn default() -> Self {
        Self {
            description_chars: 150,
            insight_chars: 500,
            max_honors: 5,
            max_activities: 10,
        }
    }
}

/// Settings for a [`DocumentAssembler`](crate::DocumentAssembler).
///
/// Every field has a default, so a JSON document only needs the values it
/// changes:
///
/// ```
/// # use folio::GeneratorConfig;
/// let config = GeneratorConfig::from_json(r#"{ "output": "text", "documentLabel": "Resume" }"#).unwrap();
/// assert_eq!(config.document_label, "Resume");
/// assert_eq!(config.application_limits.max_activities, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub page: PageGeometry,
    pub application_limits: ApplicationLimits,
    pub resolver: ResolverConfig,
    pub output: OutputFormat,
    pub questions: QuestionSet,
    /// Middle part of the output filename and the document title.
    pub document_label: String,
    /// Used in place of the student's name when none is available.
    pub fallback_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            application_limits: ApplicationLimits::default(),
            resolver: ResolverConfig::default(),
            output: OutputFormat::default(),
            questions: QuestionSet::default(),
            document_label: "Portfolio".to_string(),
            fallback_name: "Student".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        self.page.validate()?;
        if self.document_label.trim().is_empty() {
            return Err(GenerateError::Config("documentLabel must not be empty".into()));
        }
        if self.application_limits.description_chars < 4 || self.application_limits.insight_chars < 4 {
            return Err(GenerateError::Config(
                "truncation limits must leave room for text before the ellipsis".into(),
            ));
        }
        Ok(())
    }

    /// Title written into the document metadata, e.g. `Jane Doe Portfolio`.
    pub fn document_title(&self, name: Option<&str>) -> String {
        format!(
            "{} {}",
            name.unwrap_or(self.fallback_name.as_str()),
            self.document_label
        )
    }
}
