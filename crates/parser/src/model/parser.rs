//! Model file parser

use super::types::RawApiModel;
use sdkdocs_generator_common::{ApiModel, DocgenError, Result};
use std::fs;
use std::path::Path;

/// Versioned service model parser
///
/// Reads and parses the JSON model files that describe one service version's
/// operations and waiters.
pub struct ModelParser {
    /// Loaded raw model
    raw: RawApiModel,

    /// Endpoint prefix override, when one was extracted out of band
    endpoint_prefix: Option<String>,
}

impl ModelParser {
    /// Load a model from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = ModelParser::from_file("models/s3-2006-03-01.json")?;
    /// let api_model = parser.parse()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DocgenError::Parse(format!(
                "Failed to read model file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a model from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawApiModel = serde_json::from_str(json)
            .map_err(|e| DocgenError::Parse(format!("Failed to parse model JSON: {}", e)))?;

        Ok(Self {
            raw,
            endpoint_prefix: None,
        })
    }

    /// Override the endpoint prefix used when the model metadata lacks one
    pub fn with_endpoint_prefix(mut self, endpoint_prefix: Option<String>) -> Self {
        self.endpoint_prefix = endpoint_prefix;
        self
    }

    /// Convert the raw model into the normalized `ApiModel` IR
    pub fn parse(&self) -> Result<ApiModel> {
        super::converter::convert_raw_to_api_model(&self.raw, self.endpoint_prefix.as_deref())
    }

    /// Get a reference to the underlying raw model
    pub fn raw(&self) -> &RawApiModel {
        &self.raw
    }
}
