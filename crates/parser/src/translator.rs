//! Model translation
//!
//! The translator is the seam between discovery and the normalized IR: given
//! a discovered model file, return an `ApiModel`. The documentor only depends
//! on the trait, so an external translation tool can sit behind it.

use crate::discovery::ModelFile;
use crate::model::ModelParser;
use regex::Regex;
use sdkdocs_generator_common::{ApiModel, DocgenError, Result};
use std::fs;
use std::sync::OnceLock;

/// How many leading bytes of a model file are scanned for the endpoint prefix
const ENDPOINT_PREFIX_SCAN_LIMIT: usize = 4096;

fn endpoint_prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""endpointPrefix"\s*:\s*"([^"]+)""#).unwrap())
}

/// Extract the `endpointPrefix` value from the first bytes of a model file
///
/// A plain text search, not a JSON parse: the prefix sits near the top of the
/// metadata block, so scanning a bounded window is enough.
pub fn extract_endpoint_prefix(content: &str) -> Option<String> {
    let window = if content.len() <= ENDPOINT_PREFIX_SCAN_LIMIT {
        content
    } else {
        let mut end = ENDPOINT_PREFIX_SCAN_LIMIT;
        while !content.is_char_boundary(end) {
            end -= 1;
        }
        &content[..end]
    };

    endpoint_prefix_pattern()
        .captures(window)
        .map(|captures| captures[1].to_string())
}

/// Translates a raw model file into the normalized `ApiModel` IR
pub trait ModelTranslator {
    /// Translate one discovered model file
    fn translate(&self, file: &ModelFile) -> Result<ApiModel>;
}

/// Default translator for JSON model files
///
/// Reads the file, extracts the endpoint prefix from its first bytes, parses
/// the JSON document, and converts it to an `ApiModel`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelTranslator;

impl ModelTranslator for JsonModelTranslator {
    fn translate(&self, file: &ModelFile) -> Result<ApiModel> {
        let content = fs::read_to_string(&file.path).map_err(|e| {
            DocgenError::Parse(format!(
                "Failed to read model file {}: {}",
                file.path.display(),
                e
            ))
        })?;

        let endpoint_prefix = extract_endpoint_prefix(&content);

        let mut model = ModelParser::from_json(&content)?
            .with_endpoint_prefix(endpoint_prefix)
            .parse()?;

        // The filename is authoritative for the version when the metadata
        // block omits it
        if model.metadata.api_version.is_empty() {
            model.metadata.api_version = file.version.clone();
        }

        Ok(model)
    }
}
