//! Documentation build configuration loading from YAML files
//!
//! This module provides functionality to load documentation build settings
//! from an external YAML metadata file instead of hardcoding them in Rust.

use crate::{DocgenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root structure for documentation build metadata YAML files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocBuildMetadata {
    /// Metadata format version
    pub version: u32,

    /// Output configuration
    #[serde(default)]
    pub output: OutputInfo,

    /// Service selection configuration
    #[serde(default)]
    pub services: ServiceSelection,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputInfo {
    /// Title rendered on the documentation index page
    #[serde(default)]
    pub title: Option<String>,

    /// Whether superseded (non-latest) model versions are documented
    #[serde(default = "default_true")]
    pub document_superseded: bool,

    /// Whether waiter pseudo-methods are documented
    #[serde(default = "default_true")]
    pub include_waiters: bool,
}

/// Service selection configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceSelection {
    /// Service identifiers to include; empty means all discovered services
    #[serde(default)]
    pub include: Vec<String>,

    /// Service identifiers to exclude
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for OutputInfo {
    fn default() -> Self {
        Self {
            title: None,
            document_superseded: true,
            include_waiters: true,
        }
    }
}

impl DocBuildMetadata {
    /// Load metadata from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DocgenError::Config(format!("Failed to read metadata file {:?}: {}", path, e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            DocgenError::Config(format!(
                "Failed to parse metadata YAML from {:?}: {}",
                path, e
            ))
        })
    }

    /// Convert metadata to `DocBuildOptions` for documentation generation
    pub fn to_build_options(&self) -> DocBuildOptions {
        DocBuildOptions {
            title: self
                .output
                .title
                .clone()
                .unwrap_or_else(|| DocBuildOptions::default().title),
            document_superseded: self.output.document_superseded,
            include_waiters: self.output.include_waiters,
            include: self.services.include.clone(),
            exclude: self.services.exclude.clone(),
        }
    }
}

/// Plain options consumed by the documentor and writer
#[derive(Debug, Clone)]
pub struct DocBuildOptions {
    /// Title rendered on the documentation index page
    pub title: String,

    /// Whether superseded (non-latest) model versions are documented
    pub document_superseded: bool,

    /// Whether waiter pseudo-methods are documented
    pub include_waiters: bool,

    /// Service identifiers to include; empty means all discovered services
    pub include: Vec<String>,

    /// Service identifiers to exclude
    pub exclude: Vec<String>,
}

impl Default for DocBuildOptions {
    fn default() -> Self {
        Self {
            title: "API Reference".to_string(),
            document_superseded: true,
            include_waiters: true,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl DocBuildOptions {
    /// Whether a service identifier is selected by the include/exclude lists
    ///
    /// Matching is case-insensitive against the lowercased identifier.
    pub fn selects(&self, service: &str) -> bool {
        let service = service.to_lowercase();
        if self.exclude.iter().any(|s| s.to_lowercase() == service) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|s| s.to_lowercase() == service)
    }
}
