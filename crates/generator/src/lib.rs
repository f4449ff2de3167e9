//! Documentation emission for the Sdkdocs Generator
//!
//! This crate transforms translated service models into documentation
//! objects and renders the resulting registry to a set of reference pages.

pub mod docstring;
pub mod documentor;
mod templates;

pub use documentor::{ApiDocumentor, DocumentorReport, SkippedModel, WaiterFailure};

use sdkdocs_generator_common::{DocgenError, MemoryRegistry, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};

/// Reference page writer
///
/// Renders the contents of an in-memory registry into an output directory:
/// an index page plus one page per documented class.
pub struct DocSetWriter {
    tera: Tera,
    title: String,
}

/// Index table row for one documented class
#[derive(Debug, Serialize)]
struct IndexRow {
    identifier: String,
    api_version: String,
    methods: usize,
    summary: String,
}

impl DocSetWriter {
    /// Create a new writer with the given index page title
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            tera,
            title: title.into(),
        })
    }

    /// Render the registry contents into `output_dir`
    pub fn write_to_directory(&self, registry: &MemoryRegistry, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir).map_err(|e| {
            DocgenError::Generation(format!("Failed to create output directory: {}", e))
        })?;

        self.write_index(registry, output_dir)?;

        for entry in registry.classes() {
            let mut context = Context::new();
            context.insert("entry", entry);

            let rendered = self
                .tera
                .render("class.md", &context)
                .map_err(|e| DocgenError::Generation(format!("Template error: {}", e)))?;

            let output_path = output_dir.join(format!("{}.md", entry.class.identifier));
            fs::write(output_path, rendered).map_err(|e| {
                DocgenError::Generation(format!(
                    "Failed to write page for {}: {}",
                    entry.class.identifier, e
                ))
            })?;
        }

        Ok(())
    }

    fn write_index(&self, registry: &MemoryRegistry, output_dir: &Path) -> Result<()> {
        let rows: Vec<IndexRow> = registry
            .classes()
            .map(|entry| IndexRow {
                identifier: entry.class.identifier.clone(),
                api_version: entry
                    .tags
                    .iter()
                    .find(|tag| tag.name == "api_version")
                    .map(|tag| tag.value.clone())
                    .unwrap_or_default(),
                methods: entry.methods.len(),
                summary: entry.class.docstring.summary.clone(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("classes", &rows);

        let rendered = self
            .tera
            .render("index.md", &context)
            .map_err(|e| DocgenError::Generation(format!("Template error: {}", e)))?;

        fs::write(output_dir.join("index.md"), rendered)
            .map_err(|e| DocgenError::Generation(format!("Failed to write index.md: {}", e)))?;

        Ok(())
    }
}
