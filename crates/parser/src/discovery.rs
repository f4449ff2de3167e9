//! Model file discovery and grouping
//!
//! Scans a directory of versioned model files and groups them by service
//! identifier, ordered so that the last file of each group is the
//! chronologically latest version.

use regex::Regex;
use sdkdocs_generator_common::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Matches `<segment>-<digits>-<digits>-<digits>.json` where the segment
/// contains no slash or hyphen
fn model_file_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([^/-]+)-(\d+-\d+-\d+)\.json$").unwrap())
}

/// A versioned service model file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFile {
    /// Service identifier segment, case preserved as found on disk
    pub service: String,

    /// Version date (e.g., "2006-03-01")
    pub version: String,

    /// Full path to the model file
    pub path: PathBuf,

    file_name: String,
}

impl ModelFile {
    /// Parse a path into a `ModelFile`, returning `None` when the filename
    /// does not match the model naming pattern
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let captures = model_file_pattern().captures(file_name)?;

        Some(Self {
            service: captures[1].to_string(),
            version: captures[2].to_string(),
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
        })
    }

    /// The raw filename, used as the ordering key within a group
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The version formatted for use inside an identifier (e.g., "2006_03_01")
    pub fn version_token(&self) -> String {
        self.version.replace('-', "_")
    }
}

/// Discover model files in a directory, grouped by service identifier
///
/// Non-matching directory entries are silently skipped; subdirectories are not
/// descended into. Each group is sorted ascending by filename string, which
/// for zero-padded ISO date versions equals chronological order.
///
/// An empty directory yields an empty map. The directory itself is assumed to
/// exist; a read failure surfaces as an IO error.
pub fn discover_model_files<P: AsRef<Path>>(dir: P) -> Result<BTreeMap<String, Vec<ModelFile>>> {
    let mut groups: BTreeMap<String, Vec<ModelFile>> = BTreeMap::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(model_file) = ModelFile::from_path(&path) {
            groups
                .entry(model_file.service.clone())
                .or_default()
                .push(model_file);
        }
    }

    for files in groups.values_mut() {
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    }

    Ok(groups)
}
