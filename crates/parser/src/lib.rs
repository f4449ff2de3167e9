//! Model handling for SDK reference documentation
//!
//! This crate handles the input side of documentation generation:
//!
//! - discovering versioned model files on disk and grouping them by service
//! - translating a raw model file into the normalized `ApiModel` IR
//! - resolving waiter configuration inheritance chains
//!
//! ## Discovery
//!
//! Model files are named `<service>-<YYYY>-<MM>-<DD>.json`. Discovery scans a
//! single directory, silently skips anything that does not match, and groups
//! the matches by service with each group sorted ascending by filename. The
//! version component is a zero-padded ISO date, so the lexicographic order is
//! the chronological order and the last file of a group is the current one.

mod discovery;
pub mod model;
mod translator;
mod waiters;

pub use discovery::{discover_model_files, ModelFile};
pub use model::ModelParser;
pub use translator::{extract_endpoint_prefix, JsonModelTranslator, ModelTranslator};
pub use waiters::{public_waiter_names, WaiterResolver, DEFAULT_WAITER};

use sdkdocs_generator_common::{ApiModel, Result};
use std::path::Path;

/// Parse a single model file into the normalized `ApiModel` IR
///
/// # Arguments
/// * `path` - Path to a `<service>-<version>.json` model file
///
/// # Returns
/// * `ApiModel` - Intermediate representation of the service model
pub fn parse_model_file<P: AsRef<Path>>(path: P) -> Result<ApiModel> {
    let parser = ModelParser::from_file(path)?;
    parser.parse()
}
