//! Raw service model parsing
//!
//! Handles the on-disk JSON model format: serde types for the raw document,
//! a parser wrapper, and conversion into the normalized `ApiModel` IR.

mod converter;
mod parser;
mod types;

pub use converter::convert_raw_to_api_model;
pub use parser::ModelParser;
pub use types::{RawApiModel, RawMember, RawMetadata, RawOperation, RawShape, RawShapeRef};
