//! Raw model document type definitions
//!
//! These types represent the structure of versioned service model JSON files.
//! Decoding is tolerant: every section defaults to empty so that partial or
//! trimmed models still parse.

use sdkdocs_generator_common::WaiterConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root model document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawApiModel {
    /// Service metadata
    #[serde(default)]
    pub metadata: RawMetadata,

    /// Operation name to operation definition
    #[serde(default)]
    pub operations: HashMap<String, RawOperation>,

    /// Shape name to shape definition
    #[serde(default)]
    pub shapes: HashMap<String, RawShape>,

    /// Waiter name to waiter configuration, possibly including `__default__`
    #[serde(default)]
    pub waiters: HashMap<String, WaiterConfig>,
}

/// Service metadata block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMetadata {
    /// API version date (e.g., "2006-03-01")
    #[serde(rename = "apiVersion")]
    #[serde(default)]
    pub api_version: Option<String>,

    /// Endpoint prefix (e.g., "s3")
    #[serde(rename = "endpointPrefix")]
    #[serde(default)]
    pub endpoint_prefix: Option<String>,

    /// Human-readable service name
    #[serde(rename = "serviceFullName")]
    #[serde(default)]
    pub service_full_name: Option<String>,

    /// Wire protocol (e.g., "rest-xml", "json")
    #[serde(default)]
    pub protocol: Option<String>,

    /// Service-level documentation prose
    #[serde(default)]
    pub documentation: Option<String>,
}

/// An operation definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawOperation {
    /// Operation name; falls back to the map key when absent
    #[serde(default)]
    pub name: Option<String>,

    /// Operation documentation prose
    #[serde(default)]
    pub documentation: Option<String>,

    /// Input shape reference
    #[serde(default)]
    pub input: Option<RawShapeRef>,

    /// Output shape reference
    #[serde(default)]
    pub output: Option<RawShapeRef>,
}

/// Reference to a shape by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawShapeRef {
    /// Referenced shape name
    pub shape: String,
}

/// A shape definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawShape {
    /// Shape type (e.g., "structure", "string", "integer")
    #[serde(rename = "type")]
    #[serde(default)]
    pub shape_type: Option<String>,

    /// Member name to member definition (structure shapes)
    #[serde(default)]
    pub members: HashMap<String, RawMember>,

    /// Names of required members
    #[serde(default)]
    pub required: Vec<String>,

    /// Shape documentation prose
    #[serde(default)]
    pub documentation: Option<String>,
}

/// A member of a structure shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMember {
    /// Referenced shape name
    #[serde(default)]
    pub shape: Option<String>,

    /// Member documentation prose
    #[serde(default)]
    pub documentation: Option<String>,
}

impl RawApiModel {
    /// Look up a shape definition by reference name
    pub fn resolve_shape_ref(&self, ref_name: &str) -> Option<&RawShape> {
        self.shapes.get(ref_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_parses() {
        let model: RawApiModel = serde_json::from_str("{}").unwrap();
        assert!(model.operations.is_empty());
        assert!(model.waiters.is_empty());
        assert!(model.metadata.api_version.is_none());
    }

    #[test]
    fn test_resolve_shape_ref() {
        let json = r#"{
            "shapes": {
                "BucketName": {"type": "string"}
            }
        }"#;
        let model: RawApiModel = serde_json::from_str(json).unwrap();

        let shape = model.resolve_shape_ref("BucketName").unwrap();
        assert_eq!(shape.shape_type.as_deref(), Some("string"));
        assert!(model.resolve_shape_ref("Missing").is_none());
    }
}
