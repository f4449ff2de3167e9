//! Common types and utilities for the Sdkdocs Generator
//!
//! This crate contains the shared data structures, error types, the
//! documentation object model, and the registry interface used across the
//! parser, generator, and CLI components.

mod build_config;
mod registry;

pub use build_config::{DocBuildMetadata, DocBuildOptions, OutputInfo, ServiceSelection};
pub use registry::{ClassEntry, DocRegistry, MemoryRegistry, MethodEntry, RegistryObserver};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during documentation generation
#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Waiter config not found: {0}")]
    WaiterConfigNotFound(String),

    #[error("Waiter extends chain for {0} exceeded the recursion limit")]
    WaiterConfigCycleExceeded(String),

    #[error("Documentation object already registered: {0}")]
    DuplicateObject(String),

    #[error("Documentation object not found: {0}")]
    ObjectNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, DocgenError>;

/// A waiter configuration: field name to value
///
/// One entry exists per named waiter within a service model, plus an optional
/// `__default__` entry supplying fallback fields.
pub type WaiterConfig = BTreeMap<String, serde_json::Value>;

/// Normalized API model produced by model translation
///
/// The intermediate representation every downstream component consumes,
/// regardless of the on-disk model format that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiModel {
    /// Service-level metadata
    pub metadata: ServiceMetadata,

    /// Operation name to its input/output/documentation shape
    pub operations: BTreeMap<String, OperationShape>,

    /// Waiter name to its raw configuration, possibly including `__default__`
    pub waiters: BTreeMap<String, WaiterConfig>,
}

/// Service-level metadata extracted from a model file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMetadata {
    /// Endpoint prefix (e.g., "s3", "dynamodb")
    pub endpoint_prefix: String,

    /// Human-readable service name (e.g., "Amazon Simple Storage Service")
    pub service_full_name: String,

    /// API version date (e.g., "2006-03-01")
    pub api_version: String,

    /// Wire protocol, when the model declares one
    pub protocol: Option<String>,

    /// Service-level documentation prose
    pub documentation: Option<String>,
}

/// A documented API operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationShape {
    /// Operation name as declared by the model (e.g., "HeadBucket")
    pub name: String,

    /// Operation documentation prose
    pub documentation: Option<String>,

    /// Input members
    pub input: Vec<MemberShape>,

    /// Output members
    pub output: Vec<MemberShape>,
}

/// A single input or output member of an operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberShape {
    /// Member name as declared by the model
    pub name: String,

    /// Type name (e.g., "string", "structure", or a shape name)
    pub type_name: String,

    /// Whether the member is required
    pub required: bool,

    /// Member documentation prose
    pub documentation: Option<String>,
}

/// A top-level documentation class
///
/// One class is registered per documented service version; the chronologically
/// latest version of a service is registered without a version suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocClass {
    /// Class identifier (e.g., "s3" or "s3_2006_03_01")
    pub identifier: String,

    /// Structured docstring
    pub docstring: Docstring,
}

/// The kind of a documented method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodKind {
    /// A regular API operation
    Operation,
    /// A polling wait-until pseudo-method derived from a waiter config
    Waiter,
}

/// A documented method under a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMethod {
    /// Method name (e.g., "head_bucket", "wait_until_bucket_exists")
    pub name: String,

    /// Whether this documents an operation or a waiter pseudo-method
    pub kind: MethodKind,

    /// Rendered call signature
    pub signature: String,

    /// Typed parameters
    pub parameters: Vec<DocParameter>,

    /// Structured docstring
    pub docstring: Docstring,
}

/// A documented method parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocParameter {
    /// Parameter name
    pub name: String,

    /// Type name
    pub type_name: String,

    /// Whether the parameter is required
    pub required: bool,

    /// Parameter description
    pub description: Option<String>,
}

/// A (key, value) tag attached to a documentation object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    /// Tag name (e.g., "api_version", "operation")
    pub name: String,

    /// Tag value
    pub value: String,
}

impl DocTag {
    /// Build a tag from any displayable value
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// A structured docstring: summary, ordered sections, and tags
///
/// Built by pure constructor functions in the generator crate and attached to
/// registry objects as a value, decoupled from the registration step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docstring {
    /// One-line summary
    pub summary: String,

    /// Ordered prose sections
    pub sections: Vec<DocSection>,

    /// Docstring-level tags
    pub tags: Vec<DocTag>,
}

/// A titled docstring section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    /// Section title (e.g., "Parameters", "Polling")
    pub title: String,

    /// Section body, markdown prose
    pub body: String,
}

impl DocSection {
    /// Build a section from a title and body
    pub fn new(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
        }
    }
}
