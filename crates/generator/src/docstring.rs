//! Docstring construction
//!
//! Pure builders, one per documentation-object kind. Each takes a typed input
//! record and returns a structured `Docstring`, decoupled from the registry
//! attachment step.

use sdkdocs_generator_common::{
    DocParameter, DocSection, DocTag, Docstring, OperationShape, ServiceMetadata, WaiterConfig,
};

/// Input record for a service class docstring
#[derive(Debug, Clone)]
pub struct ServiceDocInput<'a> {
    /// Class identifier the docstring is built for
    pub class_identifier: &'a str,

    /// Service metadata from the translated model
    pub metadata: &'a ServiceMetadata,

    /// Model version date taken from the filename
    pub version: &'a str,

    /// Whether this is the current (latest) version of the service
    pub current: bool,

    /// Number of documented operations
    pub operation_count: usize,
}

/// Build the docstring for a service class
pub fn service_docstring(input: &ServiceDocInput) -> Docstring {
    let display_name = if input.metadata.service_full_name.is_empty() {
        input.class_identifier
    } else {
        &input.metadata.service_full_name
    };

    let summary = if input.current {
        format!("Client reference for {}.", display_name)
    } else {
        format!(
            "Client reference for {} (API version {}).",
            display_name, input.version
        )
    };

    let mut sections = Vec::new();
    match &input.metadata.documentation {
        Some(documentation) => sections.push(DocSection::new("Overview", documentation.clone())),
        None => sections.push(DocSection::new(
            "Overview",
            format!(
                "Provides {} documented operations for {}.",
                input.operation_count, display_name
            ),
        )),
    }
    if !input.current {
        sections.push(DocSection::new(
            "Versioning",
            format!(
                "This class documents API version {} and is superseded by a newer model. \
                 The unversioned class documents the current API.",
                input.version
            ),
        ));
    }

    // `service` and `api_version` are attached as registry tags by the
    // documentor; the docstring only carries what the model itself declares
    let mut tags = Vec::new();
    if !input.metadata.endpoint_prefix.is_empty() {
        tags.push(DocTag::new(
            "endpoint_prefix",
            input.metadata.endpoint_prefix.clone(),
        ));
    }
    if let Some(protocol) = &input.metadata.protocol {
        tags.push(DocTag::new("protocol", protocol.clone()));
    }

    Docstring {
        summary,
        sections,
        tags,
    }
}

/// Build the docstring for an operation method
pub fn method_docstring(operation: &OperationShape) -> Docstring {
    let summary = operation
        .documentation
        .as_deref()
        .map(first_sentence)
        .unwrap_or_else(|| format!("Calls the {} operation.", operation.name));

    let mut sections = Vec::new();

    if !operation.input.is_empty() {
        let body = operation
            .input
            .iter()
            .map(|member| {
                let requirement = if member.required { "required" } else { "optional" };
                match &member.documentation {
                    Some(doc) => format!(
                        "- `{}` ({}, {}): {}",
                        member.name, member.type_name, requirement, doc
                    ),
                    None => format!("- `{}` ({}, {})", member.name, member.type_name, requirement),
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(DocSection::new("Parameters", body));
    }

    if !operation.output.is_empty() {
        let body = operation
            .output
            .iter()
            .map(|member| match &member.documentation {
                Some(doc) => format!("- `{}` ({}): {}", member.name, member.type_name, doc),
                None => format!("- `{}` ({})", member.name, member.type_name),
            })
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(DocSection::new("Returns", body));
    }

    Docstring {
        summary,
        sections,
        tags: vec![DocTag::new("operation", operation.name.clone())],
    }
}

/// Input record for a waiter pseudo-method docstring
#[derive(Debug, Clone)]
pub struct WaiterDocInput<'a> {
    /// Waiter name as declared by the model (e.g., "BucketExists")
    pub waiter_name: &'a str,

    /// Fully resolved waiter configuration
    pub config: &'a WaiterConfig,
}

/// Build the docstring for a waiter pseudo-method
pub fn waiter_docstring(input: &WaiterDocInput) -> Docstring {
    let operation = config_str(input.config, "operation");
    let interval = config_display(input.config, "interval");
    let max_attempts = config_display(input.config, "maxAttempts");

    let summary = match &operation {
        Some(operation) => format!(
            "Polls {} until the {} state is reached.",
            operation, input.waiter_name
        ),
        None => format!("Polls until the {} state is reached.", input.waiter_name),
    };

    let mut polling = String::new();
    if let (Some(interval), Some(max_attempts)) = (&interval, &max_attempts) {
        polling = format!(
            "Polls every {} seconds, giving up after {} attempts.",
            interval, max_attempts
        );
    }

    let mut sections = Vec::new();
    if !polling.is_empty() {
        sections.push(DocSection::new("Polling", polling));
    }

    let mut tags = Vec::new();
    if let Some(operation) = operation {
        tags.push(DocTag::new("operation", operation));
    }
    if let Some(interval) = interval {
        tags.push(DocTag::new("interval", interval));
    }
    if let Some(max_attempts) = max_attempts {
        tags.push(DocTag::new("max_attempts", max_attempts));
    }

    Docstring {
        summary,
        sections,
        tags,
    }
}

/// Render the call signature for an operation method
///
/// Required parameters appear bare; optional ones carry a `?` suffix.
pub fn operation_signature(method_name: &str, operation: &OperationShape) -> String {
    let parameters = operation
        .input
        .iter()
        .map(|member| {
            if member.required {
                member.name.clone()
            } else {
                format!("{}?", member.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}({})", method_name, parameters)
}

/// Convert operation input members into documented parameters
pub fn operation_parameters(operation: &OperationShape) -> Vec<DocParameter> {
    operation
        .input
        .iter()
        .map(|member| DocParameter {
            name: member.name.clone(),
            type_name: member.type_name.clone(),
            required: member.required,
            description: member.documentation.clone(),
        })
        .collect()
}

/// Method name for a waiter pseudo-method (e.g., "wait_until_bucket_exists")
pub fn waiter_method_name(waiter_name: &str) -> String {
    format!("wait_until_{}", snake_case(waiter_name))
}

/// Method name for an operation (e.g., "head_bucket" from "HeadBucket")
pub fn operation_method_name(operation_name: &str) -> String {
    snake_case(operation_name)
}

/// Convert a name to snake_case for use as a method identifier
fn snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let should_add_underscore = i > 0
                && (chars[i - 1].is_lowercase()
                    || chars[i - 1].is_ascii_digit()
                    || (i + 1 < chars.len() && chars[i + 1].is_lowercase()));
            if should_add_underscore && !result.ends_with('_') {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
        } else if ch == '-' || ch == ' ' || ch == '.' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else {
            result.push(ch);
        }
    }

    while result.contains("__") {
        result = result.replace("__", "_");
    }

    result.trim_matches('_').to_string()
}

fn first_sentence(text: &str) -> String {
    match text.find(". ") {
        Some(index) => text[..=index].to_string(),
        None => text.to_string(),
    }
}

fn config_str(config: &WaiterConfig, field: &str) -> Option<String> {
    config
        .get(field)
        .and_then(|value| value.as_str())
        .map(String::from)
}

fn config_display(config: &WaiterConfig, field: &str) -> Option<String> {
    config.get(field).map(|value| match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
