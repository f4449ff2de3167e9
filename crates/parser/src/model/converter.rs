//! Converts the raw model document into the normalized `ApiModel` IR

use super::types::{RawApiModel, RawShapeRef};
use sdkdocs_generator_common::{
    ApiModel, MemberShape, OperationShape, Result, ServiceMetadata,
};
use std::collections::BTreeMap;

/// Convert a raw model document into an `ApiModel`
///
/// `endpoint_prefix` supplies the value extracted from the first bytes of the
/// file when the parsed metadata block lacks one.
pub fn convert_raw_to_api_model(
    raw: &RawApiModel,
    endpoint_prefix: Option<&str>,
) -> Result<ApiModel> {
    let metadata = ServiceMetadata {
        endpoint_prefix: raw
            .metadata
            .endpoint_prefix
            .clone()
            .or_else(|| endpoint_prefix.map(String::from))
            .unwrap_or_default(),
        service_full_name: raw.metadata.service_full_name.clone().unwrap_or_default(),
        api_version: raw.metadata.api_version.clone().unwrap_or_default(),
        protocol: raw.metadata.protocol.clone(),
        documentation: raw.metadata.documentation.clone(),
    };

    let mut operations = BTreeMap::new();
    for (key, operation) in &raw.operations {
        let name = operation.name.clone().unwrap_or_else(|| key.clone());
        operations.insert(
            key.clone(),
            OperationShape {
                name,
                documentation: operation.documentation.clone(),
                input: members_of(raw, operation.input.as_ref()),
                output: members_of(raw, operation.output.as_ref()),
            },
        );
    }

    let waiters = raw
        .waiters
        .iter()
        .map(|(name, config)| (name.clone(), config.clone()))
        .collect();

    Ok(ApiModel {
        metadata,
        operations,
        waiters,
    })
}

/// Flatten a referenced structure shape into an ordered member list
///
/// A dangling or absent reference yields an empty list rather than an error;
/// the model is descriptive input for prose, not a validated schema.
fn members_of(raw: &RawApiModel, shape_ref: Option<&RawShapeRef>) -> Vec<MemberShape> {
    let Some(shape_ref) = shape_ref else {
        return Vec::new();
    };
    let Some(shape) = raw.resolve_shape_ref(&shape_ref.shape) else {
        return Vec::new();
    };

    let mut members: Vec<MemberShape> = shape
        .members
        .iter()
        .map(|(member_name, member)| {
            let type_name = member
                .shape
                .as_deref()
                .and_then(|target| raw.resolve_shape_ref(target))
                .and_then(|target_shape| target_shape.shape_type.clone())
                .or_else(|| member.shape.clone())
                .unwrap_or_else(|| "unknown".to_string());

            MemberShape {
                name: member_name.clone(),
                type_name,
                required: shape.required.iter().any(|r| r == member_name),
                documentation: member.documentation.clone(),
            }
        })
        .collect();

    // Required members first, then alphabetical, for stable rendering
    members.sort_by(|a, b| b.required.cmp(&a.required).then(a.name.cmp(&b.name)));
    members
}
