//! Template loading and management

use sdkdocs_generator_common::{DocgenError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    // Register custom filters
    tera.register_filter("anchor", anchor_filter);
    tera.register_filter("kind_label", kind_label_filter);
    tera.register_filter("capitalize", capitalize_filter);

    tera.add_raw_template("index.md", include_str!("../templates/index.md.tera"))
        .map_err(|e| {
            DocgenError::Generation(format!("Failed to load index.md template: {}", e))
        })?;

    tera.add_raw_template("class.md", include_str!("../templates/class.md.tera"))
        .map_err(|e| {
            DocgenError::Generation(format!("Failed to load class.md template: {}", e))
        })?;

    Ok(tera)
}

/// Filter to turn an identifier into a link-safe anchor slug
fn anchor_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("anchor filter expects a string"))?;

    let slug: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    Ok(Value::String(slug.trim_matches('-').to_string()))
}

/// Filter to convert a MethodKind variant name to a display label
fn kind_label_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let kind = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("kind_label filter expects a string"))?;

    let label = match kind {
        "Operation" => "operation",
        "Waiter" => "waiter",
        _ => "method",
    };

    Ok(Value::String(label.to_string()))
}

/// Filter to capitalize first letter
fn capitalize_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("capitalize filter expects a string"))?;

    if s.is_empty() {
        return Ok(Value::String(s.to_string()));
    }

    let mut chars = s.chars();
    let first = chars.next().unwrap().to_uppercase().to_string();
    let rest: String = chars.collect();

    Ok(Value::String(format!("{}{}", first, rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_filter() {
        let value = anchor_filter(&Value::String("wait_until Bucket#Exists".into()), &HashMap::new())
            .unwrap();
        assert_eq!(value.as_str().unwrap(), "wait-until-bucket-exists");
    }

    #[test]
    fn test_kind_label_filter() {
        let value = kind_label_filter(&Value::String("Waiter".into()), &HashMap::new()).unwrap();
        assert_eq!(value.as_str().unwrap(), "waiter");
    }

    #[test]
    fn test_templates_load() {
        assert!(load_templates().is_ok());
    }
}
