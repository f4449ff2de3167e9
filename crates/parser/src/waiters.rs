//! Waiter configuration resolution
//!
//! A waiter may `extends` another named waiter, or implicitly extend the
//! `__default__` entry. Resolution flattens that chain with child-overrides-
//! parent semantics: the parent's resolved fields supply defaults, and every
//! key present on the child overwrites.

use sdkdocs_generator_common::{DocgenError, Result, WaiterConfig};
use std::collections::BTreeMap;

/// Sentinel waiter name supplying fallback fields
pub const DEFAULT_WAITER: &str = "__default__";

/// Field naming the waiter a configuration inherits from
const EXTENDS_FIELD: &str = "extends";

/// Marker prefix for template/base waiter definitions
const RESERVED_PREFIX: char = '_';

/// Resolves waiter inheritance chains for one service's waiter mapping
///
/// Results are memoized per waiter name, and recursion is depth-guarded so a
/// cyclic `extends` chain fails instead of recursing unboundedly.
pub struct WaiterResolver<'a> {
    waiters: &'a BTreeMap<String, WaiterConfig>,
    cache: BTreeMap<String, WaiterConfig>,
}

impl<'a> WaiterResolver<'a> {
    /// Create a resolver over one service's waiter mapping
    pub fn new(waiters: &'a BTreeMap<String, WaiterConfig>) -> Self {
        Self {
            waiters,
            cache: BTreeMap::new(),
        }
    }

    /// Resolve a waiter name to its flattened configuration
    ///
    /// The `extends` field itself survives the merge like any other field:
    /// the resolved config carries the child's own `extends` value.
    pub fn resolve(&mut self, name: &str) -> Result<WaiterConfig> {
        self.resolve_at_depth(name, 0)
    }

    fn resolve_at_depth(&mut self, name: &str, depth: usize) -> Result<WaiterConfig> {
        if let Some(resolved) = self.cache.get(name) {
            return Ok(resolved.clone());
        }

        // A legitimate chain visits each waiter at most once
        if depth > self.waiters.len() {
            return Err(DocgenError::WaiterConfigCycleExceeded(name.to_string()));
        }

        let config = self
            .waiters
            .get(name)
            .ok_or_else(|| DocgenError::WaiterConfigNotFound(name.to_string()))?
            .clone();

        let parent = config.get(EXTENDS_FIELD).and_then(|v| v.as_str());

        let resolved = if let Some(parent) = parent {
            let parent = parent.to_string();
            merge(self.resolve_at_depth(&parent, depth + 1)?, &config)
        } else if name != DEFAULT_WAITER {
            merge(self.resolve_at_depth(DEFAULT_WAITER, depth + 1)?, &config)
        } else {
            // `__default__` with no `extends` is the base case
            config
        };

        self.cache.insert(name.to_string(), resolved.clone());
        Ok(resolved)
    }
}

/// Base-merge: start from the parent's resolved fields, then overwrite with
/// every key present in the child
fn merge(parent: WaiterConfig, child: &WaiterConfig) -> WaiterConfig {
    let mut resolved = parent;
    for (key, value) in child {
        resolved.insert(key.clone(), value.clone());
    }
    resolved
}

/// Waiter names eligible for documentation
///
/// Names carrying the reserved leading marker (including `__default__`) are
/// template/base definitions and are never emitted.
pub fn public_waiter_names(waiters: &BTreeMap<String, WaiterConfig>) -> Vec<&str> {
    waiters
        .keys()
        .filter(|name| !name.starts_with(RESERVED_PREFIX))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(fields: &[(&str, serde_json::Value)]) -> WaiterConfig {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn waiters(entries: &[(&str, WaiterConfig)]) -> BTreeMap<String, WaiterConfig> {
        entries
            .iter()
            .map(|(name, c)| (name.to_string(), c.clone()))
            .collect()
    }

    #[test]
    fn test_default_with_no_extends_is_returned_unchanged() {
        let default = config(&[("interval", json!(15)), ("maxAttempts", json!(40))]);
        let mapping = waiters(&[(DEFAULT_WAITER, default.clone())]);

        let mut resolver = WaiterResolver::new(&mapping);
        assert_eq!(resolver.resolve(DEFAULT_WAITER).unwrap(), default);
    }

    #[test]
    fn test_implicit_default_inheritance() {
        let mapping = waiters(&[
            (
                DEFAULT_WAITER,
                config(&[("interval", json!(15)), ("maxAttempts", json!(40))]),
            ),
            (
                "BucketExists",
                config(&[("operation", json!("HeadBucket")), ("maxAttempts", json!(20))]),
            ),
        ]);

        let mut resolver = WaiterResolver::new(&mapping);
        let resolved = resolver.resolve("BucketExists").unwrap();

        assert_eq!(resolved.get("interval"), Some(&json!(15)));
        assert_eq!(resolved.get("maxAttempts"), Some(&json!(20)));
        assert_eq!(resolved.get("operation"), Some(&json!("HeadBucket")));
    }

    #[test]
    fn test_two_level_extends_chain_merges_child_over_parent() {
        let mapping = waiters(&[
            (
                DEFAULT_WAITER,
                config(&[("interval", json!(15)), ("maxAttempts", json!(40))]),
            ),
            (
                "B",
                config(&[
                    ("extends", json!("__default__")),
                    ("operation", json!("DescribeThing")),
                ]),
            ),
            (
                "A",
                config(&[("extends", json!("B")), ("maxAttempts", json!(5))]),
            ),
        ]);

        let mut resolver = WaiterResolver::new(&mapping);
        let resolved = resolver.resolve("A").unwrap();

        let expected = config(&[
            ("extends", json!("B")),
            ("interval", json!(15)),
            ("maxAttempts", json!(5)),
            ("operation", json!("DescribeThing")),
        ]);
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_missing_waiter_name() {
        let mapping = waiters(&[(DEFAULT_WAITER, config(&[]))]);

        let mut resolver = WaiterResolver::new(&mapping);
        let err = resolver.resolve("Nope").unwrap_err();
        assert!(matches!(err, DocgenError::WaiterConfigNotFound(name) if name == "Nope"));
    }

    #[test]
    fn test_missing_default_entry() {
        let mapping = waiters(&[("Lonely", config(&[("operation", json!("Describe"))]))]);

        let mut resolver = WaiterResolver::new(&mapping);
        let err = resolver.resolve("Lonely").unwrap_err();
        assert!(matches!(err, DocgenError::WaiterConfigNotFound(name) if name == DEFAULT_WAITER));
    }

    #[test]
    fn test_missing_extends_parent() {
        let mapping = waiters(&[("Child", config(&[("extends", json!("Ghost"))]))]);

        let mut resolver = WaiterResolver::new(&mapping);
        let err = resolver.resolve("Child").unwrap_err();
        assert!(matches!(err, DocgenError::WaiterConfigNotFound(name) if name == "Ghost"));
    }

    #[test]
    fn test_cyclic_extends_chain_is_detected() {
        let mapping = waiters(&[
            ("X", config(&[("extends", json!("Y"))])),
            ("Y", config(&[("extends", json!("X"))])),
        ]);

        let mut resolver = WaiterResolver::new(&mapping);
        let err = resolver.resolve("X").unwrap_err();
        assert!(matches!(err, DocgenError::WaiterConfigCycleExceeded(_)));
    }

    #[test]
    fn test_self_extends_is_detected() {
        let mapping = waiters(&[("X", config(&[("extends", json!("X"))]))]);

        let mut resolver = WaiterResolver::new(&mapping);
        let err = resolver.resolve("X").unwrap_err();
        assert!(matches!(err, DocgenError::WaiterConfigCycleExceeded(_)));
    }

    #[test]
    fn test_memoized_resolution_is_stable() {
        let mapping = waiters(&[
            (DEFAULT_WAITER, config(&[("interval", json!(15))])),
            ("A", config(&[("operation", json!("Describe"))])),
        ]);

        let mut resolver = WaiterResolver::new(&mapping);
        let first = resolver.resolve("A").unwrap();
        let second = resolver.resolve("A").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_public_waiter_names_skip_reserved_prefix() {
        let mapping = waiters(&[
            (DEFAULT_WAITER, config(&[])),
            ("_template", config(&[])),
            ("BucketExists", config(&[])),
        ]);

        assert_eq!(public_waiter_names(&mapping), vec!["BucketExists"]);
    }
}
