//! Step-by-step resolution engine
//!
//! Consumes a [`PathCompiler`] against a borrowed [`Value`] in a single loop.
//! A missing key ends resolution with `Ok(None)`; a node of the wrong shape
//! ends it with a [`PathError`].

use serde_json::Value;

use super::node::NodeKind;
use crate::config::{IndexMode, ResolverConfig};
use crate::error::{PathError, PathResult};
use crate::path::{PathCompiler, Step};

/// Resolve `compiler`'s steps against `root` with the default configuration
///
/// # Errors
///
/// - `PathError::TypeMismatch` if a key lookup meets a non-object node
/// - `PathError::IndexOutOfRange` if a position index is past the last entry
pub fn resolve<'v>(root: &'v Value, compiler: PathCompiler<'_>) -> PathResult<Option<&'v Value>> {
    Resolver::new().resolve(root, compiler)
}

/// Document walker
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a custom configuration
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Follow every step pulled from `compiler`, starting at `root`
    ///
    /// # Errors
    ///
    /// - `PathError::TypeMismatch` if a key lookup meets a non-object node
    /// - `PathError::IndexOutOfRange` if a position index is past the last entry
    pub fn resolve<'v>(
        &self,
        root: &'v Value,
        mut compiler: PathCompiler<'_>,
    ) -> PathResult<Option<&'v Value>> {
        let mut current = root;

        while let Some(step) = compiler.next_step() {
            let position = compiler.position() - 1;
            tracing::trace!(step = %step, position, "resolving path step");

            if step.is_bare_subscript() {
                tracing::debug!(path = compiler.path(), step = %step, position, "bare subscript");
                return Ok(None);
            }

            if let Some(index) = step.index
                && let Some(entry) = self.select_entry(current, &step.key, index)?
            {
                current = entry;
                continue;
            }

            match Self::lookup(current, &step, position)? {
                Some(next) => current = next,
                None => {
                    tracing::debug!(
                        path = compiler.path(),
                        key = %step.key,
                        position,
                        "path key not found"
                    );
                    return Ok(None);
                }
            }
        }

        Ok(Some(current))
    }

    /// Plain key lookup; `current` must be an object
    fn lookup<'v>(current: &'v Value, step: &Step, position: usize) -> PathResult<Option<&'v Value>> {
        match current {
            Value::Object(map) => Ok(map.get(&step.key)),
            other => {
                let found = NodeKind::of(other);
                tracing::debug!(step = %step, position, %found, "key lookup on non-object node");
                Err(PathError::type_mismatch(step.to_string(), position, found))
            }
        }
    }

    /// Positional selection under `key`.
    ///
    /// `Ok(None)` means the subscript does not apply here and the caller
    /// should fall back to a plain lookup of `key`.
    fn select_entry<'v>(
        &self,
        current: &'v Value,
        key: &str,
        index: usize,
    ) -> PathResult<Option<&'v Value>> {
        let Value::Object(map) = current else {
            return Ok(None);
        };

        match map.get(key) {
            Some(Value::Object(entries)) => entries
                .values()
                .nth(index)
                .map(Some)
                .ok_or_else(|| PathError::index_out_of_range(key, index, entries.len())),
            Some(Value::Array(items)) if self.config.index_mode == IndexMode::Sequences => items
                .get(index)
                .map(Some)
                .ok_or_else(|| PathError::index_out_of_range(key, index, items.len())),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::compile;
    use serde_json::json;

    fn tree() -> Value {
        json!({
            "root": {
                "branches": {
                    "first": {"item": 5},
                    "second": {"item": 7}
                },
                "list": [10, 20, 30],
                "name": "trunk"
            }
        })
    }

    #[test]
    fn test_empty_path_is_identity() {
        let doc = tree();
        let found = resolve(&doc, compile("")).expect("resolves");
        assert_eq!(found, Some(&doc));
    }

    #[test]
    fn test_entry_index_uses_declaration_order() {
        let doc = tree();
        let first = resolve(&doc, compile("root.branches[0].item")).expect("resolves");
        let second = resolve(&doc, compile("root.branches[1].item")).expect("resolves");
        assert_eq!(first, Some(&json!(5)));
        assert_eq!(second, Some(&json!(7)));
    }

    #[test]
    fn test_index_past_end_fails() {
        let doc = tree();
        let err = resolve(&doc, compile("root.branches[2].item")).expect_err("out of range");
        assert_eq!(err, PathError::index_out_of_range("branches", 2, 2));
    }

    #[test]
    fn test_missing_key_short_circuits() {
        let doc = tree();
        let found = resolve(&doc, compile("root.missing.name.anything")).expect("resolves");
        assert_eq!(found, None);
    }

    #[test]
    fn test_scalar_in_the_middle_is_a_type_mismatch() {
        let doc = tree();
        let err = resolve(&doc, compile("root.name.length")).expect_err("mismatch");
        assert_eq!(err, PathError::type_mismatch("length", 2, NodeKind::String));
    }

    #[test]
    fn test_array_subscript_falls_back_in_entry_mode() {
        let doc = tree();
        let found = resolve(&doc, compile("root.list[1]")).expect("resolves");
        assert_eq!(found, Some(&json!([10, 20, 30])));
    }

    #[test]
    fn test_array_subscript_in_sequence_mode() {
        let doc = tree();
        let resolver =
            Resolver::with_config(ResolverConfig::default().with_index_mode(IndexMode::Sequences));
        let found = resolver.resolve(&doc, compile("root.list[1]")).expect("resolves");
        assert_eq!(found, Some(&json!(20)));

        let err = resolver
            .resolve(&doc, compile("root.list[3]"))
            .expect_err("out of range");
        assert!(err.is_index_error());
    }

    #[test]
    fn test_empty_segments_look_up_the_empty_key() {
        let doc = json!({"": {"x": 9}, "a": {"": 7, "b": 1}});
        assert_eq!(resolve(&doc, compile(".x")), Ok(Some(&json!(9))));
        assert_eq!(resolve(&doc, compile("a.")), Ok(Some(&json!(7))));

        let doc = tree();
        assert_eq!(resolve(&doc, compile("root..name")), Ok(None));
    }

    #[test]
    fn test_bare_subscript_misses_on_any_node() {
        assert_eq!(resolve(&json!([1, 2]), compile("[0]")), Ok(None));
        assert_eq!(resolve(&json!({"s": 3}), compile("s.[0]")), Ok(None));
        assert_eq!(resolve(&json!({"[0]": 1}), compile("[0]")), Ok(None));
    }
}
