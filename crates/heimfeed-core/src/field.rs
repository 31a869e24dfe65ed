//! Ordered fallback lookups into loosely structured event payloads.
//!
//! Payloads differ per event type, so a feed entry asks for the first of
//! several candidate fields that carries a usable value. List order encodes
//! preference: ties go to the earlier path, never to the "better" value.

use crate::error::{FeedError, Result};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Dotted path into a JSON record, e.g. `deletedUser.username`.
///
/// Segments address object keys; a purely numeric segment also indexes
/// into arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    /// Builds a path from a literal. Malformed literals fail const evaluation.
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        assert!(is_well_formed(path.as_bytes()), "malformed field path");
        Self(Cow::Borrowed(path))
    }

    /// Parses a dotted path supplied at runtime.
    ///
    /// # Errors
    /// Returns [`FeedError::FieldPath`] for empty paths or empty segments
    /// (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(path: &str) -> Result<Self> {
        if is_well_formed(path.as_bytes()) {
            Ok(Self(Cow::Owned(path.to_owned())))
        } else {
            Err(FeedError::FieldPath(path.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw value at this path, truthy or not.
    #[must_use]
    pub fn get<'v>(&self, record: &'v Value) -> Option<&'v Value> {
        lookup(record, &self.0)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const fn is_well_formed(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }
    let mut previous_was_dot = true;
    let mut i = 0;
    while i < bytes.len() {
        let dot = bytes[i] == b'.';
        if dot && previous_was_dot {
            return false;
        }
        previous_was_dot = dot;
        i += 1;
    }
    !previous_was_dot
}

/// Walks `dotted` through `record`. Missing intermediate segments yield `None`.
#[must_use]
pub fn lookup<'v>(record: &'v Value, dotted: &str) -> Option<&'v Value> {
    dotted.split('.').try_fold(record, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Loose truthiness of the feed data: `null`, `false`, `0` and `""` count as
/// absent; objects and arrays (even empty ones) count as present.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Value at the first path that resolves to something truthy.
#[must_use]
pub fn resolve_field<'v>(record: &'v Value, paths: &[FieldPath]) -> Option<&'v Value> {
    paths
        .iter()
        .filter_map(|path| path.get(record))
        .find(|value| is_truthy(value))
}

/// Text form of a resolved value. Strings are taken verbatim.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(raw: &[&str]) -> Vec<FieldPath> {
        raw.iter()
            .map(|p| FieldPath::parse(p).expect("valid path"))
            .collect()
    }

    #[test]
    fn earlier_path_wins_over_later_match() {
        let candidates = paths(&["a.x", "a.y"]);
        assert_eq!(
            resolve_field(&json!({"a": {"y": 1}}), &candidates),
            Some(&json!(1))
        );
        assert_eq!(
            resolve_field(&json!({"a": {"x": 2, "y": 1}}), &candidates),
            Some(&json!(2))
        );
    }

    #[test]
    fn empty_or_unrelated_records_resolve_to_none() {
        let candidates = paths(&["payload.slug", "payload.aliasId"]);
        assert_eq!(resolve_field(&json!({}), &candidates), None);
        assert_eq!(resolve_field(&json!({"other": true}), &candidates), None);
        assert_eq!(resolve_field(&Value::Null, &candidates), None);
    }

    #[test]
    fn missing_intermediate_segments_do_not_panic() {
        let candidates = paths(&["payload.deletedUser.username"]);
        assert_eq!(resolve_field(&json!({"payload": 5}), &candidates), None);
        assert_eq!(resolve_field(&json!({"payload": null}), &candidates), None);
        assert_eq!(resolve_field(&json!({"type": "x"}), &candidates), None);
    }

    #[test]
    fn falsy_values_fall_through_to_next_path() {
        let candidates = paths(&["a", "b", "c", "d", "e"]);
        let record = json!({"a": "", "b": 0, "c": null, "d": false, "e": "found"});
        assert_eq!(resolve_field(&record, &candidates), Some(&json!("found")));
    }

    #[test]
    fn numeric_segments_index_arrays() {
        let record = json!({"aliases": [{"name": "first"}, {"name": "second"}]});
        let path = FieldPath::parse("aliases.1.name").expect("valid path");
        assert_eq!(path.get(&record), Some(&json!("second")));
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for raw in ["", ".", "a..b", ".a", "a."] {
            assert!(FieldPath::parse(raw).is_err(), "{raw:?} should be rejected");
        }
        assert_eq!(FieldPath::from_static("a.b").as_str(), "a.b");
    }

    #[test]
    fn display_value_keeps_strings_verbatim() {
        assert_eq!(display_value(&json!("abc")), "abc");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(true)), "true");
    }
}
