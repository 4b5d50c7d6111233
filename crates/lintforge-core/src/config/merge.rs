//! Configuration merging logic
//!
//! This module provides the deep-merge engine for combining multiple
//! configuration fragments (e.g., plugin-provided rule sets and project
//! overrides) into one object. Sources are folded left-to-right, so later
//! fragments win ties, and folding is associative: merging `[A, B, C]` in
//! one call equals merging `[A, B]` and then `C`.
//!
//! Most keys merge recursively, but a handful of lint-config keys carry
//! their own policy, captured in [`MergePolicy`]:
//! - `overrides` lists are concatenated, never fused entry-by-entry
//! - `plugins` and `extends` lists are set-unioned in first-occurrence order
//! - entries under `rules` are replaced wholesale by the incoming value
//! - every other array merges positionally, index-by-index

use crate::error::{LintforgeError, Result};
use serde_json::{Map, Value};

/// How an array-valued key combines with the value already in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Overwrite index-by-index; trailing elements of the longer side are
    /// kept, and object elements at the same index merge recursively.
    Positional,
    /// Append incoming elements only if not already present, preserving the
    /// position of the first occurrence. Used for `plugins` and `extends`.
    SetUnion,
    /// Concatenate the incoming list onto the existing list. Used for
    /// `overrides`, whose entries must never be fused with each other.
    ConcatList,
    /// The incoming value replaces the target value wholesale. Used for
    /// entries inside a `rules` context: rule options are not merged, the
    /// last writer wins at the rule level.
    RuleReplace,
}

impl MergePolicy {
    /// Policy for the given key. `in_rules` is true once the merge has
    /// descended through a `rules` key.
    pub fn for_key(key: &str, in_rules: bool) -> MergePolicy {
        if in_rules {
            MergePolicy::RuleReplace
        } else {
            match key {
                "overrides" => MergePolicy::ConcatList,
                "plugins" | "extends" => MergePolicy::SetUnion,
                _ => MergePolicy::Positional,
            }
        }
    }
}

/// Deep-merge engine over configuration fragments.
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge an ordered sequence of fragments into a single object.
    ///
    /// Null sources are skipped. A source that is itself an array is spread:
    /// each of its elements is merged as a source in its place. Any other
    /// non-object source is a caller error and returns
    /// [`LintforgeError::InvalidFragment`].
    ///
    /// The result is freshly built; mutating it can never alias an input.
    pub fn merge<'a, I>(sources: I) -> Result<Value>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut merged = Map::new();
        for source in sources {
            Self::fold_source(&mut merged, source)?;
        }
        Ok(Value::Object(merged))
    }

    fn fold_source(target: &mut Map<String, Value>, source: &Value) -> Result<()> {
        match source {
            Value::Null => Ok(()),
            Value::Array(elements) => {
                for element in elements {
                    Self::fold_source(target, element)?;
                }
                Ok(())
            }
            Value::Object(fields) => {
                Self::merge_object(target, fields, false);
                Ok(())
            }
            other => Err(LintforgeError::invalid_fragment(other)),
        }
    }

    fn merge_object(target: &mut Map<String, Value>, source: &Map<String, Value>, in_rules: bool) {
        for (key, incoming) in source {
            let policy = MergePolicy::for_key(key, in_rules);
            let either_array =
                incoming.is_array() || target.get(key).is_some_and(Value::is_array);

            if policy == MergePolicy::ConcatList || either_array {
                let merged = Self::merge_array(target.get(key), incoming, policy);
                target.insert(key.clone(), merged);
            } else if let Value::Object(fields) = incoming {
                let in_rules = in_rules || key == "rules";
                match target.get_mut(key) {
                    Some(Value::Object(existing)) => {
                        Self::merge_object(existing, fields, in_rules);
                    }
                    _ => {
                        target.insert(key.clone(), Value::Object(fields.clone()));
                    }
                }
            } else {
                // scalar or null incoming: assign directly, overwriting
                target.insert(key.clone(), incoming.clone());
            }
        }
    }

    /// Merge an array-valued entry under the given policy. `incoming` may be
    /// a scalar when only the target side is an array.
    fn merge_array(target: Option<&Value>, incoming: &Value, policy: MergePolicy) -> Value {
        match policy {
            MergePolicy::RuleReplace => incoming.clone(),
            MergePolicy::ConcatList => {
                let mut combined = match target {
                    Some(Value::Array(existing)) => existing.clone(),
                    _ => Vec::new(),
                };
                match incoming {
                    Value::Array(entries) => combined.extend(entries.iter().cloned()),
                    Value::Null => {}
                    other => combined.push(other.clone()),
                }
                Value::Array(combined)
            }
            MergePolicy::SetUnion => {
                let mut combined = match target {
                    Some(Value::Array(existing)) => existing.clone(),
                    _ => Vec::new(),
                };
                let incoming_items: Vec<&Value> = match incoming {
                    Value::Array(items) => items.iter().collect(),
                    Value::Null => Vec::new(),
                    other => vec![other],
                };
                for item in incoming_items {
                    if !combined.contains(item) {
                        combined.push(item.clone());
                    }
                }
                Value::Array(combined)
            }
            MergePolicy::Positional => {
                let Value::Array(items) = incoming else {
                    // a scalar against an array-valued key wins outright
                    return incoming.clone();
                };
                let mut combined = match target {
                    Some(Value::Array(existing)) => existing.clone(),
                    _ => Vec::new(),
                };
                for (index, item) in items.iter().enumerate() {
                    match (combined.get_mut(index), item) {
                        (Some(Value::Object(existing)), Value::Object(fields)) => {
                            Self::merge_object(existing, fields, false);
                        }
                        (Some(slot), _) => *slot = item.clone(),
                        (None, _) => combined.push(item.clone()),
                    }
                }
                Value::Array(combined)
            }
        }
    }
}
