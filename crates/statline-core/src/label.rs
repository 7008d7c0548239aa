//! Label sets and metric identity derivation.
//!
//! Labels are stored in a `BTreeMap` so equality ignores insertion order and
//! iteration is always sorted by label name, keeping rendered output and
//! derived identities deterministic.

use std::collections::BTreeMap;

/// A set of label name/value pairs attached to one metric instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: BTreeMap<String, String>,
}

impl LabelSet {
    /// Empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from borrowed pairs (insertion order is irrelevant).
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Insert or replace one label.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.labels.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Pairs sorted by label name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as `k1="v1",k2="v2"` (no braces), sorted by key.
    pub fn render_inner(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<(String, String)> for LabelSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

/// Escape a label value for the text exposition format.
pub fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Derive the registry deduplication key for a metric.
///
/// Format: `name|k1_v1,k2_v2` — lower-cased, whitespace stripped, pairs
/// sorted by normalized label name. Two metrics with the same name and the
/// same unordered label set always map to the same identity.
pub fn metric_identity(name: &str, labels: &LabelSet) -> String {
    let mut pairs: Vec<String> = labels
        .iter()
        .map(|(k, v)| format!("{}_{}", normalize(k), normalize(v)))
        .collect();
    // BTreeMap iteration is sorted on raw keys; normalization can reorder.
    pairs.sort();
    format!("{}|{}", normalize(name), pairs.join(","))
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
