//! Histogram: cumulative bucket counts over observed values.

use crate::error::{Result, StatlineError};
use crate::label::LabelSet;

use super::{require_finite, validate_descriptor};

/// Default thresholds (seconds scale) used when a histogram is created
/// implicitly by the registry. Custom buckets go through `with_buckets`.
pub const DEFAULT_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Histogram value object.
///
/// Thresholds are sorted ascending with a synthetic `+Inf` bucket appended;
/// counts are cumulative: observing `v` increments every bucket whose
/// threshold is `>= v` (inclusive upper bound). The `+Inf` bucket therefore
/// always equals the total observation count.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    name: String,
    help: String,
    labels: LabelSet,
    // Ascending, unique, last entry is f64::INFINITY.
    thresholds: Vec<f64>,
    // Cumulative counts, parallel to `thresholds`.
    counts: Vec<u64>,
    sum: f64,
    count: u64,
}

impl Histogram {
    /// New empty histogram with no labels.
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        buckets: &[f64],
    ) -> Result<Self> {
        Self::with_buckets(name, help, buckets, LabelSet::new())
    }

    /// New empty histogram with explicit buckets and labels.
    ///
    /// The supplied thresholds are sorted; duplicates or non-finite
    /// thresholds are construction errors (never silently corrected).
    pub fn with_buckets(
        name: impl Into<String>,
        help: impl Into<String>,
        buckets: &[f64],
        labels: LabelSet,
    ) -> Result<Self> {
        let name = name.into();
        let help = help.into();
        validate_descriptor(&name, &help)?;

        let mut thresholds = buckets.to_vec();
        for t in &thresholds {
            if !t.is_finite() {
                return Err(StatlineError::InvalidMetric(format!(
                    "metric {name}: bucket threshold must be finite, got {t}"
                )));
            }
        }
        thresholds.sort_by(f64::total_cmp);
        if thresholds.windows(2).any(|w| w[0] == w[1]) {
            return Err(StatlineError::InvalidMetric(format!(
                "metric {name}: duplicate bucket thresholds"
            )));
        }
        thresholds.push(f64::INFINITY);

        let counts = vec![0; thresholds.len()];
        Ok(Self {
            name,
            help,
            labels,
            thresholds,
            counts,
            sum: 0.0,
            count: 0,
        })
    }

    /// Record one observation: increments every bucket with `value <= le`,
    /// plus `sum` and `count`.
    pub fn observe(mut self, value: f64) -> Result<Self> {
        require_finite(&self.name, "observation", value)?;
        for (le, count) in self.thresholds.iter().zip(self.counts.iter_mut()) {
            if value <= *le {
                *count += 1;
            }
        }
        self.sum += value;
        self.count += 1;
        Ok(self)
    }

    /// `(threshold, cumulative count)` pairs in ascending order, ending with
    /// the `+Inf` bucket.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.thresholds
            .iter()
            .copied()
            .zip(self.counts.iter().copied())
    }

    /// Cumulative count for one threshold, if it exists.
    pub fn bucket_count(&self, le: f64) -> Option<u64> {
        self.buckets().find(|(t, _)| *t == le).map(|(_, c)| c)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
