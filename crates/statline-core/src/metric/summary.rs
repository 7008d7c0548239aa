//! Summary: raw observations with on-demand quantile estimation.

use crate::error::{Result, StatlineError};
use crate::label::LabelSet;

use super::{require_finite, validate_descriptor};

/// Quantiles used when no explicit list is configured.
pub const DEFAULT_QUANTILES: &[f64] = &[0.5, 0.9, 0.95, 0.99];

/// Summary value object.
///
/// All raw observations are retained for the lifetime of the value — there
/// is no sliding window or decay. Quantiles are never stored; they are
/// recomputed from the observation list on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    name: String,
    help: String,
    labels: LabelSet,
    quantiles: Vec<f64>,
    sum: f64,
    count: u64,
    observations: Vec<f64>,
}

impl Summary {
    /// New empty summary with the default quantile list and no labels.
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Result<Self> {
        Self::with_quantiles(name, help, DEFAULT_QUANTILES, LabelSet::new())
    }

    /// New empty summary with explicit quantiles and labels.
    ///
    /// The quantile list must be non-empty, contain no duplicates, and every
    /// entry must lie in `[0, 1]`.
    pub fn with_quantiles(
        name: impl Into<String>,
        help: impl Into<String>,
        quantiles: &[f64],
        labels: LabelSet,
    ) -> Result<Self> {
        let name = name.into();
        let help = help.into();
        validate_descriptor(&name, &help)?;

        if quantiles.is_empty() {
            return Err(StatlineError::InvalidMetric(format!(
                "metric {name}: quantile list must not be empty"
            )));
        }
        for q in quantiles {
            if !q.is_finite() || !(0.0..=1.0).contains(q) {
                return Err(StatlineError::InvalidMetric(format!(
                    "metric {name}: quantile must be in [0, 1], got {q}"
                )));
            }
        }
        let mut sorted = quantiles.to_vec();
        sorted.sort_by(f64::total_cmp);
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(StatlineError::InvalidMetric(format!(
                "metric {name}: duplicate quantiles"
            )));
        }

        Ok(Self {
            name,
            help,
            labels,
            quantiles: quantiles.to_vec(),
            sum: 0.0,
            count: 0,
            observations: Vec::new(),
        })
    }

    /// Record one observation.
    pub fn observe(mut self, value: f64) -> Result<Self> {
        require_finite(&self.name, "observation", value)?;
        self.observations.push(value);
        self.sum += value;
        self.count += 1;
        Ok(self)
    }

    /// Order-statistic quantile over the current observations, with linear
    /// interpolation between the two bounding ranks.
    ///
    /// `q = 0` returns the minimum, `q = 1` the maximum; an empty
    /// observation list returns 0. Out-of-range `q` is clamped into
    /// `[0, 1]` — configured quantile lists are range-checked at
    /// construction, so the renderer only ever passes valid values.
    /// Never mutates the stored observations.
    pub fn quantile(&self, q: f64) -> f64 {
        if self.observations.is_empty() {
            return 0.0;
        }
        let mut sorted = self.observations.clone();
        sorted.sort_by(f64::total_cmp);
        if sorted.len() == 1 {
            return sorted[0];
        }

        let q = q.clamp(0.0, 1.0);
        let pos = q * (sorted.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        let weight = pos - pos.floor();
        sorted[lo] + (sorted[hi] - sorted[lo]) * weight
    }

    /// Configured quantiles, in the order they will be rendered.
    pub fn quantiles(&self) -> &[f64] {
        &self.quantiles
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

    /// Number of retained raw observations (always equals `count`).
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
}
