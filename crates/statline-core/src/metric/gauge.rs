//! Gauge: a value that can move in either direction.

use crate::error::Result;
use crate::label::LabelSet;

use super::{require_finite, validate_descriptor};

/// Gauge value object. No sign or monotonicity constraint; negative
/// increments behave as decrements and vice versa — that is intentional,
/// not an error. Non-finite inputs (NaN/±Inf) are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    name: String,
    help: String,
    labels: LabelSet,
    value: f64,
}

impl Gauge {
    /// New zero-valued gauge with no labels.
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Result<Self> {
        Self::with_labels(name, help, LabelSet::new())
    }

    /// New zero-valued gauge with a label set.
    pub fn with_labels(
        name: impl Into<String>,
        help: impl Into<String>,
        labels: LabelSet,
    ) -> Result<Self> {
        let name = name.into();
        let help = help.into();
        validate_descriptor(&name, &help)?;
        Ok(Self {
            name,
            help,
            labels,
            value: 0.0,
        })
    }

    /// Replace the current value.
    pub fn set(mut self, value: f64) -> Result<Self> {
        require_finite(&self.name, "gauge value", value)?;
        self.value = value;
        Ok(self)
    }

    /// Increment by 1.
    pub fn inc(self) -> Result<Self> {
        self.inc_by(1.0)
    }

    /// Decrement by 1.
    pub fn dec(self) -> Result<Self> {
        self.inc_by(-1.0)
    }

    /// Add an arbitrary signed delta.
    pub fn inc_by(mut self, delta: f64) -> Result<Self> {
        require_finite(&self.name, "gauge delta", delta)?;
        self.value += delta;
        Ok(self)
    }

    /// Subtract an arbitrary signed delta.
    pub fn dec_by(self, delta: f64) -> Result<Self> {
        self.inc_by(-delta)
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

    pub fn value(&self) -> f64 {
        self.value
    }
}
