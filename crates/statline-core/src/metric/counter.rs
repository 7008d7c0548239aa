//! Counter: a monotonically non-decreasing event count.

use crate::error::Result;
use crate::label::LabelSet;

use super::validate_descriptor;

/// Counter value object. `value` only moves up, except on explicit `reset`.
///
/// Amounts are `u64`, so the non-negativity contract is enforced by the
/// type rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    name: String,
    help: String,
    labels: LabelSet,
    value: u64,
}

impl Counter {
    /// New zero-valued counter with no labels.
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Result<Self> {
        Self::with_labels(name, help, LabelSet::new())
    }

    /// New zero-valued counter with a label set.
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
            value: 0,
        })
    }

    /// Increment by 1.
    pub fn inc(self) -> Self {
        self.inc_by(1)
    }

    /// Increment by an arbitrary amount (saturating at `u64::MAX`).
    pub fn inc_by(mut self, amount: u64) -> Self {
        self.value = self.value.saturating_add(amount);
        self
    }

    /// Replace the current value.
    pub fn set(mut self, value: u64) -> Self {
        self.value = value;
        self
    }

    /// Reset to zero.
    pub fn reset(self) -> Self {
        self.set(0)
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

    pub fn value(&self) -> u64 {
        self.value
    }
}
