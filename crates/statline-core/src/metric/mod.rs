//! Metric value types and the closed metric enum.
//!
//! The four kinds (counter, gauge, histogram, summary) are value objects:
//! constructors validate structure up front, mutators consume the value and
//! return the updated one. The registry is the only long-lived owner; metric
//! values themselves are transient snapshots passed by value.
//!
//! `Metric` is deliberately a closed enum so the renderer's match is
//! exhaustive: adding a metric kind without updating the renderer is a
//! compile error, not a silently skipped sample.

pub mod counter;
pub mod gauge;
pub mod histogram;
pub mod summary;

pub use counter::Counter;
pub use gauge::Gauge;
pub use histogram::{Histogram, DEFAULT_BUCKETS};
pub use summary::{Summary, DEFAULT_QUANTILES};

use crate::error::{Result, StatlineError};
use crate::label::{metric_identity, LabelSet};

/// Metric kind tag, as spelled in `# TYPE` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
    Histogram,
    Summary,
}

impl MetricKind {
    /// String used in the exposition `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
            MetricKind::Summary => "summary",
        }
    }
}

/// A metric value of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Metric {
    Counter(Counter),
    Gauge(Gauge),
    Histogram(Histogram),
    Summary(Summary),
}

impl Metric {
    pub fn kind(&self) -> MetricKind {
        match self {
            Metric::Counter(_) => MetricKind::Counter,
            Metric::Gauge(_) => MetricKind::Gauge,
            Metric::Histogram(_) => MetricKind::Histogram,
            Metric::Summary(_) => MetricKind::Summary,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Metric::Counter(m) => m.name(),
            Metric::Gauge(m) => m.name(),
            Metric::Histogram(m) => m.name(),
            Metric::Summary(m) => m.name(),
        }
    }

    pub fn help(&self) -> &str {
        match self {
            Metric::Counter(m) => m.help(),
            Metric::Gauge(m) => m.help(),
            Metric::Histogram(m) => m.help(),
            Metric::Summary(m) => m.help(),
        }
    }

    pub fn labels(&self) -> &LabelSet {
        match self {
            Metric::Counter(m) => m.labels(),
            Metric::Gauge(m) => m.labels(),
            Metric::Histogram(m) => m.labels(),
            Metric::Summary(m) => m.labels(),
        }
    }

    /// Registry deduplication key for this value.
    pub fn identity(&self) -> String {
        metric_identity(self.name(), self.labels())
    }
}

impl From<Counter> for Metric {
    fn from(m: Counter) -> Self {
        Metric::Counter(m)
    }
}

impl From<Gauge> for Metric {
    fn from(m: Gauge) -> Self {
        Metric::Gauge(m)
    }
}

impl From<Histogram> for Metric {
    fn from(m: Histogram) -> Self {
        Metric::Histogram(m)
    }
}

impl From<Summary> for Metric {
    fn from(m: Summary) -> Self {
        Metric::Summary(m)
    }
}

/// Validate the name/help pair every constructor requires.
pub(crate) fn validate_descriptor(name: &str, help: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StatlineError::InvalidMetric(
            "metric name must not be empty".into(),
        ));
    }
    if help.trim().is_empty() {
        return Err(StatlineError::InvalidMetric(format!(
            "metric {name}: help text must not be empty"
        )));
    }
    Ok(())
}

/// Reject NaN/±Inf inputs on mutation paths.
pub(crate) fn require_finite(name: &str, what: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(StatlineError::ContractViolation(format!(
            "metric {name}: {what} must be finite, got {value}"
        )));
    }
    Ok(())
}
