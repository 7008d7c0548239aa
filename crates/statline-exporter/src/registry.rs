//! Shared metric registry.
//!
//! One mutex-guarded map from metric identity to current value. Every
//! read-modify-write sequence for an identity happens under the lock, so
//! concurrent producers can never interleave a lookup/mutate/store and lose
//! an update, and `get_all` always sees a single consistent point in time.
//!
//! A sharded/lock-free map would give up the consistent whole-map snapshot,
//! so a plain `Mutex<HashMap>` it is: mutation rates here are low and every
//! operation's cost is bounded by one metric's state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::debug;

use statline_core::error::{Result, StatlineError};
use statline_core::label::{metric_identity, LabelSet};
use statline_core::metric::{
    Counter, Gauge, Histogram, Metric, Summary, DEFAULT_BUCKETS, DEFAULT_QUANTILES,
};
use statline_core::render;

/// Cheaply cloneable handle to the shared metric map.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<Mutex<HashMap<String, Metric>>>,
}

/// Per-kind entry counts, served by `/statusz`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RegistryStatus {
    pub total: usize,
    pub counters: usize,
    pub gauges: usize,
    pub histograms: usize,
    pub summaries: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Metric>> {
        // Entries are replaced whole under the lock, so a panicked holder
        // cannot leave partial state; recover the map instead of poisoning
        // every later scrape.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Store a metric at its derived identity, overwriting any prior entry
    /// (last-write-wins, no merge).
    pub fn push(&self, metric: impl Into<Metric>) {
        let metric = metric.into();
        let key = metric.identity();
        self.lock().insert(key, metric);
    }

    /// Current value at an identity. A miss is routine, not an error.
    pub fn get(&self, identity: &str) -> Option<Metric> {
        self.lock().get(identity).cloned()
    }

    /// Snapshot of every stored metric, taken at one consistent point.
    pub fn get_all(&self) -> HashMap<String, Metric> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Increment the counter at `name`+`labels` by 1, creating a fresh
    /// default counter first if absent. Create-then-mutate is atomic: the
    /// lock is held across the whole sequence.
    pub fn increment_counter(&self, name: &str, labels: &LabelSet) -> Result<()> {
        let key = metric_identity(name, labels);
        let mut map = self.lock();
        let counter = match map.get(&key) {
            Some(Metric::Counter(c)) => c.clone(),
            Some(other) => return Err(kind_mismatch(name, "counter", other)),
            None => {
                debug!(%name, "creating counter on first increment");
                Counter::with_labels(name, name, labels.clone())?
            }
        };
        map.insert(key, Metric::Counter(counter.inc()));
        Ok(())
    }

    /// Set the gauge at `name`+`labels`, creating it if absent.
    pub fn set_gauge(&self, name: &str, value: f64, labels: &LabelSet) -> Result<()> {
        let key = metric_identity(name, labels);
        let mut map = self.lock();
        let gauge = match map.get(&key) {
            Some(Metric::Gauge(g)) => g.clone(),
            Some(other) => return Err(kind_mismatch(name, "gauge", other)),
            None => {
                debug!(%name, "creating gauge on first set");
                Gauge::with_labels(name, name, labels.clone())?
            }
        };
        map.insert(key, Metric::Gauge(gauge.set(value)?));
        Ok(())
    }

    /// Observe into the histogram at `name`+`labels`, creating one with the
    /// default buckets if absent. Custom buckets go through `push`.
    pub fn observe_histogram(&self, name: &str, value: f64, labels: &LabelSet) -> Result<()> {
        let key = metric_identity(name, labels);
        let mut map = self.lock();
        let histogram = match map.get(&key) {
            Some(Metric::Histogram(h)) => h.clone(),
            Some(other) => return Err(kind_mismatch(name, "histogram", other)),
            None => {
                debug!(%name, "creating histogram on first observation");
                Histogram::with_buckets(name, name, DEFAULT_BUCKETS, labels.clone())?
            }
        };
        map.insert(key, Metric::Histogram(histogram.observe(value)?));
        Ok(())
    }

    /// Observe into the summary at `name`+`labels`, creating one with the
    /// default quantiles if absent. Custom quantiles go through `push`.
    pub fn observe_summary(&self, name: &str, value: f64, labels: &LabelSet) -> Result<()> {
        let key = metric_identity(name, labels);
        let mut map = self.lock();
        let summary = match map.get(&key) {
            Some(Metric::Summary(s)) => s.clone(),
            Some(other) => return Err(kind_mismatch(name, "summary", other)),
            None => {
                debug!(%name, "creating summary on first observation");
                Summary::with_quantiles(name, name, DEFAULT_QUANTILES, labels.clone())?
            }
        };
        map.insert(key, Metric::Summary(summary.observe(value)?));
        Ok(())
    }

    /// Entry counts per metric kind.
    pub fn status(&self) -> RegistryStatus {
        let map = self.lock();
        let mut status = RegistryStatus {
            total: map.len(),
            ..RegistryStatus::default()
        };
        for metric in map.values() {
            match metric {
                Metric::Counter(_) => status.counters += 1,
                Metric::Gauge(_) => status.gauges += 1,
                Metric::Histogram(_) => status.histograms += 1,
                Metric::Summary(_) => status.summaries += 1,
            }
        }
        status
    }

    /// Render the current snapshot to Prometheus text, sorted by identity
    /// for reproducible output, with the fixed `up 1` liveness sample first.
    pub fn fetch_exposition_text(&self) -> String {
        let snapshot = self.get_all();
        // The liveness sample owns the `up` family; rendering a stored `up`
        // as well would emit a duplicate `# TYPE up` block scrapers reject.
        let mut entries: Vec<(String, Metric)> = snapshot
            .into_iter()
            .filter(|(_, m)| m.name() != "up")
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut metrics = Vec::with_capacity(entries.len() + 1);
        if let Some(up) = up_gauge() {
            metrics.push(up);
        }
        metrics.extend(entries.into_iter().map(|(_, m)| m));
        render::render(&metrics)
    }
}

fn kind_mismatch(name: &str, wanted: &str, found: &Metric) -> StatlineError {
    StatlineError::ContractViolation(format!(
        "metric {name} is registered as a {}, not a {wanted}",
        found.kind().as_str()
    ))
}

// Constructed from non-empty literals and a finite value, so this cannot
// actually fail; the Option keeps the scrape path panic-free anyway.
fn up_gauge() -> Option<Metric> {
    let gauge = Gauge::new("up", "Whether the exporter is serving scrapes.").ok()?;
    Some(Metric::Gauge(gauge.set(1.0).ok()?))
}
