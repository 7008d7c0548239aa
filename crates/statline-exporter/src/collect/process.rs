//! Process-level self metrics.
//!
//! Pushes a fixed set of gauges/counters about the exporter process itself:
//! start time, uptime, and the number of completed collection cycles.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use statline_core::error::Result;
use statline_core::label::LabelSet;

use super::StatsProducer;
use crate::registry::Registry;

pub struct ProcessStatsProducer {
    namespace: String,
    started: Instant,
    start_epoch_secs: f64,
}

impl ProcessStatsProducer {
    pub fn new(namespace: &str) -> Self {
        let start_epoch_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        Self {
            namespace: namespace.to_string(),
            started: Instant::now(),
            start_epoch_secs,
        }
    }

    fn metric(&self, suffix: &str) -> String {
        format!("{}_{}", self.namespace, suffix)
    }
}

#[async_trait]
impl StatsProducer for ProcessStatsProducer {
    fn name(&self) -> &'static str {
        "process"
    }

    async fn collect(&self, registry: &Registry) -> Result<()> {
        let labels = LabelSet::new();
        registry.set_gauge(
            &self.metric("process_start_time_seconds"),
            self.start_epoch_secs,
            &labels,
        )?;
        registry.set_gauge(
            &self.metric("process_uptime_seconds"),
            self.started.elapsed().as_secs_f64(),
            &labels,
        )?;
        registry.increment_counter(&self.metric("collect_cycles_total"), &labels)?;
        Ok(())
    }
}
