//! Periodic self-metrics collection.
//!
//! Producers push a fixed set of gauges/counters into the registry; the
//! harvester drives every registered producer on a fixed interval until it
//! receives the shutdown signal.

pub mod process;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use statline_core::error::Result;

use crate::registry::Registry;

/// A source of metrics pushed into the registry on each collection cycle.
#[async_trait]
pub trait StatsProducer: Send + Sync {
    fn name(&self) -> &'static str;
    async fn collect(&self, registry: &Registry) -> Result<()>;
}

/// Drives registered producers on a fixed interval.
pub struct Harvester {
    registry: Registry,
    producers: Vec<Arc<dyn StatsProducer>>,
    interval: Duration,
}

impl Harvester {
    pub fn new(registry: Registry, interval: Duration) -> Self {
        Self {
            registry,
            producers: Vec::new(),
            interval,
        }
    }

    pub fn register(&mut self, producer: Arc<dyn StatsProducer>) {
        self.producers.push(producer);
    }

    /// Run one collection cycle over every producer.
    pub async fn collect_once(&self) {
        for producer in &self.producers {
            if let Err(e) = producer.collect(&self.registry).await {
                warn!(producer = producer.name(), error = %e, "collection failed");
            }
        }
        debug!(producers = self.producers.len(), "collection cycle complete");
    }

    /// Run the collection loop until shutdown signal.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            producers = self.producers.len(),
            "harvester started"
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {
                    self.collect_once().await;
                }
                _ = shutdown.changed() => {
                    info!("harvester shutting down");
                    // Final cycle so the last scrape sees fresh values.
                    self.collect_once().await;
                    break;
                }
            }
        }
    }
}
