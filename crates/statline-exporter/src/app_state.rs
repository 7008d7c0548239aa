//! Shared application state for the statline exporter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Registry,
}

struct AppStateInner {
    cfg: ExporterConfig,
    draining: AtomicBool,
}

impl AppState {
    /// Build application state around a fresh registry.
    pub fn new(cfg: ExporterConfig) -> Self {
        Self::with_registry(cfg, Registry::new())
    }

    /// Build application state around an existing registry handle.
    pub fn with_registry(cfg: ExporterConfig, registry: Registry) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                draining: AtomicBool::new(false),
            }),
            registry,
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Registry {
        self.registry.clone()
    }

    /// Mark draining state (readiness flips to 503).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
