//! statline core: metric value types, identity derivation, and the
//! Prometheus text exposition renderer.
//!
//! This crate defines the metric data model and formatting rules shared by
//! the exporter and by embedding applications. It intentionally carries no
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StatlineError`/`Result` so scrape
//! handlers do not crash on bad metric definitions or bad observations.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod label;
pub mod metric;
pub mod render;

/// Shared result type.
pub use error::{Result, StatlineError};
