//! statline exporter library entry.
//!
//! This crate wires the metric registry, config, collection loop, and the
//! operational HTTP endpoints into a runnable exporter. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod collect;
pub mod config;
pub mod ops;
pub mod registry;
pub mod router;
