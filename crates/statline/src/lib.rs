//! Top-level facade crate for statline.
//!
//! Re-exports core types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use statline_core::*;
}

pub mod exporter {
    pub use statline_exporter::*;
}
