use serde::Deserialize;
use statline_core::error::{Result, StatlineError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatlineError::BadConfig("version must be 1".into()));
        }
        self.exporter.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_collect_interval_ms")]
    pub collect_interval_ms: u64,

    /// Prefix for the exporter's own metrics (e.g. `statline_collect_cycles_total`).
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            collect_interval_ms: default_collect_interval_ms(),
            namespace: default_namespace(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=300000).contains(&self.collect_interval_ms) {
            return Err(StatlineError::BadConfig(
                "exporter.collect_interval_ms must be between 1000 and 300000".into(),
            ));
        }
        if !valid_metric_name(&self.namespace) {
            return Err(StatlineError::BadConfig(
                "exporter.namespace must match [a-zA-Z_:][a-zA-Z0-9_:]*".into(),
            ));
        }
        Ok(())
    }
}

fn valid_metric_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == ':') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

fn default_listen() -> String {
    "0.0.0.0:9184".into()
}
fn default_collect_interval_ms() -> u64 {
    15000
}
fn default_namespace() -> String {
    "statline".into()
}
