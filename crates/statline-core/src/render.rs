//! Prometheus text exposition rendering.
//!
//! Each metric renders as a `# HELP` line, a `# TYPE` line, and one or more
//! sample lines. Labels are serialized sorted by key; histogram `_bucket`
//! lines carry an `le` label (the `+Inf` bucket is the literal `+Inf`),
//! summaries carry a `quantile` label. An empty collection renders to the
//! empty string.

use std::fmt::Write;

use crate::label::LabelSet;
use crate::metric::Metric;

/// Render a collection of metric values into Prometheus text format.
pub fn render(metrics: &[Metric]) -> String {
    let mut out = String::new();
    for m in metrics {
        render_metric(m, &mut out);
    }
    out
}

fn render_metric(m: &Metric, out: &mut String) {
    let name = m.name();
    let _ = writeln!(out, "# HELP {} {}", name, escape_help(m.help()));
    let _ = writeln!(out, "# TYPE {} {}", name, m.kind().as_str());

    // Exhaustive on purpose: a new metric kind must update this match.
    match m {
        Metric::Counter(c) => {
            let _ = writeln!(out, "{}{} {}", name, braced(c.labels()), c.value());
        }
        Metric::Gauge(g) => {
            let _ = writeln!(out, "{}{} {}", name, braced(g.labels()), g.value());
        }
        Metric::Histogram(h) => {
            let prefix = inner_prefix(h.labels());
            for (le, count) in h.buckets() {
                let _ = writeln!(
                    out,
                    "{}_bucket{{{}le=\"{}\"}} {}",
                    name,
                    prefix,
                    format_le(le),
                    count
                );
            }
            let _ = writeln!(out, "{}_sum{} {}", name, braced(h.labels()), h.sum());
            let _ = writeln!(out, "{}_count{} {}", name, braced(h.labels()), h.count());
        }
        Metric::Summary(s) => {
            let prefix = inner_prefix(s.labels());
            for &q in s.quantiles() {
                let _ = writeln!(
                    out,
                    "{}{{{}quantile=\"{}\"}} {}",
                    name,
                    prefix,
                    q,
                    s.quantile(q)
                );
            }
            let _ = writeln!(out, "{}_sum{} {}", name, braced(s.labels()), s.sum());
            let _ = writeln!(out, "{}_count{} {}", name, braced(s.labels()), s.count());
        }
    }
}

/// `{k="v",...}` for non-empty label sets, nothing for empty ones.
fn braced(labels: &LabelSet) -> String {
    if labels.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", labels.render_inner())
    }
}

/// Label text to splice before a synthetic `le`/`quantile` label.
fn inner_prefix(labels: &LabelSet) -> String {
    if labels.is_empty() {
        String::new()
    } else {
        format!("{},", labels.render_inner())
    }
}

fn format_le(le: f64) -> String {
    if le.is_infinite() {
        "+Inf".to_string()
    } else {
        format!("{le}")
    }
}

fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}
