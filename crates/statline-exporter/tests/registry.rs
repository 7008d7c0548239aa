//! Registry semantics: dedup, create-then-mutate atomicity, exposition.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use statline_core::label::{metric_identity, LabelSet};
use statline_core::metric::{Counter, Gauge, Metric};
use statline_exporter::registry::Registry;

#[test]
fn get_on_unknown_identity_is_a_routine_miss() {
    let registry = Registry::new();
    assert!(registry.get("nope|").is_none());
    assert!(registry.is_empty());
}

#[test]
fn push_dedupes_on_identity_regardless_of_label_order() {
    let registry = Registry::new();

    let first = Counter::with_labels(
        "http_requests_total",
        "Total requests.",
        LabelSet::from_pairs(&[("method", "get"), ("code", "200")]),
    )
    .unwrap()
    .set(1);
    let second = Counter::with_labels(
        "http_requests_total",
        "Total requests.",
        LabelSet::from_pairs(&[("code", "200"), ("method", "get")]),
    )
    .unwrap()
    .set(2);

    registry.push(first);
    registry.push(second);

    assert_eq!(registry.len(), 1);
    let key = metric_identity(
        "http_requests_total",
        &LabelSet::from_pairs(&[("method", "get"), ("code", "200")]),
    );
    match registry.get(&key) {
        Some(Metric::Counter(c)) => assert_eq!(c.value(), 2),
        other => panic!("expected counter, got {other:?}"),
    }
}

#[test]
fn increment_counter_creates_then_counts() {
    let registry = Registry::new();
    let labels = LabelSet::from_pairs(&[("queue", "mail")]);

    for _ in 0..3 {
        registry.increment_counter("jobs_total", &labels).unwrap();
    }

    let key = metric_identity("jobs_total", &labels);
    match registry.get(&key) {
        Some(Metric::Counter(c)) => {
            assert_eq!(c.value(), 3);
            // Auto-created metrics use the name as help text.
            assert_eq!(c.help(), "jobs_total");
        }
        other => panic!("expected counter, got {other:?}"),
    }
}

#[test]
fn set_gauge_overwrites_current_value() {
    let registry = Registry::new();
    let labels = LabelSet::new();

    registry.set_gauge("queue_depth", 5.0, &labels).unwrap();
    registry.set_gauge("queue_depth", 2.5, &labels).unwrap();

    match registry.get(&metric_identity("queue_depth", &labels)) {
        Some(Metric::Gauge(g)) => assert_eq!(g.value(), 2.5),
        other => panic!("expected gauge, got {other:?}"),
    }
}

#[test]
fn observe_histogram_uses_default_buckets() {
    let registry = Registry::new();
    let labels = LabelSet::new();

    registry.observe_histogram("req_seconds", 0.3, &labels).unwrap();
    registry.observe_histogram("req_seconds", 42.0, &labels).unwrap();

    match registry.get(&metric_identity("req_seconds", &labels)) {
        Some(Metric::Histogram(h)) => {
            assert_eq!(h.count(), 2);
            assert_eq!(h.bucket_count(0.5), Some(1));
            assert_eq!(h.bucket_count(f64::INFINITY), Some(2));
        }
        other => panic!("expected histogram, got {other:?}"),
    }
}

#[test]
fn observe_summary_uses_default_quantiles() {
    let registry = Registry::new();
    let labels = LabelSet::new();

    registry.observe_summary("rpc_seconds", 10.0, &labels).unwrap();
    registry.observe_summary("rpc_seconds", 20.0, &labels).unwrap();

    match registry.get(&metric_identity("rpc_seconds", &labels)) {
        Some(Metric::Summary(s)) => {
            assert_eq!(s.sum(), 30.0);
            assert_eq!(s.count(), 2);
            assert_eq!(s.quantiles(), &[0.5, 0.9, 0.95, 0.99][..]);
        }
        other => panic!("expected summary, got {other:?}"),
    }
}

#[test]
fn kind_mismatch_is_rejected_and_entry_unchanged() {
    let registry = Registry::new();
    let labels = LabelSet::new();
    registry.push(
        Gauge::with_labels("queue_depth", "Depth.", labels.clone())
            .unwrap()
            .set(9.0)
            .unwrap(),
    );

    let err = registry
        .increment_counter("queue_depth", &labels)
        .expect_err("kind mismatch must fail");
    assert_eq!(err.code(), "CONTRACT_VIOLATION");

    match registry.get(&metric_identity("queue_depth", &labels)) {
        Some(Metric::Gauge(g)) => assert_eq!(g.value(), 9.0),
        other => panic!("expected untouched gauge, got {other:?}"),
    }
}

#[test]
fn rejected_observation_leaves_entry_unchanged() {
    let registry = Registry::new();
    let labels = LabelSet::new();
    registry.observe_histogram("req_seconds", 1.0, &labels).unwrap();

    let err = registry
        .observe_histogram("req_seconds", f64::NAN, &labels)
        .expect_err("NaN must be rejected");
    assert_eq!(err.code(), "CONTRACT_VIOLATION");

    match registry.get(&metric_identity("req_seconds", &labels)) {
        Some(Metric::Histogram(h)) => assert_eq!(h.count(), 1),
        other => panic!("expected histogram, got {other:?}"),
    }
}

#[test]
fn concurrent_increments_lose_no_updates() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;

    let registry = Registry::new();
    let labels = LabelSet::new();

    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            let registry = registry.clone();
            let labels = labels.clone();
            scope.spawn(move || {
                for _ in 0..PER_THREAD {
                    registry.increment_counter("jobs_total", &labels).unwrap();
                }
            });
        }
    });

    match registry.get(&metric_identity("jobs_total", &labels)) {
        Some(Metric::Counter(c)) => assert_eq!(c.value(), (THREADS * PER_THREAD) as u64),
        other => panic!("expected counter, got {other:?}"),
    }
}

#[test]
fn exposition_text_prepends_up_and_sorts_output() {
    let registry = Registry::new();
    registry
        .increment_counter("zz_total", &LabelSet::new())
        .unwrap();
    registry
        .increment_counter("aa_total", &LabelSet::new())
        .unwrap();

    let text = registry.fetch_exposition_text();
    assert!(text.starts_with("# HELP up "));
    assert!(text.contains("\nup 1\n"));

    let aa = text.find("aa_total 1").unwrap();
    let zz = text.find("zz_total 1").unwrap();
    assert!(aa < zz, "output must be sorted by identity");

    // Deterministic across calls.
    assert_eq!(text, registry.fetch_exposition_text());
}

#[test]
fn stored_up_metric_does_not_duplicate_the_liveness_family() {
    let registry = Registry::new();
    registry.set_gauge("up", 0.0, &LabelSet::new()).unwrap();
    registry
        .increment_counter("jobs_total", &LabelSet::new())
        .unwrap();

    let text = registry.fetch_exposition_text();
    assert_eq!(text.matches("# TYPE up gauge").count(), 1);
    assert!(text.contains("\nup 1\n"));
    assert!(!text.contains("up 0"));
    assert!(text.contains("jobs_total 1\n"));
}

#[test]
fn status_serializes_to_the_statusz_shape() {
    let registry = Registry::new();
    let labels = LabelSet::new();
    registry.increment_counter("a_total", &labels).unwrap();
    registry.set_gauge("b", 1.0, &labels).unwrap();

    let value = serde_json::to_value(registry.status()).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["counters"], 1);
    assert_eq!(value["gauges"], 1);
    assert_eq!(value["histograms"], 0);
    assert_eq!(value["summaries"], 0);
}

#[test]
fn status_counts_entries_per_kind() {
    let registry = Registry::new();
    let labels = LabelSet::new();
    registry.increment_counter("a_total", &labels).unwrap();
    registry.set_gauge("b", 1.0, &labels).unwrap();
    registry.set_gauge("c", 1.0, &labels).unwrap();
    registry.observe_histogram("d_seconds", 0.1, &labels).unwrap();
    registry.observe_summary("e_seconds", 0.1, &labels).unwrap();

    let status = registry.status();
    assert_eq!(status.total, 5);
    assert_eq!(status.counters, 1);
    assert_eq!(status.gauges, 2);
    assert_eq!(status.histograms, 1);
    assert_eq!(status.summaries, 1);
}
