//! Histogram bucket accumulation semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use statline_core::metric::Histogram;

#[test]
fn duplicate_thresholds_are_a_construction_error() {
    let err = Histogram::new("latency_seconds", "Latency.", &[1.0, 5.0, 5.0])
        .expect_err("duplicates must fail");
    assert_eq!(err.code(), "INVALID_METRIC");
}

#[test]
fn non_finite_thresholds_are_a_construction_error() {
    let err = Histogram::new("latency_seconds", "Latency.", &[1.0, f64::INFINITY])
        .expect_err("explicit +Inf threshold must fail");
    assert_eq!(err.code(), "INVALID_METRIC");
}

#[test]
fn thresholds_are_sorted_and_inf_is_appended() {
    let h = Histogram::new("latency_seconds", "Latency.", &[10.0, 1.0, 5.0]).unwrap();
    let thresholds: Vec<f64> = h.buckets().map(|(le, _)| le).collect();
    assert_eq!(thresholds, vec![1.0, 5.0, 10.0, f64::INFINITY]);
}

#[test]
fn observations_fill_cumulative_buckets() {
    let h = Histogram::new("latency_seconds", "Latency.", &[1.0, 5.0, 10.0]).unwrap();
    let h = h.observe(3.0).unwrap().observe(7.0).unwrap();

    assert_eq!(h.bucket_count(1.0), Some(0));
    assert_eq!(h.bucket_count(5.0), Some(1));
    assert_eq!(h.bucket_count(10.0), Some(2));
    assert_eq!(h.bucket_count(f64::INFINITY), Some(2));
    assert_eq!(h.sum(), 10.0);
    assert_eq!(h.count(), 2);
}

#[test]
fn threshold_boundary_is_inclusive() {
    let h = Histogram::new("latency_seconds", "Latency.", &[5.0]).unwrap();
    let h = h.observe(5.0).unwrap();
    assert_eq!(h.bucket_count(5.0), Some(1));
}

#[test]
fn inf_bucket_always_equals_count() {
    let mut h = Histogram::new("latency_seconds", "Latency.", &[0.5, 2.0]).unwrap();
    for v in [-3.0, 0.1, 0.5, 1.9, 2.0, 100.0, 0.0] {
        h = h.observe(v).unwrap();
        assert_eq!(h.bucket_count(f64::INFINITY), Some(h.count()));
    }
    // Cumulative monotonicity across buckets.
    let counts: Vec<u64> = h.buckets().map(|(_, c)| c).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn bucket_count_bounds_match_matching_thresholds() {
    let thresholds = [1.0, 5.0, 10.0];
    let h = Histogram::new("latency_seconds", "Latency.", &thresholds).unwrap();
    let v = 4.0;
    let h = h.observe(v).unwrap();

    let incremented = h.buckets().filter(|(_, c)| *c == 1).count();
    let matching = thresholds.iter().filter(|t| v <= **t).count() + 1; // +Inf
    assert_eq!(incremented, matching);
}

#[test]
fn non_finite_observations_are_rejected() {
    let h = Histogram::new("latency_seconds", "Latency.", &[1.0]).unwrap();
    let err = h.observe(f64::NAN).expect_err("NaN must be rejected");
    assert_eq!(err.code(), "CONTRACT_VIOLATION");
}

#[test]
fn empty_bucket_list_degenerates_to_inf_only() {
    let h = Histogram::new("latency_seconds", "Latency.", &[]).unwrap();
    let h = h.observe(123.0).unwrap();
    assert_eq!(h.buckets().count(), 1);
    assert_eq!(h.bucket_count(f64::INFINITY), Some(1));
}
