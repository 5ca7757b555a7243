// File: crates/heatmap-core/tests/scales.rs
// Purpose: Validate band, linear, and quantize scale math.

use heatmap_core::{linspace, BandScale, LinearScale, QuantizeScale, PALETTE};

const EPS: f64 = 1e-9;

#[test]
fn band_scale_covers_range_exactly() {
    let x = BandScale::new(0.0, 1040.0, 260);
    assert!((x.bandwidth() - 4.0).abs() < EPS);
    assert!((x.band_start(0) - 0.0).abs() < EPS);
    assert!((x.band_start(259) + x.bandwidth() - 1040.0).abs() < EPS);
    assert!((x.center(0) - 2.0).abs() < EPS);
}

#[test]
fn band_scale_single_category_fills_range() {
    let x = BandScale::new(10.0, 110.0, 1);
    assert!((x.bandwidth() - 100.0).abs() < EPS);
    assert!((x.center(0) - 60.0).abs() < EPS);
}

#[test]
fn linear_scale_maps_endpoints() {
    let s = LinearScale::new(2.0, 12.0, 0.0, 400.0);
    assert!((s.to_px(2.0) - 0.0).abs() < EPS);
    assert!((s.to_px(12.0) - 400.0).abs() < EPS);
    assert!((s.to_px(7.0) - 200.0).abs() < EPS);
}

#[test]
fn linear_scale_degenerate_domain_stays_finite() {
    let s = LinearScale::new(5.0, 5.0, 0.0, 400.0);
    assert!(s.to_px(5.0).is_finite());
}

#[test]
fn quantize_scale_buckets_are_equal_width() {
    let outputs = [0usize, 1, 2, 3];
    let q = QuantizeScale::new(0.0, 4.0, &outputs);
    assert_eq!(q.value_for(0.5), 0);
    assert_eq!(q.value_for(1.5), 1);
    assert_eq!(q.value_for(2.5), 2);
    assert_eq!(q.value_for(3.5), 3);
}

#[test]
fn quantize_scale_clamps_outside_domain() {
    let q = QuantizeScale::new(1.0, 13.0, &PALETTE);
    assert_eq!(q.value_for(0.0), PALETTE[0]);
    assert_eq!(q.value_for(1.0), PALETTE[0]);
    assert_eq!(q.value_for(13.0), PALETTE[10]);
    assert_eq!(q.value_for(99.0), PALETTE[10]);
}

#[test]
fn quantize_scale_is_deterministic_within_bucket() {
    let q = QuantizeScale::new(0.0, 11.0, &PALETTE);
    // both land in the same 1-degree bucket
    assert_eq!(q.value_for(3.1), q.value_for(3.9));
    assert_eq!(q.index_of(3.1), 3);
}

#[test]
fn quantize_thresholds_start_at_min_and_exclude_max() {
    let q = QuantizeScale::new(2.0, 13.0, &PALETTE);
    let t = q.thresholds();
    assert_eq!(t.len(), 11);
    assert!((t[0] - 2.0).abs() < EPS);
    assert!((t[1] - 3.0).abs() < EPS);
    assert!(*t.last().unwrap() < 13.0);
}

#[test]
fn linspace_endpoints_and_spacing() {
    let v = linspace(0.0, 10.0, 5);
    assert_eq!(v.len(), 5);
    assert!((v[0] - 0.0).abs() < EPS);
    assert!((v[4] - 10.0).abs() < EPS);
    assert!((v[1] - 2.5).abs() < EPS);
}
