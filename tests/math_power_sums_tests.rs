#![cfg(feature = "dev")]
//! Tests for power-sum aggregation.
//!
//! These tests verify the eight sums feeding the quadratic normal equations:
//! - `Σ x^j` for `j = 0..=4`
//! - `Σ x^j·y` for `j = 0..=2`

use approx::assert_relative_eq;

use quadfit::internals::math::power_sums::PowerSums;
use quadfit::internals::primitives::sample::Sample;

fn samples(points: &[(f64, f64)]) -> Vec<Sample<f64>> {
    points.iter().copied().map(Sample::from).collect()
}

// ============================================================================
// Accumulation Tests
// ============================================================================

#[test]
fn test_empty_sums_are_zero() {
    let sums = PowerSums::<f64>::accumulate(&[]);
    assert_eq!(sums, PowerSums::zero());
    assert_eq!(sums, PowerSums::default());
}

#[test]
fn test_sums_small_set() {
    // x = [1, 2, 3], y = [2, 3, 5]
    let sums = PowerSums::accumulate(&samples(&[(1.0, 2.0), (2.0, 3.0), (3.0, 5.0)]));

    assert_eq!(sums.x_pow, [3.0, 6.0, 14.0, 36.0, 98.0]);
    // Σy = 10, Σxy = 2 + 6 + 15, Σx²y = 2 + 12 + 45
    assert_eq!(sums.xy_pow, [10.0, 23.0, 59.0]);
    assert_eq!(sums.count(), 3.0);
}

#[test]
fn test_sums_match_powi() {
    let data = samples(&[(-0.7, 1.1), (0.2, -3.4), (1.9, 0.5), (2.6, 7.25)]);
    let sums = PowerSums::accumulate(&data);

    for j in 0..5 {
        let expected: f64 = data.iter().map(|s| s.x.powi(j)).sum();
        assert_relative_eq!(sums.x_pow[j as usize], expected, max_relative = 1e-12);
    }
    for j in 0..3 {
        let expected: f64 = data.iter().map(|s| s.x.powi(j) * s.y).sum();
        assert_relative_eq!(sums.xy_pow[j as usize], expected, max_relative = 1e-12);
    }
}

#[test]
fn test_zeroth_sum_counts_non_finite_samples() {
    let sums = PowerSums::accumulate(&samples(&[(f64::NAN, 1.0), (0.0, 1.0)]));
    assert_eq!(sums.x_pow[0], 2.0);
    assert!(sums.x_pow[1].is_nan());
}

#[test]
fn test_sums_order_independent() {
    let forward = samples(&[(1.0, 1.0), (2.0, 4.0), (4.0, 16.0), (8.0, 64.0)]);
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(
        PowerSums::accumulate(&forward),
        PowerSums::accumulate(&reversed)
    );
}

#[test]
fn test_sums_f32() {
    let data: Vec<Sample<f32>> = vec![Sample::new(1.0, 1.0), Sample::new(2.0, 2.0)];
    let sums = PowerSums::accumulate(&data);
    assert_eq!(sums.x_pow, [2.0f32, 3.0, 5.0, 9.0, 17.0]);
    assert_eq!(sums.xy_pow, [3.0f32, 5.0, 9.0]);
}

// ============================================================================
// Normal Equation Layout Tests
// ============================================================================

#[test]
fn test_normal_matrix_is_hankel() {
    let sums = PowerSums::accumulate(&samples(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]));
    let m = sums.normal_matrix();

    #[rustfmt::skip]
    let expected = [
        3.0,  6.0, 14.0,
        6.0, 14.0, 36.0,
        14.0, 36.0, 98.0,
    ];
    assert_eq!(m, expected);

    // Symmetric
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(m[r * 3 + c], m[c * 3 + r]);
        }
    }
}

#[test]
fn test_rhs() {
    let sums = PowerSums::accumulate(&samples(&[(2.0, 3.0)]));
    assert_eq!(sums.rhs(), [3.0, 6.0, 12.0]);
}
