use num::Float;

use crate::error::DomainError;

/// Absolute tolerance used for the Fermatean constraint and weight sums.
pub const EPSILON: f64 = 1e-9;

#[inline]
pub(crate) fn cube<F: Float>(x: F) -> F {
    x * x * x
}

/// `(Σ w_i · x_i^3)^(1/3)`
pub(crate) fn weighted_cube_mean<F: Float>(values: impl IntoIterator<Item = (F, F)>) -> F {
    let sum = values
        .into_iter()
        .fold(F::zero(), |accum, (x, w)| accum + w * cube(x));

    sum.cbrt()
}

/// Pulls values lying within `eps` outside of `[0, 1]` back onto the nearest bound.
/// Anything further out is returned untouched so validation can reject it.
pub(crate) fn snap_unit<F: Float>(x: F, eps: F) -> F {
    if x > F::one() && x - F::one() <= eps {
        F::one()
    } else if x < F::zero() && -x <= eps {
        F::zero()
    } else {
        x
    }
}

/// Explicitly rescales non-negative weights so they sum to one.
pub fn normalize_weights(raw: &[f64]) -> Result<Vec<f64>, DomainError> {
    if let Some((index, &weight)) = raw.iter().enumerate().find(|(_, w)| !w.is_finite() || **w < 0.) {
        return Err(DomainError::InvalidWeight { index, weight });
    }

    let total: f64 = raw.iter().sum();

    if !total.is_finite() || total <= 0. {
        return Err(DomainError::DegenerateWeights { sum: total });
    }

    Ok(raw.iter().map(|w| w / total).collect())
}

/// `n` weights of `1 / n` each.
pub fn uniform_weights(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    vec![1. / n as f64; n]
}

#[test]
fn test_weighted_cube_mean() {
    let mean = weighted_cube_mean([(0.5f64, 1.)]);
    assert!((mean - 0.5).abs() < 1e-12);

    let mean = weighted_cube_mean([(1.0f64, 0.5), (0., 0.5)]);
    assert!((mean - 0.5f64.cbrt()).abs() < 1e-12);
}

#[test]
fn test_snap_unit() {
    assert_eq!(snap_unit(1.0 + 1e-12, EPSILON), 1.);
    assert_eq!(snap_unit(-1e-12, EPSILON), 0.);
    assert_eq!(snap_unit(1.1, EPSILON), 1.1);
    assert_eq!(snap_unit(0.3, EPSILON), 0.3);
}

#[test]
fn test_weight_helpers() {
    assert_eq!(uniform_weights(4), vec![0.25; 4]);
    assert!(uniform_weights(0).is_empty());

    let weights = normalize_weights(&[2., 1., 1.]).unwrap();
    assert_eq!(weights, vec![0.5, 0.25, 0.25]);

    assert_eq!(normalize_weights(&[0., 0.]), Err(DomainError::DegenerateWeights { sum: 0. }));
    assert_eq!(normalize_weights(&[]), Err(DomainError::DegenerateWeights { sum: 0. }));
    assert_eq!(
        normalize_weights(&[1., -0.5]),
        Err(DomainError::InvalidWeight { index: 1, weight: -0.5 })
    );
}
