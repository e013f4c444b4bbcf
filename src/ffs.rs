use std::fmt;

use crate::error::DomainError;
use crate::math::{cube, EPSILON};

/// A Fermatean fuzzy value: a membership degree `mu` and a non-membership
/// degree `nu`, both in `[0, 1]`, with `mu^3 + nu^3 <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FermateanFuzzySet {
    mu: f64,
    nu: f64,
}

impl FermateanFuzzySet {
    pub fn new(mu: f64, nu: f64) -> Result<Self, DomainError> {
        let in_unit = |x: f64| (0. ..=1.).contains(&x);

        if !in_unit(mu) || !in_unit(nu) {
            return Err(DomainError::DegreeOutOfRange { mu, nu });
        }

        let cube_sum = cube(mu) + cube(nu);

        if cube_sum > 1. + EPSILON {
            return Err(DomainError::FermateanViolation { mu, nu, cube_sum });
        }

        Ok(Self { mu, nu })
    }

    /// For literals known to satisfy the constraint.
    pub(crate) fn new_unchecked(mu: f64, nu: f64) -> Self {
        debug_assert!(Self::new(mu, nu).is_ok(), "invalid fermatean literal ({mu}, {nu})");

        Self { mu, nu }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn nu(&self) -> f64 {
        self.nu
    }

    /// Defuzzified score `(1 + mu^3 - nu^3) / 2`, always in `[0, 1]`.
    pub fn score(&self) -> f64 {
        (1. + cube(self.mu) - cube(self.nu)) / 2.
    }

    /// Indeterminacy degree `(1 - mu^3 - nu^3)^(1/3)`.
    pub fn hesitancy(&self) -> f64 {
        // Can dip a hair below zero for values accepted within tolerance
        (1. - cube(self.mu) - cube(self.nu)).max(0.).cbrt()
    }
}

impl fmt::Display for FermateanFuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FFS(mu={}, nu={})", self.mu, self.nu)
    }
}
