use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BogResult, DomainError, ShapeError};
use crate::ffs::FermateanFuzzySet;
use crate::math::{cube, snap_unit, weighted_cube_mean, EPSILON};

pub const DEFAULT_SHARPNESS: f64 = 3.;

/// Formula used to combine weighted Fermatean fuzzy values into one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationOp {
    /// Weighted mean in the cube domain:
    ///
    /// ```text
    /// mu = (Σ w_i · mu_i^3)^(1/3)
    /// nu = (Σ w_i · nu_i^3)^(1/3)
    /// ```
    ///
    /// Total for every valid input; `c` does not take part.
    #[default]
    CubeMean,
    /// Fermatean Dombi weighted average with sharpness `c`:
    ///
    /// ```text
    /// mu = (1 - 1 / (1 + (Σ w_i (mu_i^3 / (1 - mu_i^3))^c)^(1/c)))^(1/3)
    /// nu = (1 / (1 + (Σ w_i ((1 - nu_i^3) / nu_i^3)^c)^(1/c)))^(1/3)
    /// ```
    ///
    /// Undefined when any input has `mu = 1` or `nu = 0`.
    Dombi,
}

impl AggregationOp {
    /// Returns the raw `(mu, nu)` pair. Shapes and weights must already be checked.
    pub fn call(self, ffs: &[FermateanFuzzySet], weights: &[f64], c: f64) -> Result<(f64, f64), DomainError> {
        match self {
            Self::CubeMean => {
                let mu = weighted_cube_mean(ffs.iter().map(|f| f.mu()).zip(weights.iter().copied()));
                let nu = weighted_cube_mean(ffs.iter().map(|f| f.nu()).zip(weights.iter().copied()));

                Ok((mu, nu))
            },
            Self::Dombi => {
                let mut mu_sum = 0.;
                let mut nu_sum = 0.;

                for (index, (f, w)) in ffs.iter().zip(weights.iter().copied()).enumerate() {
                    // Weightless items take no part, singular or not
                    if w == 0. {
                        continue;
                    }

                    let mu3 = cube(f.mu());
                    let nu3 = cube(f.nu());

                    if mu3 >= 1. || nu3 <= 0. {
                        return Err(DomainError::DombiSingularity {
                            index,
                            mu: f.mu(),
                            nu: f.nu(),
                        });
                    }

                    mu_sum += w * (mu3 / (1. - mu3)).powf(c);
                    nu_sum += w * ((1. - nu3) / nu3).powf(c);
                }

                let mu = (1. - 1. / (1. + mu_sum.powf(1. / c))).cbrt();
                let nu = (1. / (1. + nu_sum.powf(1. / c))).cbrt();

                Ok((mu, nu))
            },
        }
    }
}

/// Fermatean Fuzzy Linguistic Dombi Weighted Average operator.
///
/// Weights are used exactly as supplied. Callers that need a proper weighted
/// average pass a vector summing to one, e.g. [`crate::uniform_weights`] or the
/// output of [`crate::derive_weights`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ffldwa {
    op: AggregationOp,
    c: f64,
}

impl Ffldwa {
    pub fn new(c: f64) -> Result<Self, DomainError> {
        Self::with_op(AggregationOp::CubeMean, c)
    }

    pub fn with_op(op: AggregationOp, c: f64) -> Result<Self, DomainError> {
        if !c.is_finite() || c <= 0. {
            return Err(DomainError::InvalidSharpness { c });
        }

        Ok(Self { op, c })
    }

    pub fn op(&self) -> AggregationOp {
        self.op
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn aggregate(&self, ffs_list: &[FermateanFuzzySet], weights: &[f64]) -> BogResult<FermateanFuzzySet> {
        if ffs_list.is_empty() {
            return Err(ShapeError::Empty { what: "fuzzy values" }.into());
        }

        if ffs_list.len() != weights.len() {
            return Err(ShapeError::LengthMismatch {
                items: ffs_list.len(),
                weights: weights.len(),
            }
            .into());
        }

        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.)
        {
            return Err(DomainError::InvalidWeight { index, weight }.into());
        }

        let weight_sum: f64 = weights.iter().sum();

        if !weight_sum.is_finite() || weight_sum <= 0. {
            return Err(DomainError::DegenerateWeights { sum: weight_sum }.into());
        }

        if let ([single], [w]) = (ffs_list, weights) {
            if *w == 1. {
                return Ok(*single);
            }
        }

        let (mu, nu) = self.op.call(ffs_list, weights, self.c)?;
        let aggregated = FermateanFuzzySet::new(snap_unit(mu, EPSILON), snap_unit(nu, EPSILON))?;

        debug!(
            op = ?self.op,
            c = self.c,
            n = ffs_list.len(),
            mu = aggregated.mu(),
            nu = aggregated.nu(),
            "aggregated fermatean values"
        );

        Ok(aggregated)
    }
}

impl Default for Ffldwa {
    fn default() -> Self {
        Self {
            op: AggregationOp::CubeMean,
            c: DEFAULT_SHARPNESS,
        }
    }
}
