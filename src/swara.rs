use std::cmp::Ordering;

use tracing::debug;

use crate::error::{BogResult, DomainError, ShapeError};
use crate::ffs::FermateanFuzzySet;

/// Weights derived by FF-SWARA, in descending-importance rank order.
#[derive(Clone, Debug, PartialEq)]
pub struct SwaraWeights {
    ranking: Vec<usize>,
    comparative_significance: Vec<f64>,
    coefficients: Vec<f64>,
    raw_weights: Vec<f64>,
    weights: Vec<f64>,
}

impl SwaraWeights {
    /// `ranking()[r]` is the input index of the criterion placed at rank `r`.
    pub fn ranking(&self) -> &[usize] {
        &self.ranking
    }

    /// `c_r`, the drop in score from the criterion ranked just above.
    pub fn comparative_significance(&self) -> &[f64] {
        &self.comparative_significance
    }

    /// `k_r = c_r + 1`
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// `q_r = q_{r-1} / k_r`, before normalisation.
    pub fn raw_weights(&self) -> &[f64] {
        &self.raw_weights
    }

    /// Normalised weights in rank order. Sums to one.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Normalised weights rearranged back into the order the scores were given in.
    pub fn in_input_order(&self) -> Vec<f64> {
        let mut out = vec![0.; self.weights.len()];

        for (&index, &weight) in self.ranking.iter().zip(&self.weights) {
            out[index] = weight;
        }

        out
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Stepwise Weight Assessment Ratio Analysis over raw importance scores
/// (higher means more important).
pub fn derive_weights(criteria_scores: &[f64]) -> BogResult<SwaraWeights> {
    if criteria_scores.is_empty() {
        return Err(ShapeError::Empty { what: "criteria scores" }.into());
    }

    if let Some((index, &score)) = criteria_scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(DomainError::NonFiniteScore { index, score }.into());
    }

    let mut ranking: Vec<usize> = (0..criteria_scores.len()).collect();

    // Stable, so tied criteria keep their input order
    ranking.sort_by(|&a, &b| {
        criteria_scores[b]
            .partial_cmp(&criteria_scores[a])
            .unwrap_or(Ordering::Equal)
    });

    let n = ranking.len();
    let mut comparative_significance = Vec::with_capacity(n);
    let mut coefficients = Vec::with_capacity(n);
    let mut raw_weights = Vec::with_capacity(n);

    for (rank, &index) in ranking.iter().enumerate() {
        let (c, k, q) = match rank {
            0 => (0., 1., 1.),
            _ => {
                let c = criteria_scores[ranking[rank - 1]] - criteria_scores[index];
                let k = c + 1.;

                (c, k, raw_weights[rank - 1] / k)
            },
        };

        comparative_significance.push(c);
        coefficients.push(k);
        raw_weights.push(q);
    }

    let total: f64 = raw_weights.iter().sum();
    let weights: Vec<f64> = raw_weights.iter().map(|q| q / total).collect();

    debug!(?ranking, ?weights, "derived swara weights");

    Ok(SwaraWeights {
        ranking,
        comparative_significance,
        coefficients,
        raw_weights,
        weights,
    })
}

/// FF-SWARA with each criterion's importance given as a Fermatean fuzzy judgment,
/// ranked by its defuzzified score.
pub fn derive_weights_from_ffs(importance: &[FermateanFuzzySet]) -> BogResult<SwaraWeights> {
    let scores: Vec<f64> = importance.iter().map(FermateanFuzzySet::score).collect();

    derive_weights(&scores)
}
