use crate::criterion::{Criterion, CriterionKey};
use crate::ffs::FermateanFuzzySet;

/// One aggregated value per criterion, in registration order.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedCriteria {
    keys: Vec<CriterionKey>,
    values: Vec<FermateanFuzzySet>,
}

impl AggregatedCriteria {
    pub(crate) fn new(keys: Vec<CriterionKey>, values: Vec<FermateanFuzzySet>) -> Self {
        debug_assert_eq!(keys.len(), values.len());

        Self { keys, values }
    }

    pub fn get(&self, criterion: Criterion) -> Option<FermateanFuzzySet> {
        self.keys
            .iter()
            .position(|key| *key == criterion.0)
            .map(|i| self.values[i])
    }

    /// Ready to hand to [`crate::BogReleaseRules::evaluate_release_conditions`].
    pub fn values(&self) -> &[FermateanFuzzySet] {
        &self.values
    }

    pub fn scores(&self) -> Vec<f64> {
        self.values.iter().map(FermateanFuzzySet::score).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, FermateanFuzzySet)> + '_ {
        self.keys
            .iter()
            .zip(&self.values)
            .map(|(key, value)| (Criterion(*key), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
