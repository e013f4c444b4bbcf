use std::collections::HashMap;

use crate::criterion::{Criteria, Criterion, CriterionKey};
use crate::error::ShapeError;
use crate::ffs::FermateanFuzzySet;

/// One judge's Fermatean fuzzy value per criterion.
#[derive(Clone, Debug, Default)]
pub struct Assessment(pub(crate) HashMap<CriterionKey, FermateanFuzzySet>);

impl Assessment {
    pub fn new() -> Self {
        Assessment(HashMap::new())
    }

    pub fn add(&mut self, criterion: Criterion, value: FermateanFuzzySet) {
        self.0.insert(criterion.0, value);
    }

    pub fn get(&self, criterion: Criterion) -> Option<FermateanFuzzySet> {
        self.0.get(&criterion.0).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values in the registration order of `criteria`. Values for criteria that
    /// aren't registered are ignored.
    pub fn ordered(&self, criteria: &Criteria) -> Result<Vec<FermateanFuzzySet>, ShapeError> {
        criteria
            .iter()
            .map(|(criterion, name)| {
                self.get(criterion).ok_or_else(|| ShapeError::MissingCriterion {
                    name: name.to_owned(),
                })
            })
            .collect()
    }
}

#[test]
fn test_ordered() {
    let mut criteria = Criteria::new();
    let first = criteria.add("first");
    let second = criteria.add("second");
    let a = FermateanFuzzySet::new(0.1, 0.2).unwrap();
    let b = FermateanFuzzySet::new(0.3, 0.4).unwrap();

    let mut assessment = Assessment::new();
    assessment.add(second, b);
    assessment.add(first, a);

    assert_eq!(assessment.ordered(&criteria), Ok(vec![a, b]));
}

#[test]
fn test_missing_criterion() {
    let mut criteria = Criteria::new();
    let first = criteria.add("first");
    criteria.add("second");

    let mut assessment = Assessment::new();
    assessment.add(first, FermateanFuzzySet::new(0.5, 0.5).unwrap());

    assert_eq!(
        assessment.ordered(&criteria),
        Err(ShapeError::MissingCriterion {
            name: "second".to_owned()
        })
    );
}
