pub use fixed_map::Key;
use fixed_map::Map as FixedMap;

use crate::ffs::FermateanFuzzySet;

/// Fermatean fuzzy encodings of the labels of a categorical term. Labels without
/// an entry map to the fallback.
pub struct CategoryTerms<K: Key> {
    terms: FixedMap<K, FermateanFuzzySet>,
    fallback: FermateanFuzzySet,
}

impl<K: Key> CategoryTerms<K> {
    pub fn new(fallback: FermateanFuzzySet) -> Self {
        Self {
            terms: FixedMap::new(),
            fallback,
        }
    }

    pub fn insert(&mut self, key: K, value: FermateanFuzzySet) {
        self.terms.insert(key, value);
    }

    pub fn with(mut self, key: K, value: FermateanFuzzySet) -> Self {
        self.insert(key, value);
        self
    }

    pub fn fallback(&self) -> FermateanFuzzySet {
        self.fallback
    }

    pub fn get(&self, key: K) -> FermateanFuzzySet {
        self.terms.get(key).copied().unwrap_or(self.fallback)
    }
}

#[test]
fn test_fallback() {
    #[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
    enum Sky {
        Clear,
        Overcast,
        Storm,
    }

    let clear = FermateanFuzzySet::new(0.9, 0.1).unwrap();
    let other = FermateanFuzzySet::new(0.5, 0.1).unwrap();
    let terms = CategoryTerms::new(other).with(Sky::Clear, clear);

    assert_eq!(terms.get(Sky::Clear), clear);
    assert_eq!(terms.get(Sky::Overcast), other);
    assert_eq!(terms.get(Sky::Storm), terms.fallback());
}
