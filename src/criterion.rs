use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A criterion key
    pub struct CriterionKey;
}

/// Handle to a criterion registered in [`Criteria`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Criterion(pub(crate) CriterionKey);

impl Criterion {
    pub fn key(&self) -> CriterionKey {
        self.0
    }
}

/// Registry of the criteria a risk assessment is made over. Iterates in
/// registration order, which is also the order aggregated values come out in.
#[derive(Debug, Default)]
pub struct Criteria {
    names: SlotMap<CriterionKey, String>,
    order: Vec<CriterionKey>,
}

impl Criteria {
    pub fn new() -> Self {
        Self {
            names: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    pub fn add(&mut self, name: impl Into<String>) -> Criterion {
        let key = self.names.insert(name.into());

        self.order.push(key);

        Criterion(key)
    }

    pub fn name(&self, criterion: Criterion) -> Option<&str> {
        self.names.get(criterion.0).map(String::as_str)
    }

    pub fn contains(&self, criterion: Criterion) -> bool {
        self.names.contains_key(criterion.0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, &str)> + '_ {
        self.order
            .iter()
            .map(move |key| (Criterion(*key), self.names[*key].as_str()))
    }

    /// The five criteria of the BOG release assessment.
    pub fn bog_default() -> (Self, BogCriteria) {
        let mut criteria = Self::new();
        let handles = BogCriteria {
            population_density: criteria.add("population density"),
            road_type: criteria.add("road type"),
            weather: criteria.add("weather"),
            driving_time: criteria.add("driving time"),
            site_type: criteria.add("site type"),
        };

        (criteria, handles)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct BogCriteria {
    pub population_density: Criterion,
    pub road_type: Criterion,
    pub weather: Criterion,
    pub driving_time: Criterion,
    pub site_type: Criterion,
}

#[test]
fn test_registration_order() {
    let (criteria, handles) = Criteria::bog_default();
    let names: Vec<_> = criteria.iter().map(|(_, name)| name).collect();

    assert_eq!(
        names,
        ["population density", "road type", "weather", "driving time", "site type"]
    );
    assert_eq!(criteria.len(), 5);
    assert_eq!(criteria.name(handles.weather), Some("weather"));
    assert_eq!(criteria.iter().nth(3).map(|(c, _)| c), Some(handles.driving_time));
}

#[test]
fn test_foreign_handle() {
    let mut criteria = Criteria::new();
    let mut other = Criteria::new();

    criteria.add("a");
    other.add("a");
    let foreign = other.add("b");

    assert!(!criteria.contains(foreign));
    assert_eq!(criteria.name(foreign), None);
}
