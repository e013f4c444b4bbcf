use tracing::debug;

use crate::criterion::Criteria;
use crate::error::{BogResult, ShapeError};
use crate::inputs::Assessment;
use crate::ops::Ffldwa;
use crate::outputs::AggregatedCriteria;

#[derive(Clone, Debug)]
pub struct Expert {
    pub name: String,
    pub weight: f64,
    pub assessment: Assessment,
}

/// A group of weighted experts, each judging every criterion.
#[derive(Clone, Debug, Default)]
pub struct ExpertPanel {
    experts: Vec<Expert>,
}

impl ExpertPanel {
    pub fn new() -> Self {
        Self { experts: Vec::new() }
    }

    pub fn add_expert(&mut self, name: impl Into<String>, weight: f64, assessment: Assessment) {
        self.experts.push(Expert {
            name: name.into(),
            weight,
            assessment,
        });
    }

    pub fn experts(&self) -> &[Expert] {
        &self.experts
    }

    pub fn weights(&self) -> Vec<f64> {
        self.experts.iter().map(|e| e.weight).collect()
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }

    /// For each criterion, combines the experts' judgments with `ffldwa` using the
    /// expert weights as given.
    pub fn aggregate(&self, criteria: &Criteria, ffldwa: &Ffldwa) -> BogResult<AggregatedCriteria> {
        if self.experts.is_empty() {
            return Err(ShapeError::Empty { what: "experts" }.into());
        }

        if criteria.is_empty() {
            return Err(ShapeError::Empty { what: "criteria" }.into());
        }

        // Row per expert, column per criterion
        let judgments = self
            .experts
            .iter()
            .map(|e| e.assessment.ordered(criteria))
            .collect::<Result<Vec<_>, _>>()?;
        let weights = self.weights();
        let mut keys = Vec::with_capacity(criteria.len());
        let mut values = Vec::with_capacity(criteria.len());

        for (column, (criterion, name)) in criteria.iter().enumerate() {
            let column_values: Vec<_> = judgments.iter().map(|row| row[column]).collect();
            let aggregated = ffldwa.aggregate(&column_values, &weights)?;

            debug!(criterion = name, score = aggregated.score(), "aggregated expert judgments");

            keys.push(criterion.0);
            values.push(aggregated);
        }

        Ok(AggregatedCriteria::new(keys, values))
    }
}
