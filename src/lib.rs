//! Fermatean fuzzy risk aggregation for boil-off gas (BOG) release decisions.
//!
//! Per-criterion risk judgments are [`FermateanFuzzySet`] values, combined with
//! the [`Ffldwa`] operator, optionally weighted by [`derive_weights`] (FF-SWARA),
//! and graded by [`BogReleaseRules`] together with the tank pressure.

mod config;
mod criterion;
mod error;
mod ffs;
mod inputs;
mod mapping;
mod math;
mod ops;
mod outputs;
mod panel;
mod rules;
mod swara;
mod terms;

pub use config::{AggregationConfig, EngineConfig};
pub use criterion::{BogCriteria, Criteria, Criterion, CriterionKey};
pub use error::{BogError, BogResult, ConfigError, DomainError, ShapeError};
pub use ffs::FermateanFuzzySet;
pub use inputs::Assessment;
pub use mapping::{EnvironmentalObservation, MappingConfig, RoadType, SiteType, TimeOfDay, WeatherCondition};
pub use math::{normalize_weights, uniform_weights, EPSILON};
pub use ops::{AggregationOp, Ffldwa, DEFAULT_SHARPNESS};
pub use outputs::AggregatedCriteria;
pub use panel::{Expert, ExpertPanel};
pub use rules::{
    BogReleaseRules, PressureThresholds, ReleaseDecision, ReleaseReason, RiskAssessment, RiskLevel, RiskThresholds,
};
pub use swara::{derive_weights, derive_weights_from_ffs, SwaraWeights};
pub use terms::{CategoryTerms, Key};
