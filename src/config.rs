use serde::{Deserialize, Serialize};

use crate::error::{BogResult, ConfigError, DomainError};
use crate::ops::{AggregationOp, Ffldwa, DEFAULT_SHARPNESS};
use crate::rules::{PressureThresholds, RiskThresholds};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub op: AggregationOp,
    /// Sharpness of the Dombi power mean. Must be positive.
    pub c: f64,
}

impl AggregationConfig {
    pub fn build(&self) -> Result<Ffldwa, DomainError> {
        Ffldwa::with_op(self.op, self.c)
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            op: AggregationOp::CubeMean,
            c: DEFAULT_SHARPNESS,
        }
    }
}

/// Everything [`crate::BogReleaseRules`] is configured with. Missing keys fall back
/// to the defaults.
///
/// ```toml
/// [aggregation]
/// op = "cube_mean"
/// c = 3.0
///
/// [pressure]
/// safe = 0.5
/// warning = 0.6
/// high_risk = 0.7
/// prohibited = 0.8
///
/// [risk]
/// warning = 0.4
/// high_risk = 0.6
/// prohibited = 0.8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub aggregation: AggregationConfig,
    pub pressure: PressureThresholds,
    pub risk: RiskThresholds,
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse { reason: e.to_string() })
    }

    pub fn validate(&self) -> BogResult<()> {
        self.pressure.validate()?;
        self.risk.validate()?;
        self.aggregation.build()?;

        Ok(())
    }
}
