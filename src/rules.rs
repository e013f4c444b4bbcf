use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::{BogResult, ConfigError, DomainError};
use crate::ffs::FermateanFuzzySet;
use crate::math::uniform_weights;
use crate::ops::Ffldwa;

/// Tank pressures (MPa) a release must reach at each risk level.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PressureThresholds {
    pub safe: f64,
    pub warning: f64,
    pub high_risk: f64,
    /// Upper reference pressure. The release policy never consults it.
    pub prohibited: f64,
}

impl PressureThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [self.safe, self.warning, self.high_risk, self.prohibited];

        if values.iter().any(|v| !v.is_finite()) || values.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::NotAscending {
                what: "pressure",
                values: values.to_vec(),
            });
        }

        Ok(())
    }
}

impl Default for PressureThresholds {
    fn default() -> Self {
        Self {
            safe: 0.5,
            warning: 0.6,
            high_risk: 0.7,
            prohibited: 0.8,
        }
    }
}

/// Lower score bounds of each risk level above [`RiskLevel::Safe`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub warning: f64,
    pub high_risk: f64,
    pub prohibited: f64,
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [self.warning, self.high_risk, self.prohibited];

        if let Some(&value) = values.iter().find(|v| !(0. ..=1.).contains(*v)) {
            return Err(ConfigError::OutOfRange { what: "risk score", value });
        }

        if values.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::NotAscending {
                what: "risk score",
                values: values.to_vec(),
            });
        }

        Ok(())
    }

    pub fn level(&self, score: f64) -> RiskLevel {
        if score >= self.prohibited {
            RiskLevel::Prohibited
        } else if score >= self.high_risk {
            RiskLevel::HighRisk
        } else if score >= self.warning {
            RiskLevel::Warning
        } else {
            RiskLevel::Safe
        }
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            warning: 0.4,
            high_risk: 0.6,
            prohibited: 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RiskLevel {
    Safe,
    Warning,
    HighRisk,
    Prohibited,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Safe => "Safe",
            Self::Warning => "Warning",
            Self::HighRisk => "High Risk",
            Self::Prohibited => "Prohibited",
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReleaseReason {
    Prohibited,
    HighRiskLocation,
    BelowHighRiskThreshold,
    WarningLocation,
    BelowWarningThreshold,
    SafeLocation,
    BelowSafeThreshold,
}

impl ReleaseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prohibited => "Prohibited location or weather condition",
            Self::HighRiskLocation => "High-risk location",
            Self::BelowHighRiskThreshold => "Pressure below high-risk threshold",
            Self::WarningLocation => "Warning location",
            Self::BelowWarningThreshold => "Pressure below warning threshold",
            Self::SafeLocation => "Safe location",
            Self::BelowSafeThreshold => "Pressure below safe threshold",
        }
    }
}

impl fmt::Display for ReleaseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The environmental risk a decision was based on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiskAssessment {
    pub overall: FermateanFuzzySet,
    pub score: f64,
    pub level: RiskLevel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseDecision {
    pub should_release: bool,
    pub reason: ReleaseReason,
    pub assessment: RiskAssessment,
}

/// Boil-off gas release rules. Holds read-only thresholds, so one instance can be
/// shared between threads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BogReleaseRules {
    pressure: PressureThresholds,
    risk: RiskThresholds,
    ffldwa: Ffldwa,
}

impl BogReleaseRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> BogResult<Self> {
        config.validate()?;

        Ok(Self {
            pressure: config.pressure,
            risk: config.risk,
            ffldwa: config.aggregation.build()?,
        })
    }

    pub fn pressure_thresholds(&self) -> &PressureThresholds {
        &self.pressure
    }

    pub fn risk_thresholds(&self) -> &RiskThresholds {
        &self.risk
    }

    pub fn ffldwa(&self) -> &Ffldwa {
        &self.ffldwa
    }

    pub fn map_risk_level(&self, risk_score: f64) -> RiskLevel {
        self.risk.level(risk_score)
    }

    /// Aggregates per-criterion risk with the given weights and grades the result.
    pub fn assess(&self, per_criterion: &[FermateanFuzzySet], weights: &[f64]) -> BogResult<RiskAssessment> {
        let overall = self.ffldwa.aggregate(per_criterion, weights)?;
        let score = overall.score();

        Ok(RiskAssessment {
            overall,
            score,
            level: self.map_risk_level(score),
        })
    }

    /// Higher risk levels demand a higher tank pressure before venting is allowed.
    pub fn decide(&self, tank_pressure: f64, level: RiskLevel) -> (bool, ReleaseReason) {
        let thresholds = &self.pressure;

        match level {
            RiskLevel::Prohibited => (false, ReleaseReason::Prohibited),
            RiskLevel::HighRisk if tank_pressure >= thresholds.high_risk => (true, ReleaseReason::HighRiskLocation),
            RiskLevel::HighRisk => (false, ReleaseReason::BelowHighRiskThreshold),
            RiskLevel::Warning if tank_pressure >= thresholds.warning => (true, ReleaseReason::WarningLocation),
            RiskLevel::Warning => (false, ReleaseReason::BelowWarningThreshold),
            RiskLevel::Safe if tank_pressure >= thresholds.safe => (true, ReleaseReason::SafeLocation),
            RiskLevel::Safe => (false, ReleaseReason::BelowSafeThreshold),
        }
    }

    /// Every criterion weighs `1 / N`.
    pub fn evaluate_release_conditions(
        &self,
        tank_pressure: f64,
        per_criterion: &[FermateanFuzzySet],
    ) -> BogResult<ReleaseDecision> {
        self.evaluate_with_weights(tank_pressure, per_criterion, &uniform_weights(per_criterion.len()))
    }

    /// Like [`Self::evaluate_release_conditions`] but with caller-chosen criterion
    /// weights, such as FF-SWARA output mapped back to input order.
    pub fn evaluate_with_weights(
        &self,
        tank_pressure: f64,
        per_criterion: &[FermateanFuzzySet],
        weights: &[f64],
    ) -> BogResult<ReleaseDecision> {
        if !tank_pressure.is_finite() {
            warn!(tank_pressure, "rejecting non-finite tank pressure");

            return Err(DomainError::InvalidPressure { pressure: tank_pressure }.into());
        }

        let assessment = self.assess(per_criterion, weights).map_err(|e| {
            warn!(error = %e, criteria = per_criterion.len(), "cannot assess release risk");
            e
        })?;
        let (should_release, reason) = self.decide(tank_pressure, assessment.level);

        info!(
            tank_pressure,
            score = assessment.score,
            level = %assessment.level,
            should_release,
            %reason,
            "evaluated bog release"
        );

        Ok(ReleaseDecision {
            should_release,
            reason,
            assessment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BogError, ShapeError};

    fn criteria(mu: f64, nu: f64) -> Vec<FermateanFuzzySet> {
        vec![FermateanFuzzySet::new(mu, nu).unwrap(); 5]
    }

    #[test]
    fn test_map_risk_level() {
        let rules = BogReleaseRules::new();

        assert_eq!(rules.map_risk_level(0.), RiskLevel::Safe);
        assert_eq!(rules.map_risk_level(0.3999), RiskLevel::Safe);
        assert_eq!(rules.map_risk_level(0.4), RiskLevel::Warning);
        assert_eq!(rules.map_risk_level(0.6), RiskLevel::HighRisk);
        assert_eq!(rules.map_risk_level(0.7999), RiskLevel::HighRisk);
        assert_eq!(rules.map_risk_level(0.8), RiskLevel::Prohibited);
        assert_eq!(rules.map_risk_level(1.), RiskLevel::Prohibited);
    }

    #[test]
    fn test_policy_table() {
        let rules = BogReleaseRules::new();

        assert_eq!(rules.decide(10., RiskLevel::Prohibited), (false, ReleaseReason::Prohibited));
        assert_eq!(rules.decide(0.7, RiskLevel::HighRisk), (true, ReleaseReason::HighRiskLocation));
        assert_eq!(rules.decide(0.69, RiskLevel::HighRisk), (false, ReleaseReason::BelowHighRiskThreshold));
        assert_eq!(rules.decide(0.6, RiskLevel::Warning), (true, ReleaseReason::WarningLocation));
        assert_eq!(rules.decide(0.59, RiskLevel::Warning), (false, ReleaseReason::BelowWarningThreshold));
        assert_eq!(rules.decide(0.5, RiskLevel::Safe), (true, ReleaseReason::SafeLocation));
        assert_eq!(rules.decide(0.49, RiskLevel::Safe), (false, ReleaseReason::BelowSafeThreshold));
    }

    #[test]
    fn test_prohibited_scenario() {
        let decision = BogReleaseRules::new()
            .evaluate_release_conditions(0.65, &criteria(0.9, 0.1))
            .unwrap();

        assert!(decision.assessment.score >= 0.8);
        assert_eq!(decision.assessment.level, RiskLevel::Prohibited);
        assert!(!decision.should_release);
        assert_eq!(decision.reason.to_string(), "Prohibited location or weather condition");
    }

    #[test]
    fn test_high_risk_below_threshold() {
        let decision = BogReleaseRules::new()
            .evaluate_release_conditions(0.55, &criteria(0.8, 0.3))
            .unwrap();

        assert_eq!(decision.assessment.level, RiskLevel::HighRisk);
        assert!(!decision.should_release);
        assert_eq!(decision.reason.as_str(), "Pressure below high-risk threshold");
    }

    #[test]
    fn test_safe_scenario() {
        let decision = BogReleaseRules::new()
            .evaluate_release_conditions(0.75, &criteria(0.2, 0.8))
            .unwrap();

        assert!(decision.assessment.score < 0.4);
        assert_eq!(decision.assessment.level, RiskLevel::Safe);
        assert_eq!((decision.should_release, decision.reason), (true, ReleaseReason::SafeLocation));
    }

    #[test]
    fn test_empty_criteria_is_an_error() {
        let err = BogReleaseRules::new().evaluate_release_conditions(0.9, &[]).unwrap_err();

        assert!(matches!(err, BogError::Shape(ShapeError::Empty { .. })));
    }

    #[test]
    fn test_non_finite_pressure() {
        let err = BogReleaseRules::new()
            .evaluate_release_conditions(f64::NAN, &criteria(0.2, 0.8))
            .unwrap_err();

        assert!(matches!(err, BogError::Domain(DomainError::InvalidPressure { .. })));
    }

    #[test]
    fn test_weighted_evaluation() {
        let rules = BogReleaseRules::new();
        let values = [
            FermateanFuzzySet::new(0.9, 0.1).unwrap(),
            FermateanFuzzySet::new(0.2, 0.8).unwrap(),
        ];

        let heavy_first = rules.evaluate_with_weights(0.65, &values, &[0.9, 0.1]).unwrap();
        let heavy_second = rules.evaluate_with_weights(0.65, &values, &[0.1, 0.9]).unwrap();

        assert!(heavy_first.assessment.score > heavy_second.assessment.score);
        assert!(matches!(
            rules.evaluate_with_weights(0.65, &values, &[1.]),
            Err(BogError::Shape(ShapeError::LengthMismatch { items: 2, weights: 1 }))
        ));
    }

    #[test]
    fn test_zero_weights_give_no_decision() {
        let rules = BogReleaseRules::new();
        let prohibited = criteria(0.9, 0.1);

        assert_eq!(
            rules.evaluate_with_weights(0.65, &prohibited, &[0.; 5]),
            Err(BogError::Domain(DomainError::DegenerateWeights { sum: 0. }))
        );
        assert!(crate::math::normalize_weights(&[0.; 5]).is_err());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(PressureThresholds::default().validate().is_ok());
        assert!(RiskThresholds::default().validate().is_ok());

        let pressure = PressureThresholds {
            warning: 0.4,
            ..Default::default()
        };
        assert!(matches!(pressure.validate(), Err(ConfigError::NotAscending { what: "pressure", .. })));

        let risk = RiskThresholds {
            prohibited: 1.2,
            ..Default::default()
        };
        assert_eq!(
            risk.validate(),
            Err(ConfigError::OutOfRange {
                what: "risk score",
                value: 1.2
            })
        );
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Safe < RiskLevel::Warning);
        assert!(RiskLevel::HighRisk < RiskLevel::Prohibited);
        assert_eq!(RiskLevel::HighRisk.to_string(), "High Risk");
    }
}
