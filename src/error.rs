/// A fuzzy value, weight or measurement outside the domain the operation is defined on.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("degree out of range: mu={mu}, nu={nu} must both lie in [0, 1]")]
    DegreeOutOfRange { mu: f64, nu: f64 },

    #[error("fermatean constraint violated: mu^3 + nu^3 = {cube_sum} > 1 (mu={mu}, nu={nu})")]
    FermateanViolation { mu: f64, nu: f64, cube_sum: f64 },

    #[error("invalid weight {weight} at position {index}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("weights sum to {sum}, expected a finite positive total")]
    DegenerateWeights { sum: f64 },

    #[error("invalid aggregation sharpness c={c}, expected a finite positive value")]
    InvalidSharpness { c: f64 },

    #[error("dombi aggregation undefined for input {index} (mu={mu}, nu={nu})")]
    DombiSingularity { index: usize, mu: f64, nu: f64 },

    #[error("non-finite importance score {score} at position {index}")]
    NonFiniteScore { index: usize, score: f64 },

    #[error("invalid tank pressure {pressure}")]
    InvalidPressure { pressure: f64 },

    #[error("invalid measurement for {what}: {value}")]
    InvalidMeasurement { what: &'static str, value: f64 },
}

/// Sequences that are empty or disagree in length.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("empty input: {what}")]
    Empty { what: &'static str },

    #[error("length mismatch: {items} items but {weights} weights")]
    LengthMismatch { items: usize, weights: usize },

    #[error("assessment has no value for criterion {name:?}")]
    MissingCriterion { name: String },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{what} thresholds must be strictly ascending: {values:?}")]
    NotAscending { what: &'static str, values: Vec<f64> },

    #[error("{what} threshold {value} outside [0, 1]")]
    OutOfRange { what: &'static str, value: f64 },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type BogResult<T> = Result<T, BogError>;
