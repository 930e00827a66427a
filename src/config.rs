//! Planner configuration.
//!
//! The boundary-layer input record: everything needed to build a
//! [`SectionProblem`]. Rebuilt from scratch on every request and turned
//! into a problem by [`PlannerConfig::validate`].
//!
//! # TOML Format
//!
//! ```toml
//! distance_km = 40.0
//! headway_min = 3.0
//! base_time = "10:00"
//! weight_policy = "strict"
//!
//! [express]
//! speed_kmph = 110.0
//! planned_departure = "10:22"
//! weight = 3.0
//!
//! [freight]
//! speed_kmph = 40.0
//! planned_departure = 600
//! weight = 1.0
//! ```
//!
//! Omitted keys fall back to [`PlannerConfig::default`]. A train table,
//! when present, must be complete.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClockError, PlannerError};
use crate::models::SectionProblem;
use crate::time::parse_clock;
use crate::validation::{validate_config, ValidationError};

/// A departure given either as "HH:MM" or as a minute offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClockInput {
    Minutes(f64),
    Clock(String),
}

impl ClockInput {
    /// Resolves to minutes after the reference midnight.
    ///
    /// # Errors
    /// Returns [`ClockError`] for a malformed clock string.
    pub fn to_minutes(&self) -> Result<f64, ClockError> {
        match self {
            ClockInput::Minutes(m) => Ok(*m),
            ClockInput::Clock(text) => parse_clock(text).map(|m| m as f64),
        }
    }
}

impl From<&str> for ClockInput {
    fn from(text: &str) -> Self {
        ClockInput::Clock(text.to_string())
    }
}

impl From<f64> for ClockInput {
    fn from(minutes: f64) -> Self {
        ClockInput::Minutes(minutes)
    }
}

/// Whether a zero priority weight is acceptable.
///
/// A zero weight makes a train's delay costless. It is rejected by
/// default and can be allowed explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightPolicy {
    /// Weights must be > 0.
    #[default]
    Strict,
    /// Weights must be >= 0.
    AllowZero,
}

impl WeightPolicy {
    /// Whether `weight` satisfies the policy. Non-finite weights never do.
    pub fn accepts(self, weight: f64) -> bool {
        weight.is_finite()
            && match self {
                WeightPolicy::Strict => weight > 0.0,
                WeightPolicy::AllowZero => weight >= 0.0,
            }
    }

    pub(crate) fn requirement(self) -> &'static str {
        match self {
            WeightPolicy::Strict => "must be greater than zero",
            WeightPolicy::AllowZero => "must be zero or more",
        }
    }
}

/// Per-train inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Running speed (km/h).
    pub speed_kmph: f64,
    /// Planned departure into the section.
    pub planned_departure: ClockInput,
    /// Priority weight.
    pub weight: f64,
}

impl TrainConfig {
    pub fn new(speed_kmph: f64, planned_departure: impl Into<ClockInput>, weight: f64) -> Self {
        Self {
            speed_kmph,
            planned_departure: planned_departure.into(),
            weight,
        }
    }

    fn default_express() -> Self {
        Self::new(110.0, "10:22", 3.0)
    }

    fn default_freight() -> Self {
        Self::new(40.0, "10:00", 1.0)
    }
}

/// Complete planner input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Section length (km).
    pub distance_km: f64,
    /// Safety headway (minutes).
    pub headway_min: f64,
    /// Origin of the time–distance chart. `None` = earliest planned departure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_time: Option<ClockInput>,
    /// Zero-weight acceptance.
    pub weight_policy: WeightPolicy,
    #[serde(default = "TrainConfig::default_express")]
    pub express: TrainConfig,
    #[serde(default = "TrainConfig::default_freight")]
    pub freight: TrainConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            distance_km: 40.0,
            headway_min: 3.0,
            base_time: Some(ClockInput::from("10:00")),
            weight_policy: WeightPolicy::Strict,
            express: TrainConfig::default_express(),
            freight: TrainConfig::default_freight(),
        }
    }
}

impl PlannerConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, PlannerError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Sets the section length.
    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Sets the safety headway.
    pub fn with_headway(mut self, headway_min: f64) -> Self {
        self.headway_min = headway_min;
        self
    }

    /// Sets the chart origin.
    pub fn with_base_time(mut self, base_time: ClockInput) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Sets the weight policy.
    pub fn with_weight_policy(mut self, policy: WeightPolicy) -> Self {
        self.weight_policy = policy;
        self
    }

    /// Sets the express inputs.
    pub fn with_express(mut self, express: TrainConfig) -> Self {
        self.express = express;
        self
    }

    /// Sets the freight inputs.
    pub fn with_freight(mut self, freight: TrainConfig) -> Self {
        self.freight = freight;
        self
    }

    /// Sets the express planned departure.
    pub fn with_express_departure(mut self, departure: ClockInput) -> Self {
        self.express.planned_departure = departure;
        self
    }

    /// Sets the freight planned departure.
    pub fn with_freight_departure(mut self, departure: ClockInput) -> Self {
        self.freight.planned_departure = departure;
        self
    }

    /// Validates the configuration and builds the planning problem.
    pub fn validate(&self) -> Result<SectionProblem, Vec<ValidationError>> {
        validate_config(self)
    }

    /// Chart origin in minutes: `base_time` when set and parseable,
    /// otherwise the earlier of the two planned departures.
    pub fn chart_base_min(&self, problem: &SectionProblem) -> f64 {
        self.base_time
            .as_ref()
            .and_then(|b| b.to_minutes().ok())
            .unwrap_or_else(|| {
                problem
                    .express
                    .planned_departure_min
                    .min(problem.freight.planned_departure_min)
            })
    }
}
