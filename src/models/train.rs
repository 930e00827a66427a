//! Train model.
//!
//! A train profile describes one service wanting to enter the section:
//! its running speed, its planned departure, and how costly it is to
//! delay it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two service roles sharing the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainRole {
    /// Fast passenger service.
    Express,
    /// Slow goods service.
    Freight,
}

impl TrainRole {
    /// Both roles, express first.
    pub const ALL: [TrainRole; 2] = [TrainRole::Express, TrainRole::Freight];

    /// The other train in the pair.
    pub fn other(self) -> Self {
        match self {
            TrainRole::Express => TrainRole::Freight,
            TrainRole::Freight => TrainRole::Express,
        }
    }

    /// Lowercase name, used as field prefix in validation messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainRole::Express => "express",
            TrainRole::Freight => "freight",
        }
    }
}

impl fmt::Display for TrainRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainRole::Express => write!(f, "Express"),
            TrainRole::Freight => write!(f, "Freight"),
        }
    }
}

/// One train's planning inputs.
///
/// # Time Representation
/// `planned_departure_min` is minutes after the reference midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainProfile {
    /// Service role.
    pub role: TrainRole,
    /// Running speed over the section (km/h, > 0).
    pub speed_kmph: f64,
    /// Timetabled departure into the section (minutes).
    pub planned_departure_min: f64,
    /// Cost per minute of delay (higher = more important to keep on time).
    pub weight: f64,
}

impl TrainProfile {
    /// Creates a profile with weight 1.0.
    pub fn new(role: TrainRole, speed_kmph: f64, planned_departure_min: f64) -> Self {
        Self {
            role,
            speed_kmph,
            planned_departure_min,
            weight: 1.0,
        }
    }

    /// Sets the priority weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_other() {
        assert_eq!(TrainRole::Express.other(), TrainRole::Freight);
        assert_eq!(TrainRole::Freight.other(), TrainRole::Express);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(TrainRole::Express.to_string(), "Express");
        assert_eq!(TrainRole::Freight.as_str(), "freight");
    }

    #[test]
    fn test_profile_builder() {
        let p = TrainProfile::new(TrainRole::Express, 110.0, 622.0).with_weight(3.0);
        assert_eq!(p.role, TrainRole::Express);
        assert_eq!(p.speed_kmph, 110.0);
        assert_eq!(p.planned_departure_min, 622.0);
        assert_eq!(p.weight, 3.0);
    }
}
