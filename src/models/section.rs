//! Section and headway models.

use serde::{Deserialize, Serialize};

use super::{TrainProfile, TrainRole};
use crate::time::travel_time_minutes;

/// A single-track section between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section length (km, > 0).
    pub distance_km: f64,
}

impl Section {
    /// Creates a section of the given length.
    pub fn new(distance_km: f64) -> Self {
        Self { distance_km }
    }

    /// Running time of a train over this section (minutes).
    #[inline]
    pub fn travel_time_for(&self, train: &TrainProfile) -> f64 {
        travel_time_minutes(self.distance_km, train.speed_kmph)
    }
}

/// Minimum gap between one train clearing the section and the next
/// entering it (minutes, >= 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafetyHeadway {
    pub minutes: f64,
}

impl SafetyHeadway {
    /// Creates a headway.
    pub fn new(minutes: f64) -> Self {
        Self { minutes }
    }

    /// Earliest entry for a trailing train given the leader's arrival.
    #[inline]
    pub fn earliest_entry_after(&self, leader_arrival_min: f64) -> f64 {
        leader_arrival_min + self.minutes
    }
}

/// A validated planning problem: section, headway, and both trains.
///
/// Built by [`crate::config::PlannerConfig::validate`]; every field
/// satisfies the input contract, so planning it cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProblem {
    pub section: Section,
    pub headway: SafetyHeadway,
    pub express: TrainProfile,
    pub freight: TrainProfile,
}

impl SectionProblem {
    /// Creates a problem. Callers are expected to have validated the inputs.
    pub fn new(
        section: Section,
        headway: SafetyHeadway,
        express: TrainProfile,
        freight: TrainProfile,
    ) -> Self {
        Self {
            section,
            headway,
            express,
            freight,
        }
    }

    /// Profile for a role.
    pub fn train(&self, role: TrainRole) -> &TrainProfile {
        match role {
            TrainRole::Express => &self.express,
            TrainRole::Freight => &self.freight,
        }
    }

    /// Running time for a role (minutes).
    pub fn travel_time(&self, role: TrainRole) -> f64 {
        self.section.travel_time_for(self.train(role))
    }
}
