//! Plan (candidate solution) model.
//!
//! A plan fixes the order in which the two trains use the section and
//! records each train's actual departure, arrival, and delay, plus the
//! weighted delay score used to rank plans.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2
//! (weighted tardiness objectives)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TrainRole;
use crate::time::MINUTES_PER_DAY;

/// Which train is granted the section first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Precedence {
    /// Option A: express runs first, freight is held.
    ExpressFirst,
    /// Option B: freight runs first, express is held.
    FreightFirst,
}

impl Precedence {
    /// Both precedence orders, in tie-break order (A before B).
    pub const ALL: [Precedence; 2] = [Precedence::ExpressFirst, Precedence::FreightFirst];

    /// Train that runs unobstructed.
    pub fn leader(self) -> TrainRole {
        match self {
            Precedence::ExpressFirst => TrainRole::Express,
            Precedence::FreightFirst => TrainRole::Freight,
        }
    }

    /// Train that may be held for the leader plus headway.
    pub fn trailer(self) -> TrainRole {
        self.leader().other()
    }

    /// Option letter ("A" or "B").
    pub fn option(self) -> &'static str {
        match self {
            Precedence::ExpressFirst => "A",
            Precedence::FreightFirst => "B",
        }
    }

    /// Operator-facing description of the plan.
    pub fn label(self) -> &'static str {
        match self {
            Precedence::ExpressFirst => "Option A – Hold Freight; Express first",
            Precedence::FreightFirst => "Option B – Delay Express; Freight first",
        }
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One train's passage through the section.
///
/// Times are minutes after the reference midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Train role.
    pub role: TrainRole,
    /// Actual entry time.
    pub departure_min: f64,
    /// Actual exit time (departure + travel time).
    pub arrival_min: f64,
    /// Minutes later than planned, never negative.
    pub delay_min: f64,
}

impl Movement {
    /// Builds a movement from an actual departure, clamping delay at zero.
    pub fn new(role: TrainRole, planned_min: f64, departure_min: f64, travel_min: f64) -> Self {
        Self {
            role,
            departure_min,
            arrival_min: departure_min + travel_min,
            delay_min: (departure_min - planned_min).max(0.0),
        }
    }

    /// Occupation time of the section (minutes).
    #[inline]
    pub fn running_min(&self) -> f64 {
        self.arrival_min - self.departure_min
    }

    /// Whether the train ran on time.
    #[inline]
    pub fn is_on_time(&self) -> bool {
        self.delay_min == 0.0
    }
}

/// A candidate plan for the section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Precedence order this plan implements.
    pub precedence: Precedence,
    /// Express passage.
    pub express: Movement,
    /// Freight passage.
    pub freight: Movement,
    /// Σ weight × delay over both trains.
    pub score: f64,
}

impl Plan {
    /// Movement for a role.
    pub fn movement(&self, role: TrainRole) -> &Movement {
        match role {
            TrainRole::Express => &self.express,
            TrainRole::Freight => &self.freight,
        }
    }

    /// Movement of the train given right-of-way.
    pub fn leader(&self) -> &Movement {
        self.movement(self.precedence.leader())
    }

    /// Movement of the held train.
    pub fn trailer(&self) -> &Movement {
        self.movement(self.precedence.trailer())
    }

    /// Gap between the leader clearing and the trailer entering (minutes).
    pub fn headway_gap_min(&self) -> f64 {
        self.trailer().departure_min - self.leader().arrival_min
    }

    /// Time the section is clear again (latest arrival).
    pub fn clearance_min(&self) -> f64 {
        self.express.arrival_min.max(self.freight.arrival_min)
    }

    /// Sum of both delays, unweighted (minutes).
    pub fn total_delay_min(&self) -> f64 {
        self.express.delay_min + self.freight.delay_min
    }

    /// Whether any arrival falls at or after the next midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.clearance_min() >= MINUTES_PER_DAY
    }
}
