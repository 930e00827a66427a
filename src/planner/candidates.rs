//! Candidate plan generation.
//!
//! # Algorithm
//!
//! For each precedence order:
//! 1. The leader departs at its planned time and runs unobstructed.
//! 2. The trailer departs at `max(planned, leader_arrival + headway)`.
//! 3. Delays are clamped at zero and weighted into a score.
//!
//! Both orders go through the same `(leader, trailer)` computation, so
//! Plan A and Plan B differ only in the role assignment.
//!
//! # Complexity
//! O(1): closed-form arithmetic, no search.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::select_best;
use crate::models::{Movement, Plan, Precedence, SectionProblem, TrainRole};

/// Both candidate plans and the raw running times they were built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidatePlans {
    /// Option A: express first.
    pub plan_a: Plan,
    /// Option B: freight first.
    pub plan_b: Plan,
    /// Express running time over the section (minutes).
    pub express_travel_min: f64,
    /// Freight running time over the section (minutes).
    pub freight_travel_min: f64,
}

impl CandidatePlans {
    /// Candidate for a precedence order.
    pub fn plan(&self, precedence: Precedence) -> &Plan {
        match precedence {
            Precedence::ExpressFirst => &self.plan_a,
            Precedence::FreightFirst => &self.plan_b,
        }
    }
}

/// Result of one planning call: both candidates plus the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningOutcome {
    /// The two candidates and running times.
    #[serde(flatten)]
    pub candidates: CandidatePlans,
    /// Precedence of the recommended plan.
    pub selected: Precedence,
}

impl PlanningOutcome {
    /// The recommended plan.
    pub fn selected_plan(&self) -> &Plan {
        self.candidates.plan(self.selected)
    }

    /// The plan that was not recommended.
    pub fn rejected_plan(&self) -> &Plan {
        match self.selected {
            Precedence::ExpressFirst => &self.candidates.plan_b,
            Precedence::FreightFirst => &self.candidates.plan_a,
        }
    }

    /// Score difference in favour of the recommendation (>= 0).
    pub fn score_margin(&self) -> f64 {
        self.rejected_plan().score - self.selected_plan().score
    }
}

/// Builds the headway-safe plan for one precedence order.
///
/// The leader keeps its planned departure; the trailer is held until the
/// leader has cleared the section plus headway, but never departs before
/// its own planned time.
pub fn plan_for(problem: &SectionProblem, precedence: Precedence) -> Plan {
    let leader = problem.train(precedence.leader());
    let trailer = problem.train(precedence.trailer());

    let lead = Movement::new(
        leader.role,
        leader.planned_departure_min,
        leader.planned_departure_min,
        problem.travel_time(leader.role),
    );

    let held_until = problem.headway.earliest_entry_after(lead.arrival_min);
    let trail = Movement::new(
        trailer.role,
        trailer.planned_departure_min,
        trailer.planned_departure_min.max(held_until),
        problem.travel_time(trailer.role),
    );

    let (express, freight) = match precedence.leader() {
        TrainRole::Express => (lead, trail),
        TrainRole::Freight => (trail, lead),
    };

    let plan = Plan {
        precedence,
        express,
        freight,
        score: weighted_score(problem, &express, &freight),
    };

    debug!(
        option = precedence.option(),
        express_dep = plan.express.departure_min,
        freight_dep = plan.freight.departure_min,
        score = plan.score,
        "candidate plan"
    );
    if plan.crosses_midnight() {
        warn!(
            option = precedence.option(),
            clearance_min = plan.clearance_min(),
            "plan runs past midnight of the operating day"
        );
    }

    plan
}

/// Σ weight × delay over both trains.
pub fn weighted_score(problem: &SectionProblem, express: &Movement, freight: &Movement) -> f64 {
    problem.express.weight * express.delay_min + problem.freight.weight * freight.delay_min
}

/// Generates Plan A (express first) and Plan B (freight first).
pub fn generate_candidates(problem: &SectionProblem) -> CandidatePlans {
    let [plan_a, plan_b] = Precedence::ALL.map(|precedence| plan_for(problem, precedence));
    CandidatePlans {
        plan_a,
        plan_b,
        express_travel_min: problem.travel_time(TrainRole::Express),
        freight_travel_min: problem.travel_time(TrainRole::Freight),
    }
}

/// Generates both candidates and recommends the lower-scoring one.
///
/// # Example
///
/// ```
/// use u_single_track::models::{Precedence, SafetyHeadway, Section, SectionProblem, TrainProfile, TrainRole};
/// use u_single_track::planner;
///
/// let problem = SectionProblem::new(
///     Section::new(40.0),
///     SafetyHeadway::new(3.0),
///     TrainProfile::new(TrainRole::Express, 110.0, 622.0).with_weight(3.0),
///     TrainProfile::new(TrainRole::Freight, 40.0, 600.0),
/// );
/// let outcome = planner::plan(&problem);
/// assert_eq!(outcome.selected, Precedence::ExpressFirst);
/// assert_eq!(outcome.candidates.plan_b.score, 123.0);
/// ```
pub fn plan(problem: &SectionProblem) -> PlanningOutcome {
    let candidates = generate_candidates(problem);
    let selected = select_best(&candidates.plan_a, &candidates.plan_b).precedence;
    debug!(
        selected = selected.option(),
        score_a = candidates.plan_a.score,
        score_b = candidates.plan_b.score,
        "plan selected"
    );
    PlanningOutcome {
        candidates,
        selected,
    }
}

/// Plans independent section problems one after another.
pub fn plan_batch(problems: &[SectionProblem]) -> Vec<PlanningOutcome> {
    problems.iter().map(plan).collect()
}
