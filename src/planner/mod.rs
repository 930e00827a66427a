//! Section planner: candidate generation, selection, and reporting data.
//!
//! # Algorithm
//!
//! Two precedence orders exist for a two-train single-track section.
//! `generate_candidates` builds the headway-safe plan for each order and
//! `select_best` keeps the one with the lower weighted delay score
//! (express first on ties). Everything is closed-form and pure.
//!
//! # KPI and Charts
//!
//! `PlanKpi` summarises a plan; `TimeDistanceChart` samples the
//! distance-over-time trajectories a consumer can plot.
//!
//! # References
//!
//! - Hansen & Pachl (2014), "Railway Timetabling & Operations", Ch. 4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod candidates;
mod kpi;
mod select;
pub mod trajectory;

pub use candidates::{
    generate_candidates, plan, plan_batch, plan_for, weighted_score, CandidatePlans,
    PlanningOutcome,
};
pub use kpi::PlanKpi;
pub use select::select_best;
pub use trajectory::TimeDistanceChart;
