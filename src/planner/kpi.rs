//! Plan quality metrics (KPIs).
//!
//! Summarises a computed plan for reporting and threshold checks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Delay | Sum of both trains' delays |
//! | Maximum Delay | Largest single delay |
//! | Weighted Score | Σ weight × delay |
//! | Clearance | Latest arrival (section free again) |
//! | Headway Gap | Trailer departure − leader arrival |
//! | Headway Slack | Headway gap − required headway |
//! | On-Time Rate | Fraction of trains with zero delay |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::{Plan, SectionProblem};

/// Plan performance indicators. All times are in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanKpi {
    pub total_delay_min: f64,
    pub max_delay_min: f64,
    pub weighted_score: f64,
    pub clearance_min: f64,
    pub headway_gap_min: f64,
    /// Gap beyond the required headway; zero when the trailer was held.
    pub headway_slack_min: f64,
    /// Fraction of the two trains departing on time (0.0, 0.5 or 1.0).
    pub on_time_rate: f64,
}

impl PlanKpi {
    /// Computes KPIs for a plan of the given problem.
    pub fn calculate(plan: &Plan, problem: &SectionProblem) -> Self {
        let on_time = [plan.express, plan.freight]
            .iter()
            .filter(|m| m.is_on_time())
            .count();
        let gap = plan.headway_gap_min();

        Self {
            total_delay_min: plan.total_delay_min(),
            max_delay_min: plan.express.delay_min.max(plan.freight.delay_min),
            weighted_score: plan.score,
            clearance_min: plan.clearance_min(),
            headway_gap_min: gap,
            headway_slack_min: (gap - problem.headway.minutes).max(0.0),
            on_time_rate: on_time as f64 / 2.0,
        }
    }

    /// Whether the plan meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_delay_min: f64, min_slack_min: f64) -> bool {
        self.max_delay_min <= max_delay_min && self.headway_slack_min >= min_slack_min
    }
}
