//! Time–distance series for plan charts.
//!
//! Derives plot-ready data from a computed plan. Each train stands at the
//! origin station until it departs, moves linearly to the far end, and
//! stays there after arrival. Rendering is left to the consumer.

use serde::{Deserialize, Serialize};

use crate::models::{Movement, Plan, TrainRole};
use crate::time::format_clock;

/// Minutes shown after the last arrival.
pub const TAIL_MIN: f64 = 10.0;

/// Longest sampled window (two operating days). Later minutes are dropped.
pub const MAX_CHART_SPAN_MIN: i64 = 2 * 1440;

/// Default spacing of clock ticks on the time axis (minutes).
pub const DEFAULT_TICK_EVERY_MIN: i64 = 5;

/// Distance of a train from the origin station at time `t` (km).
pub fn position_at(movement: &Movement, distance_km: f64, t: f64) -> f64 {
    if t < movement.departure_min {
        0.0
    } else if t > movement.arrival_min {
        distance_km
    } else {
        let running = movement.running_min();
        if running <= 0.0 {
            return distance_km;
        }
        distance_km * (t - movement.departure_min) / running
    }
}

/// A sampled point: (minute, km from origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDistancePoint {
    pub minute: i64,
    pub distance_km: f64,
}

/// One train's sampled trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainSeries {
    pub role: TrainRole,
    pub points: Vec<TimeDistancePoint>,
}

/// A labelled position on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTick {
    pub minute: i64,
    pub label: String,
}

/// Sampled chart data for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDistanceChart {
    /// First sampled minute.
    pub start_min: i64,
    /// Last sampled minute (inclusive).
    pub end_min: i64,
    /// Whether the window was cut at `MAX_CHART_SPAN_MIN`.
    pub truncated: bool,
    pub express: TrainSeries,
    pub freight: TrainSeries,
    pub ticks: Vec<AxisTick>,
}

impl TimeDistanceChart {
    /// Samples both trains once per minute from `base_min` through
    /// `floor(last arrival + 10)`, at most `MAX_CHART_SPAN_MIN` minutes.
    ///
    /// If `base_min` lies after that window the series are empty.
    pub fn sample(plan: &Plan, distance_km: f64, base_min: f64) -> Self {
        let start_min = base_min.trunc() as i64;
        let full_end = (plan.clearance_min() + TAIL_MIN).trunc() as i64;
        let cap = start_min.saturating_add(MAX_CHART_SPAN_MIN);
        let truncated = full_end > cap;
        let end_min = full_end.min(cap);

        let series = |movement: &Movement| TrainSeries {
            role: movement.role,
            points: (start_min..=end_min)
                .map(|minute| TimeDistancePoint {
                    minute,
                    distance_km: position_at(movement, distance_km, minute as f64),
                })
                .collect(),
        };

        Self {
            start_min,
            end_min,
            truncated,
            express: series(&plan.express),
            freight: series(&plan.freight),
            ticks: axis_ticks(start_min, end_min, DEFAULT_TICK_EVERY_MIN),
        }
    }

    /// Series for a role.
    pub fn series(&self, role: TrainRole) -> &TrainSeries {
        match role {
            TrainRole::Express => &self.express,
            TrainRole::Freight => &self.freight,
        }
    }
}

/// Clock-labelled ticks every `every_min` minutes from `start` through `end`.
///
/// A non-positive spacing yields no ticks.
pub fn axis_ticks(start: i64, end: i64, every_min: i64) -> Vec<AxisTick> {
    if every_min <= 0 {
        return Vec::new();
    }
    (start..=end)
        .step_by(every_min as usize)
        .map(|minute| AxisTick {
            minute,
            label: format_clock(minute as f64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Precedence, SafetyHeadway, Section, SectionProblem, TrainProfile};
    use crate::planner::plan_for;

    fn plan_b() -> Plan {
        let p = SectionProblem::new(
            Section::new(40.0),
            SafetyHeadway::new(3.0),
            TrainProfile::new(TrainRole::Express, 110.0, 622.0).with_weight(3.0),
            TrainProfile::new(TrainRole::Freight, 40.0, 600.0),
        );
        plan_for(&p, Precedence::FreightFirst)
    }

    #[test]
    fn test_position_at() {
        let m = Movement::new(TrainRole::Freight, 600.0, 600.0, 60.0);
        assert_eq!(position_at(&m, 40.0, 590.0), 0.0);
        assert_eq!(position_at(&m, 40.0, 600.0), 0.0);
        assert_eq!(position_at(&m, 40.0, 630.0), 20.0);
        assert_eq!(position_at(&m, 40.0, 660.0), 40.0);
        assert_eq!(position_at(&m, 40.0, 700.0), 40.0);
    }

    #[test]
    fn test_sample_window() {
        let plan = plan_b();
        let chart = TimeDistanceChart::sample(&plan, 40.0, 600.0);

        // Last arrival 684.82 + 10 → 694
        assert_eq!(chart.start_min, 600);
        assert_eq!(chart.end_min, 694);
        assert_eq!(chart.express.points.len(), 95);
        assert_eq!(chart.freight.points.len(), 95);
        assert_eq!(chart.series(TrainRole::Express).role, TrainRole::Express);
        assert!(!chart.truncated);
    }

    #[test]
    fn test_sample_window_is_capped() {
        // Express planned millions of minutes after the chart origin.
        let p = SectionProblem::new(
            Section::new(40.0),
            SafetyHeadway::new(3.0),
            TrainProfile::new(TrainRole::Express, 110.0, 5.0e6).with_weight(3.0),
            TrainProfile::new(TrainRole::Freight, 40.0, 600.0),
        );
        let plan = plan_for(&p, Precedence::ExpressFirst);
        let chart = TimeDistanceChart::sample(&plan, 40.0, 600.0);

        assert!(chart.truncated);
        assert_eq!(chart.end_min, 600 + MAX_CHART_SPAN_MIN);
        let expected = (MAX_CHART_SPAN_MIN + 1) as usize;
        assert_eq!(chart.express.points.len(), expected);
        assert_eq!(chart.freight.points.len(), expected);
    }

    #[test]
    fn test_sample_positions_monotonic() {
        let chart = TimeDistanceChart::sample(&plan_b(), 40.0, 600.0);
        for series in [&chart.express, &chart.freight] {
            assert_eq!(series.points[0].distance_km, 0.0);
            assert_eq!(series.points.last().map(|p| p.distance_km), Some(40.0));
            assert!(series
                .points
                .windows(2)
                .all(|w| w[1].distance_km >= w[0].distance_km));
        }
    }

    #[test]
    fn test_sample_trains_never_share_track() {
        // While the express is between stations the freight has cleared.
        let plan = plan_b();
        let chart = TimeDistanceChart::sample(&plan, 40.0, 600.0);
        for (e, f) in chart.express.points.iter().zip(&chart.freight.points) {
            let express_moving = e.distance_km > 0.0 && e.distance_km < 40.0;
            if express_moving {
                assert_eq!(f.distance_km, 40.0);
            }
        }
    }

    #[test]
    fn test_axis_ticks() {
        let ticks = axis_ticks(600, 612, 5);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["10:00", "10:05", "10:10"]);
        assert!(axis_ticks(600, 612, 0).is_empty());
    }

    #[test]
    fn test_sample_base_after_window() {
        let chart = TimeDistanceChart::sample(&plan_b(), 40.0, 800.0);
        assert!(chart.express.points.is_empty());
        assert!(chart.ticks.is_empty());
    }
}
