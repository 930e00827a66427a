//! Command-line front end for the single-track section planner.
//!
//! Builds a `PlannerConfig` from an optional TOML file plus flag
//! overrides, validates it, plans, and prints the recommendation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use u_single_track::config::{ClockInput, PlannerConfig, WeightPolicy};
use u_single_track::models::{Plan, Precedence};
use u_single_track::planner::{self, PlanKpi, PlanningOutcome, TimeDistanceChart};
use u_single_track::time::format_clock;

#[derive(Parser)]
#[command(name = "section-planner")]
#[command(about = "Recommend a headway-safe precedence plan for an express/freight pair on a single-track section")]
#[command(version)]
struct Args {
    /// TOML configuration file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Section distance (km)
    #[arg(long, allow_negative_numbers = true)]
    distance: Option<f64>,

    /// Safety headway (minutes)
    #[arg(long, allow_negative_numbers = true)]
    headway: Option<f64>,

    /// Express speed (km/h)
    #[arg(long, allow_negative_numbers = true)]
    express_speed: Option<f64>,

    /// Freight speed (km/h)
    #[arg(long, allow_negative_numbers = true)]
    freight_speed: Option<f64>,

    /// Express planned departure (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    express_departure: Option<String>,

    /// Freight planned departure (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    freight_departure: Option<String>,

    /// Express priority weight
    #[arg(long, allow_negative_numbers = true)]
    express_weight: Option<f64>,

    /// Freight priority weight
    #[arg(long, allow_negative_numbers = true)]
    freight_weight: Option<f64>,

    /// Accept zero priority weights
    #[arg(long)]
    allow_zero_weights: bool,

    /// Chart origin (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    base_time: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the time–distance series of the recommended plan
    #[arg(long)]
    chart: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(PlannerConfig, OutputFormat, bool)> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_path(path)?,
            None => PlannerConfig::default(),
        };

        if let Some(v) = self.distance {
            config.distance_km = v;
        }
        if let Some(v) = self.headway {
            config.headway_min = v;
        }
        if let Some(v) = self.express_speed {
            config.express.speed_kmph = v;
        }
        if let Some(v) = self.freight_speed {
            config.freight.speed_kmph = v;
        }
        if let Some(v) = self.express_departure {
            config.express.planned_departure = ClockInput::Clock(v);
        }
        if let Some(v) = self.freight_departure {
            config.freight.planned_departure = ClockInput::Clock(v);
        }
        if let Some(v) = self.express_weight {
            config.express.weight = v;
        }
        if let Some(v) = self.freight_weight {
            config.freight.weight = v;
        }
        if self.allow_zero_weights {
            config.weight_policy = WeightPolicy::AllowZero;
        }
        if let Some(v) = self.base_time {
            config.base_time = Some(ClockInput::Clock(v));
        }

        Ok((config, self.format, self.chart))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("u_single_track=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let (config, format, chart) = args.into_config()?;
    debug!(?config, "planner input");

    let problem = match config.validate() {
        Ok(problem) => problem,
        Err(errors) => {
            for e in &errors {
                eprintln!("error ({}): {e}", e.kind);
            }
            return Ok(ExitCode::from(2));
        }
    };

    let outcome = planner::plan(&problem);
    let kpi = PlanKpi::calculate(outcome.selected_plan(), &problem);
    debug!(?kpi, "selected plan kpi");
    let base_min = config.chart_base_min(&problem);
    let distance_km = problem.section.distance_km;

    match format {
        OutputFormat::Json => {
            let mut doc = serde_json::to_value(outcome)?;
            doc["kpi"] = serde_json::to_value(kpi)?;
            if chart {
                let series = TimeDistanceChart::sample(outcome.selected_plan(), distance_km, base_min);
                doc["chart"] = serde_json::to_value(series)?;
            }
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            print!("{}", render_report(&outcome, problem.headway.minutes));
            print!("{}", render_kpi(&kpi));
            if chart {
                let series = TimeDistanceChart::sample(outcome.selected_plan(), distance_km, base_min);
                print!("{}", render_chart(&series));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn render_report(outcome: &PlanningOutcome, headway_min: f64) -> String {
    let best = outcome.selected_plan();
    let mut out = String::new();

    out.push_str("Recommendation\n");
    out.push_str(match best.precedence {
        Precedence::ExpressFirst => "  Option A: hold Freight at origin; let Express run first.\n",
        Precedence::FreightFirst => "  Option B: delay Express at origin; let Freight run first.\n",
    });
    out.push('\n');
    for m in [&best.express, &best.freight] {
        out.push_str(&format!(
            "  {:<8} depart {}  arrive {}  delay {:.1} min\n",
            m.role.to_string(),
            format_clock(m.departure_min),
            format_clock(m.arrival_min),
            m.delay_min
        ));
    }
    out.push_str(&format!("\n  Headway enforced: {headway_min:.1} min\n"));
    out.push_str(&format!(
        "  Travel times: Express {:.1} min, Freight {:.1} min\n",
        outcome.candidates.express_travel_min, outcome.candidates.freight_travel_min
    ));

    out.push_str("\nBoth options\n");
    for plan in [&outcome.candidates.plan_a, &outcome.candidates.plan_b] {
        out.push_str(&render_option(plan));
    }
    out
}

fn render_option(plan: &Plan) -> String {
    let mut out = format!("  {}\n", plan.precedence.label());
    for m in [&plan.express, &plan.freight] {
        out.push_str(&format!(
            "    {}: {} -> {} (delay {:.1} min)\n",
            m.role,
            format_clock(m.departure_min),
            format_clock(m.arrival_min),
            m.delay_min
        ));
    }
    out.push_str(&format!("    Weighted score: {:.1}\n", plan.score));
    out
}

fn render_kpi(kpi: &PlanKpi) -> String {
    format!(
        "\nRecommended plan KPIs\n  \
         Total delay: {:.1} min (max {:.1} min)\n  \
         Weighted score: {:.1}\n  \
         Section clear at: {}\n  \
         Headway gap: {:.1} min (slack {:.1} min)\n  \
         On time: {:.0}%\n",
        kpi.total_delay_min,
        kpi.max_delay_min,
        kpi.weighted_score,
        format_clock(kpi.clearance_min),
        kpi.headway_gap_min,
        kpi.headway_slack_min,
        kpi.on_time_rate * 100.0
    )
}

fn render_chart(chart: &TimeDistanceChart) -> String {
    let mut out = String::from("\nTime-distance (km from origin)\n  time   express  freight\n");
    for (e, f) in chart.express.points.iter().zip(&chart.freight.points) {
        out.push_str(&format!(
            "  {}  {:>7.2}  {:>7.2}\n",
            format_clock(e.minute as f64),
            e.distance_km,
            f.distance_km
        ));
    }
    if chart.truncated {
        out.push_str("  (window truncated)\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "section-planner",
            "--headway",
            "0",
            "--express-departure",
            "11:00",
            "--allow-zero-weights",
            "--freight-weight",
            "0",
        ])
        .unwrap();
        let (config, _, chart) = args.into_config().unwrap();

        assert_eq!(config.headway_min, 0.0);
        assert_eq!(config.express.planned_departure, ClockInput::from("11:00"));
        assert_eq!(config.weight_policy, WeightPolicy::AllowZero);
        assert_eq!(config.distance_km, 40.0);
        assert!(!chart);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_flags_reach_validation() {
        let args = Args::try_parse_from(["section-planner", "--distance", "-5", "--headway", "-1"])
            .unwrap();
        let (config, _, _) = args.into_config().unwrap();
        assert_eq!(config.distance_km, -5.0);

        let errors = config.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["distance_km", "headway_min"]);
    }

    #[test]
    fn test_kpi_block() {
        let problem = PlannerConfig::default().validate().unwrap();
        let outcome = planner::plan(&problem);
        let text = render_kpi(&PlanKpi::calculate(outcome.selected_plan(), &problem));

        assert!(text.contains("Total delay: 46.8 min (max 46.8 min)"));
        assert!(text.contains("Section clear at: 11:47"));
        assert!(text.contains("Headway gap: 3.0 min (slack 0.0 min)"));
        assert!(text.contains("On time: 50%"));
    }

    #[test]
    fn test_report_for_default_scenario() {
        let problem = PlannerConfig::default().validate().unwrap();
        let outcome = planner::plan(&problem);
        let report = render_report(&outcome, problem.headway.minutes);

        assert!(report.contains("Option A: hold Freight"));
        assert!(report.contains("Express  depart 10:22  arrive 10:44  delay 0.0 min"));
        assert!(report.contains("Freight  depart 10:47  arrive 11:47  delay 46.8 min"));
        assert!(report.contains("Weighted score: 123.0"));
        assert!(report.contains("Travel times: Express 21.8 min, Freight 60.0 min"));
    }

    #[test]
    fn test_chart_rows() {
        let problem = PlannerConfig::default().validate().unwrap();
        let outcome = planner::plan(&problem);
        let chart = TimeDistanceChart::sample(outcome.selected_plan(), 40.0, 600.0);
        let text = render_chart(&chart);
        assert!(text.contains("  10:00     0.00     0.00\n"));
    }
}
