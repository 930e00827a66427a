//! Single-track section planner for the U-Engine ecosystem.
//!
//! Sequences an express and a freight service through one shared
//! single-track section. Two headway-safe candidate plans are generated
//! (one per precedence order) and the plan with the lower weighted delay
//! score is recommended.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Section`, `SafetyHeadway`, `TrainProfile`,
//!   `Precedence`, `Movement`, `Plan`, `SectionProblem`
//! - **`time`**: Clock-string ↔ minute-offset conversion and travel time
//! - **`planner`**: Candidate generation, selection, KPIs, time–distance series
//! - **`config`**: TOML-loadable boundary configuration
//! - **`validation`**: Input checks run before the planner (speeds, weights, clocks)
//!
//! # Time Representation
//!
//! All times are minutes relative to a reference midnight (t=0). Values are
//! real-valued and unbounded; only `time::format_clock` wraps to a 24h clock.
//!
//! # Example
//!
//! ```
//! use u_single_track::config::PlannerConfig;
//! use u_single_track::models::Precedence;
//! use u_single_track::planner;
//!
//! let problem = PlannerConfig::default().validate().unwrap();
//! let outcome = planner::plan(&problem);
//! assert_eq!(outcome.selected, Precedence::ExpressFirst);
//! ```
//!
//! # References
//!
//! - Hansen & Pachl (2014), "Railway Timetabling & Operations", Ch. 4 (Headways)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod time;
pub mod validation;
