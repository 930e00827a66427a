//! Input validation for section planning.
//!
//! All checks run at the boundary, before the planner. Detects:
//! - Malformed clock strings (format)
//! - Non-positive or non-finite distance and speeds, negative headway (domain)
//! - Weights outside the configured policy (configuration)
//!
//! Every problem is collected, so a caller sees all offending fields at once.

use std::fmt;

use crate::config::{ClockInput, PlannerConfig, TrainConfig, WeightPolicy};
use crate::models::{SafetyHeadway, Section, SectionProblem, TrainProfile, TrainRole};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error naming the offending input field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Dotted field path, e.g. `express.speed_kmph`.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Clock string could not be parsed.
    Format,
    /// Physical quantity out of range (speed, distance, headway).
    Domain,
    /// Planner setting out of range (weights).
    Configuration,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::Format => write!(f, "format"),
            ValidationErrorKind::Domain => write!(f, "domain"),
            ValidationErrorKind::Configuration => write!(f, "configuration"),
        }
    }
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a configuration and builds the planning problem from it.
///
/// Checks:
/// 1. `distance_km` is finite and > 0
/// 2. `headway_min` is finite and >= 0
/// 3. Both speeds are finite and > 0, and give a finite running time
/// 4. Both planned departures parse (clock strings) or are finite (minutes)
/// 5. Both weights are finite and > 0 (>= 0 under `WeightPolicy::AllowZero`)
/// 6. `base_time`, if set, parses
///
/// # Returns
/// The validated [`SectionProblem`], or every detected issue.
pub fn validate_config(config: &PlannerConfig) -> Result<SectionProblem, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let express = train_profile(TrainRole::Express, &config.express, &mut errors);
    let freight = train_profile(TrainRole::Freight, &config.freight, &mut errors);

    if let Some(base) = &config.base_time {
        clock_minutes(base, "base_time", &mut errors);
    }

    let problem = SectionProblem::new(
        Section::new(config.distance_km),
        SafetyHeadway::new(config.headway_min),
        express,
        freight,
    );
    errors.extend(check_problem(&problem, config.weight_policy));

    if errors.is_empty() {
        Ok(problem)
    } else {
        Err(errors)
    }
}

/// Validates a directly constructed problem against the input contract.
pub fn validate_problem(problem: &SectionProblem, policy: WeightPolicy) -> ValidationResult {
    let errors = check_problem(problem, policy);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_problem(problem: &SectionProblem, policy: WeightPolicy) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let distance = problem.section.distance_km;
    if !(distance.is_finite() && distance > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::Domain,
            "distance_km",
            format!("must be a positive number of kilometres, got {distance}"),
        ));
    }

    let headway = problem.headway.minutes;
    if !(headway.is_finite() && headway >= 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::Domain,
            "headway_min",
            format!("must be zero or more minutes, got {headway}"),
        ));
    }

    for role in TrainRole::ALL {
        let train = problem.train(role);

        if !(train.speed_kmph.is_finite() && train.speed_kmph > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::Domain,
                format!("{}.speed_kmph", role.as_str()),
                format!("must be a positive speed in km/h, got {}", train.speed_kmph),
            ));
        } else if distance.is_finite() && distance > 0.0 && !problem.travel_time(role).is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::Domain,
                format!("{}.speed_kmph", role.as_str()),
                format!(
                    "running time over {distance} km at {} km/h is not a finite number of minutes",
                    train.speed_kmph
                ),
            ));
        }

        if !train.planned_departure_min.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::Format,
                format!("{}.planned_departure", role.as_str()),
                format!("must be a finite minute offset, got {}", train.planned_departure_min),
            ));
        }

        if !policy.accepts(train.weight) {
            errors.push(ValidationError::new(
                ValidationErrorKind::Configuration,
                format!("{}.weight", role.as_str()),
                format!("{}, got {}", policy.requirement(), train.weight),
            ));
        }
    }

    errors
}

fn train_profile(
    role: TrainRole,
    train: &TrainConfig,
    errors: &mut Vec<ValidationError>,
) -> TrainProfile {
    let field = format!("{}.planned_departure", role.as_str());
    // Already reported; the finite placeholder keeps check_problem from repeating it.
    let planned = clock_minutes(&train.planned_departure, &field, errors).unwrap_or(0.0);
    TrainProfile::new(role, train.speed_kmph, planned).with_weight(train.weight)
}

fn clock_minutes(input: &ClockInput, field: &str, errors: &mut Vec<ValidationError>) -> Option<f64> {
    match input.to_minutes() {
        Ok(minutes) => Some(minutes),
        Err(e) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::Format,
                field,
                e.to_string(),
            ));
            None
        }
    }
}
