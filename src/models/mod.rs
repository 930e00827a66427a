//! Section planning domain models.
//!
//! Value types describing a two-train single-track problem and its
//! candidate solutions. All entities are immutable records rebuilt on
//! every planning call.
//!
//! # Domain Mappings
//!
//! | u-single-track | Scheduling term | Railway term |
//! |----------------|-----------------|--------------|
//! | Section | Disjunctive resource | Block / single-line section |
//! | TrainProfile | Job | Train path request |
//! | SafetyHeadway | Sequence-dependent setup | Minimum headway |
//! | Plan | Schedule | Dispatching decision |

mod plan;
mod section;
mod train;

pub use plan::{Movement, Plan, Precedence};
pub use section::{SafetyHeadway, Section, SectionProblem};
pub use train::{TrainProfile, TrainRole};
