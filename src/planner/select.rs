//! Plan selection by weighted delay score.

use crate::models::Plan;

/// Returns the plan with the lower weighted score.
///
/// Ties go to `a`. Called with Plan A first, this makes express
/// precedence the deterministic tie-break.
#[inline]
pub fn select_best<'a>(a: &'a Plan, b: &'a Plan) -> &'a Plan {
    if a.score <= b.score {
        a
    } else {
        b
    }
}
