//! Consistency rules of the golf course aggregate.
//!
//! A course declares how many holes it has; its hole list must match that
//! declaration exactly. These checks run on every write path (create, update
//! and seeding) regardless of what the HTTP layer has already validated.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use crate::domain::entities::Hole;

/// Allowed values for a course's declared hole count.
pub const TOTAL_HOLES_RANGE: RangeInclusive<i32> = 9..=18;
/// Allowed par per hole.
pub const PAR_RANGE: RangeInclusive<i32> = 3..=5;
/// Allowed handicap (stroke index) per hole.
pub const HANDICAP_RANGE: RangeInclusive<i32> = 1..=18;

/// Violations of the course/hole layout invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("total_holes must be between 9 and 18, got {0}")]
    TotalHolesOutOfRange(i32),

    #[error("expected {expected} holes, got {actual}")]
    HoleCountMismatch { expected: i32, actual: usize },

    #[error("hole number {number} is outside 1..={total_holes}")]
    HoleNumberOutOfRange { number: i32, total_holes: i32 },

    #[error("hole number {0} appears more than once")]
    DuplicateHole(i32),

    #[error("hole {hole_number}: par must be between 3 and 5, got {par}")]
    InvalidPar { hole_number: i32, par: i32 },

    #[error("hole {hole_number}: handicap must be between 1 and 18, got {handicap}")]
    InvalidHandicap { hole_number: i32, handicap: i32 },

    #[error("hole {hole_number}: distance must be positive, got {distance_meters}")]
    InvalidDistance {
        hole_number: i32,
        distance_meters: i32,
    },
}

/// Checks that `holes` is a complete, gap-free layout for a course with
/// `total_holes` holes.
///
/// Once the count matches, requiring every number to be unique and inside
/// `1..=total_holes` is equivalent to requiring the numbers to be exactly
/// that set, so a missing hole always surfaces as a duplicate or an
/// out-of-range number.
///
/// # Errors
///
/// Returns the first [`LayoutError`] found.
pub fn check_layout(total_holes: i32, holes: &[Hole]) -> Result<(), LayoutError> {
    if !TOTAL_HOLES_RANGE.contains(&total_holes) {
        return Err(LayoutError::TotalHolesOutOfRange(total_holes));
    }

    if holes.len() != total_holes as usize {
        return Err(LayoutError::HoleCountMismatch {
            expected: total_holes,
            actual: holes.len(),
        });
    }

    let mut seen = HashSet::with_capacity(holes.len());
    for hole in holes {
        if !(1..=total_holes).contains(&hole.hole_number) {
            return Err(LayoutError::HoleNumberOutOfRange {
                number: hole.hole_number,
                total_holes,
            });
        }
        if !seen.insert(hole.hole_number) {
            return Err(LayoutError::DuplicateHole(hole.hole_number));
        }
        check_hole(hole)?;
    }

    Ok(())
}

fn check_hole(hole: &Hole) -> Result<(), LayoutError> {
    if !PAR_RANGE.contains(&hole.par) {
        return Err(LayoutError::InvalidPar {
            hole_number: hole.hole_number,
            par: hole.par,
        });
    }
    if !HANDICAP_RANGE.contains(&hole.handicap) {
        return Err(LayoutError::InvalidHandicap {
            hole_number: hole.hole_number,
            handicap: hole.handicap,
        });
    }
    if hole.distance_meters <= 0 {
        return Err(LayoutError::InvalidDistance {
            hole_number: hole.hole_number,
            distance_meters: hole.distance_meters,
        });
    }
    Ok(())
}
