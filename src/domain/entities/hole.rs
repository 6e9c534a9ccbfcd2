//! Domain entity representing a single hole of a golf course.

/// One hole of a golf course.
///
/// Holes have no identity of their own: they are addressed by
/// `(course id, hole_number)` and live and die with their course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    pub hole_number: i32,
    pub par: i32,
    pub distance_meters: i32,
    pub handicap: i32,
}

impl Hole {
    pub fn new(hole_number: i32, par: i32, distance_meters: i32, handicap: i32) -> Self {
        Self {
            hole_number,
            par,
            distance_meters,
            handicap,
        }
    }
}

/// Sorts holes by hole number, ascending.
pub fn sort_holes(holes: &mut [Hole]) {
    holes.sort_by_key(|h| h.hole_number);
}
