//! Sample courses for populating an empty database.
//!
//! Used by `admin seed`. Each entry is `(hole_number, par, distance_meters, handicap)`.

use crate::domain::entities::{Difficulty, Hole, NewGolfCourse};

const BAD_KISSINGEN: [(i32, i32, i32, i32); 18] = [
    (1, 5, 473, 7),
    (2, 3, 217, 9),
    (3, 4, 302, 13),
    (4, 3, 168, 11),
    (5, 4, 410, 5),
    (6, 4, 359, 3),
    (7, 5, 537, 1),
    (8, 3, 168, 17),
    (9, 4, 301, 15),
    (10, 4, 296, 14),
    (11, 4, 373, 8),
    (12, 4, 350, 4),
    (13, 3, 141, 18),
    (14, 4, 270, 16),
    (15, 4, 397, 2),
    (16, 3, 154, 10),
    (17, 5, 447, 12),
    (18, 4, 336, 6),
];

const AUGUSTA: [(i32, i32, i32, i32); 18] = [
    (1, 4, 411, 10),
    (2, 5, 520, 16),
    (3, 4, 320, 4),
    (4, 3, 205, 14),
    (5, 4, 411, 6),
    (6, 3, 164, 12),
    (7, 4, 411, 2),
    (8, 5, 520, 18),
    (9, 4, 430, 8),
    (10, 4, 466, 9),
    (11, 4, 466, 5),
    (12, 3, 141, 15),
    (13, 5, 466, 3),
    (14, 4, 411, 7),
    (15, 5, 493, 1),
    (16, 3, 155, 11),
    (17, 4, 411, 17),
    (18, 4, 411, 13),
];

fn holes(layout: &[(i32, i32, i32, i32)]) -> Vec<Hole> {
    layout
        .iter()
        .map(|&(number, par, distance, handicap)| Hole::new(number, par, distance, handicap))
        .collect()
}

/// Returns the sample courses in insertion order.
pub fn sample_courses() -> Vec<NewGolfCourse> {
    vec![
        NewGolfCourse {
            id: None,
            name: "Golf-Club Bad Kissingen e.V. - Thuringia Course".to_string(),
            location: "Bad Kissingen, Bavaria".to_string(),
            country: "Germany".to_string(),
            total_holes: 18,
            holes: holes(&BAD_KISSINGEN),
            description: None,
            difficulty: Some(Difficulty::Medium),
            is_active: true,
        },
        NewGolfCourse {
            id: None,
            name: "Augusta National Golf Club".to_string(),
            location: "Augusta, Georgia".to_string(),
            country: "United States".to_string(),
            total_holes: 18,
            holes: holes(&AUGUSTA),
            description: Some("Home of the Masters Tournament".to_string()),
            difficulty: Some(Difficulty::Championship),
            is_active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::check_layout;

    #[test]
    fn test_sample_courses_satisfy_layout() {
        for course in sample_courses() {
            assert_eq!(
                check_layout(course.total_holes, &course.holes),
                Ok(()),
                "{}",
                course.name
            );
        }
    }

    #[test]
    fn test_sample_course_pars() {
        let courses = sample_courses();
        let par = |c: &NewGolfCourse| c.holes.iter().map(|h| h.par).sum::<i32>();
        assert_eq!(par(&courses[0]), 70);
        assert_eq!(par(&courses[1]), 72);
    }
}
