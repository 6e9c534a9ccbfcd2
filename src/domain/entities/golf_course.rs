//! Golf course aggregate: the course row plus its ordered holes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hole::{Hole, sort_holes};
use crate::domain::validation::{LayoutError, check_layout};

/// Difficulty classification of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Championship,
}

impl Difficulty {
    /// Value stored in the `difficulty` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Championship => "championship",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "championship" => Ok(Difficulty::Championship),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// A stored golf course with its holes.
///
/// `holes` is always ordered by hole number and, for any value read from the
/// repository, satisfies [`check_layout`] against `total_holes`.
#[derive(Debug, Clone, PartialEq)]
pub struct GolfCourse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub country: String,
    pub total_holes: i32,
    pub holes: Vec<Hole>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GolfCourse {
    /// Total par of the course, summed over its holes.
    pub fn par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    /// Looks up a hole by its number.
    pub fn hole(&self, hole_number: i32) -> Option<&Hole> {
        self.holes.iter().find(|h| h.hole_number == hole_number)
    }

    /// Merges a partial update onto this course.
    ///
    /// The layout is checked against the merged state, so changing
    /// `total_holes` without a matching hole list fails, as does a new hole
    /// list that does not fit the stored `total_holes`. On error `self` is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the merged course violates the layout rules.
    pub fn apply(&mut self, patch: CoursePatch) -> Result<(), LayoutError> {
        let total_holes = patch.total_holes.unwrap_or(self.total_holes);

        let holes = match patch.holes {
            Some(mut holes) => {
                sort_holes(&mut holes);
                check_layout(total_holes, &holes)?;
                Some(holes)
            }
            None => {
                check_layout(total_holes, &self.holes)?;
                None
            }
        };

        if let Some(holes) = holes {
            self.holes = holes;
        }
        self.total_holes = total_holes;

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }

        Ok(())
    }
}

/// Input data for creating a golf course.
///
/// `id` is optional: when absent the service generates one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGolfCourse {
    pub id: Option<Uuid>,
    pub name: String,
    pub location: String,
    pub country: String,
    pub total_holes: i32,
    pub holes: Vec<Hole>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub is_active: bool,
}

impl NewGolfCourse {
    /// Sorts the holes and checks the layout invariant.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the hole list does not match `total_holes`.
    pub fn normalize(&mut self) -> Result<(), LayoutError> {
        sort_holes(&mut self.holes);
        check_layout(self.total_holes, &self.holes)
    }
}

/// Partial update of a golf course.
///
/// `None` leaves a field unchanged. For nullable columns the inner option
/// distinguishes "clear" (`Some(None)`) from "set" (`Some(Some(v))`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub total_holes: Option<i32>,
    pub holes: Option<Vec<Hole>>,
    pub description: Option<Option<String>>,
    pub difficulty: Option<Option<Difficulty>>,
    pub is_active: Option<bool>,
}

impl CoursePatch {
    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.country.is_none()
            && self.total_holes.is_none()
            && self.holes.is_none()
            && self.description.is_none()
            && self.difficulty.is_none()
            && self.is_active.is_none()
    }
}
