//! Repository trait for golf course persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{CoursePatch, Difficulty, GolfCourse, NewGolfCourse, RoundStats};
use crate::error::AppError;

/// Filters and window for listing courses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub offset: i64,
    pub limit: i64,
    /// Case-insensitive substring matched against name, location and country.
    pub search: Option<String>,
    /// Case-insensitive exact country match.
    pub country: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub is_active: Option<bool>,
    pub min_holes: Option<i32>,
    pub max_holes: Option<i32>,
}

impl CourseFilter {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset,
            limit,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_active(mut self, is_active: Option<bool>) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_hole_range(mut self, min_holes: Option<i32>, max_holes: Option<i32>) -> Self {
        self.min_holes = min_holes;
        self.max_holes = max_holes;
        self
    }
}

/// One page of courses plus the number of courses matching the filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePage {
    pub items: Vec<GolfCourse>,
    pub total: i64,
}

/// Repository interface for the golf course aggregate.
///
/// Every method that writes more than one row does so inside a single
/// transaction: a course is never visible without its holes, and a hole set
/// is never half-replaced.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGolfCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_golf_course.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GolfCourseRepository: Send + Sync {
    /// Inserts a course and its holes.
    ///
    /// `new_course.id` must be set; the service assigns one if the client did not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id or the name/location pair is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_course: NewGolfCourse) -> Result<GolfCourse, AppError>;

    /// Finds a course by id, holes ordered by number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<GolfCourse>, AppError>;

    /// Lists courses matching `filter`, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, filter: CourseFilter) -> Result<CoursePage, AppError>;

    /// Case-insensitive substring search over name, location and country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, text: &str, limit: i64) -> Result<Vec<GolfCourse>, AppError>;

    /// Applies a partial update, replacing the hole set if the patch carries one.
    ///
    /// Returns `Ok(None)` if the course does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the merged course breaks the layout rules.
    /// Returns [`AppError::Conflict`] if the new name/location pair is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: Uuid, patch: CoursePatch) -> Result<Option<GolfCourse>, AppError>;

    /// Deletes a course and its holes.
    ///
    /// Returns `Ok(false)` if the course does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if rounds still reference the course.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Aggregates the scores of all rounds played on a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn round_stats(&self, id: Uuid) -> Result<RoundStats, AppError>;

    /// Performs a database round-trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
