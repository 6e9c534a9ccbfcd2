//! Golf course management service.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{CoursePatch, GolfCourse, Hole, NewGolfCourse, RoundStats};
use crate::domain::repositories::{CourseFilter, CoursePage, GolfCourseRepository};
use crate::error::AppError;

/// Statistics for one course: its par plus aggregated round scores.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStats {
    pub course_id: Uuid,
    pub course_name: String,
    pub par: i32,
    pub rounds: RoundStats,
}

/// Service for managing golf courses and their holes.
///
/// Turns absent results into [`AppError::NotFound`]. New courses are checked
/// against the hole layout rules before they reach the repository; updates
/// are checked by the repository against the merged course under its row
/// lock.
pub struct GolfCourseService<R: GolfCourseRepository> {
    repository: Arc<R>,
}

impl<R: GolfCourseRepository> GolfCourseService<R> {
    /// Creates a new golf course service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a course with its holes.
    ///
    /// Assigns a fresh UUID when the caller did not supply one and sorts the
    /// holes by number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the hole list does not match `total_holes`.
    /// Returns [`AppError::Conflict`] if the id or name/location pair already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_course(&self, mut new_course: NewGolfCourse) -> Result<GolfCourse, AppError> {
        new_course.normalize()?;
        new_course.id.get_or_insert_with(Uuid::new_v4);

        let course = self.repository.create(new_course).await?;

        tracing::info!(
            course_id = %course.id,
            name = %course.name,
            holes = course.holes.len(),
            "Golf course created"
        );

        Ok(course)
    }

    /// Retrieves a course by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_course(&self, id: Uuid) -> Result<GolfCourse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists courses matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_courses(&self, filter: CourseFilter) -> Result<CoursePage, AppError> {
        self.repository.list(filter).await
    }

    /// Searches courses by name, location or country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `text` is blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_courses(&self, text: &str, limit: i64) -> Result<Vec<GolfCourse>, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::bad_request(
                "Search text must not be empty",
                json!({ "field": "q" }),
            ));
        }

        self.repository.search(text, limit).await
    }

    /// Partially updates a course.
    ///
    /// Fields absent from `patch` keep their stored values. If the patch
    /// carries holes, the stored hole set is replaced atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Validation`] if the merged course breaks the layout rules.
    /// Returns [`AppError::Conflict`] if the new name/location pair is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_course(&self, id: Uuid, patch: CoursePatch) -> Result<GolfCourse, AppError> {
        let replaces_holes = patch.holes.is_some();

        let course = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(course_id = %id, replaces_holes, "Golf course updated");

        Ok(course)
    }

    /// Deletes a course and its holes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Conflict`] if rounds still reference the course.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_course(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(course_id = %id, "Golf course deleted");
        Ok(())
    }

    /// Returns the holes of a course ordered by number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_holes(&self, id: Uuid) -> Result<Vec<Hole>, AppError> {
        Ok(self.get_course(id).await?.holes)
    }

    /// Returns a single hole of a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course or the hole does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_hole(&self, id: Uuid, hole_number: i32) -> Result<Hole, AppError> {
        let course = self.get_course(id).await?;

        course.hole(hole_number).cloned().ok_or_else(|| {
            AppError::not_found(
                "Hole not found",
                json!({ "id": id, "hole_number": hole_number }),
            )
        })
    }

    /// Computes par and round statistics for a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn course_stats(&self, id: Uuid) -> Result<CourseStats, AppError> {
        let course = self.get_course(id).await?;
        let rounds = self.repository.round_stats(id).await?;

        Ok(CourseStats {
            course_id: course.id,
            par: course.par(),
            course_name: course.name,
            rounds,
        })
    }

    /// Verifies the database answers a round-trip query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found("Golf course not found", json!({ "id": id }))
}
