//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::GolfCourseService;
use crate::infrastructure::persistence::PgGolfCourseRepository;

/// Services shared across request handlers.
///
/// Cloned per request; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub golf_course_service: Arc<GolfCourseService<PgGolfCourseRepository>>,
}

impl AppState {
    /// Wires the PostgreSQL repository into the service layer.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let golf_course_repository = Arc::new(PgGolfCourseRepository::new(pool));

        Self {
            golf_course_service: Arc::new(GolfCourseService::new(golf_course_repository)),
        }
    }
}
