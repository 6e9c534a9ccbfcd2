//! PostgreSQL implementation of the golf course repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgConnection, PgExecutor, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entities::{
    CoursePatch, Difficulty, GolfCourse, Hole, NewGolfCourse, RoundStats,
};
use crate::domain::repositories::{CourseFilter, CoursePage, GolfCourseRepository};
use crate::error::AppError;
use crate::utils::like_pattern::contains_pattern;

const COURSE_COLUMNS: &str = "id, name, location, country, total_holes, description, \
                              difficulty, is_active, created_at, updated_at";

const LIST_FILTER: &str = "($1::TEXT IS NULL OR name ILIKE $1 OR location ILIKE $1 OR country ILIKE $1) \
       AND ($2::TEXT IS NULL OR LOWER(country) = LOWER($2)) \
       AND ($3::TEXT IS NULL OR difficulty = $3) \
       AND ($4::BOOLEAN IS NULL OR is_active = $4) \
       AND ($5::INTEGER IS NULL OR total_holes >= $5) \
       AND ($6::INTEGER IS NULL OR total_holes <= $6)";

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: Uuid,
    name: String,
    location: String,
    country: String,
    total_holes: i32,
    description: Option<String>,
    difficulty: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CourseRow {
    fn into_course(self, holes: Vec<Hole>) -> Result<GolfCourse, AppError> {
        let id = self.id;
        let difficulty = self
            .difficulty
            .map(|d| d.parse::<Difficulty>())
            .transpose()
            .map_err(|e| {
                tracing::error!(course_id = %id, error = %e, "Corrupt difficulty value");
                AppError::internal("Database error", json!({}))
            })?;

        Ok(GolfCourse {
            id,
            name: self.name,
            location: self.location,
            country: self.country,
            total_holes: self.total_holes,
            holes,
            description: self.description,
            difficulty,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct HoleRow {
    golf_course_id: Uuid,
    hole_number: i32,
    par: i32,
    distance_meters: i32,
    handicap: i32,
}

#[derive(sqlx::FromRow)]
struct RoundStatsRow {
    total_rounds: i64,
    average_score: Option<f64>,
    best_score: Option<i32>,
    worst_score: Option<i32>,
}

/// PostgreSQL repository for the golf course aggregate.
///
/// Course rows live in `golf_courses`, holes in `holes` keyed by
/// `(golf_course_id, hole_number)` with `ON DELETE CASCADE`. Writes touching
/// both tables run in one transaction; a transaction dropped before commit
/// rolls back.
pub struct PgGolfCourseRepository {
    pool: Arc<PgPool>,
}

impl PgGolfCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Attaches holes to course rows, preserving row order.
    async fn assemble(&self, rows: Vec<CourseRow>) -> Result<Vec<GolfCourse>, AppError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut holes = fetch_holes(self.pool.as_ref(), &ids).await?;

        rows.into_iter()
            .map(|row| {
                let course_holes = holes.remove(&row.id).unwrap_or_default();
                row.into_course(course_holes)
            })
            .collect()
    }
}

/// Loads the holes of the given courses, grouped by course and ordered by number.
async fn fetch_holes<'e, E>(executor: E, ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Hole>>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, HoleRow>(
        r#"
        SELECT golf_course_id, hole_number, par, distance_meters, handicap
        FROM holes
        WHERE golf_course_id = ANY($1)
        ORDER BY golf_course_id, hole_number
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<Hole>> = HashMap::new();
    for row in rows {
        grouped.entry(row.golf_course_id).or_default().push(Hole::new(
            row.hole_number,
            row.par,
            row.distance_meters,
            row.handicap,
        ));
    }

    Ok(grouped)
}

async fn insert_holes(
    conn: &mut PgConnection,
    course_id: Uuid,
    holes: &[Hole],
) -> Result<(), sqlx::Error> {
    if holes.is_empty() {
        return Ok(());
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO holes (golf_course_id, hole_number, par, distance_meters, handicap) ",
    );
    builder.push_values(holes, |mut b, hole| {
        b.push_bind(course_id)
            .push_bind(hole.hole_number)
            .push_bind(hole.par)
            .push_bind(hole.distance_meters)
            .push_bind(hole.handicap);
    });

    builder.build().execute(conn).await?;
    Ok(())
}

#[async_trait]
impl GolfCourseRepository for PgGolfCourseRepository {
    async fn create(&self, new_course: NewGolfCourse) -> Result<GolfCourse, AppError> {
        let id = new_course.id.unwrap_or_else(Uuid::new_v4);
        let sql = format!(
            r#"
            INSERT INTO golf_courses
                (id, name, location, country, total_holes, description, difficulty, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COURSE_COLUMNS}
            "#
        );

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(id)
            .bind(&new_course.name)
            .bind(&new_course.location)
            .bind(&new_course.country)
            .bind(new_course.total_holes)
            .bind(&new_course.description)
            .bind(new_course.difficulty.map(|d| d.as_str()))
            .bind(new_course.is_active)
            .fetch_one(&mut *tx)
            .await?;

        insert_holes(&mut tx, id, &new_course.holes).await?;

        tx.commit().await?;

        row.into_course(new_course.holes)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<GolfCourse>, AppError> {
        let sql = format!("SELECT {COURSE_COLUMNS} FROM golf_courses WHERE id = $1");

        let Some(row) = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let mut holes = fetch_holes(self.pool.as_ref(), &[id]).await?;
        row.into_course(holes.remove(&id).unwrap_or_default())
            .map(Some)
    }

    async fn list(&self, filter: CourseFilter) -> Result<CoursePage, AppError> {
        let search = filter.search.as_deref().map(contains_pattern);
        let difficulty = filter.difficulty.map(|d| d.as_str());

        let rows_sql = format!(
            "SELECT {COURSE_COLUMNS} FROM golf_courses WHERE {LIST_FILTER} \
             ORDER BY name, id LIMIT $7 OFFSET $8"
        );
        let count_sql = format!("SELECT COUNT(*) FROM golf_courses WHERE {LIST_FILTER}");

        let rows_query = sqlx::query_as::<_, CourseRow>(&rows_sql)
            .bind(&search)
            .bind(&filter.country)
            .bind(difficulty)
            .bind(filter.is_active)
            .bind(filter.min_holes)
            .bind(filter.max_holes)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(self.pool.as_ref());

        let count_query = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(&search)
            .bind(&filter.country)
            .bind(difficulty)
            .bind(filter.is_active)
            .bind(filter.min_holes)
            .bind(filter.max_holes)
            .fetch_one(self.pool.as_ref());

        let (rows, total) = tokio::try_join!(rows_query, count_query)?;

        Ok(CoursePage {
            items: self.assemble(rows).await?,
            total,
        })
    }

    async fn search(&self, text: &str, limit: i64) -> Result<Vec<GolfCourse>, AppError> {
        let sql = format!(
            "SELECT {COURSE_COLUMNS} FROM golf_courses \
             WHERE name ILIKE $1 OR location ILIKE $1 OR country ILIKE $1 \
             ORDER BY name, id LIMIT $2"
        );

        let rows = sqlx::query_as::<_, CourseRow>(&sql)
            .bind(contains_pattern(text))
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        self.assemble(rows).await
    }

    async fn update(&self, id: Uuid, patch: CoursePatch) -> Result<Option<GolfCourse>, AppError> {
        let select_sql = format!("SELECT {COURSE_COLUMNS} FROM golf_courses WHERE id = $1 FOR UPDATE");

        let mut tx = self.pool.begin().await?;

        let Some(row) = sqlx::query_as::<_, CourseRow>(&select_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            tx.rollback().await?;
            return Ok(None);
        };

        let mut holes = fetch_holes(&mut *tx, &[id]).await?;
        let mut course = row.into_course(holes.remove(&id).unwrap_or_default())?;

        if patch.is_empty() {
            tx.rollback().await?;
            return Ok(Some(course));
        }

        let replaces_holes = patch.holes.is_some();
        course.apply(patch)?;

        let update_sql = format!(
            r#"
            UPDATE golf_courses SET
                name        = $2,
                location    = $3,
                country     = $4,
                total_holes = $5,
                description = $6,
                difficulty  = $7,
                is_active   = $8,
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {COURSE_COLUMNS}
            "#
        );

        let updated = sqlx::query_as::<_, CourseRow>(&update_sql)
            .bind(id)
            .bind(&course.name)
            .bind(&course.location)
            .bind(&course.country)
            .bind(course.total_holes)
            .bind(&course.description)
            .bind(course.difficulty.map(|d| d.as_str()))
            .bind(course.is_active)
            .fetch_one(&mut *tx)
            .await?;

        if replaces_holes {
            sqlx::query("DELETE FROM holes WHERE golf_course_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            insert_holes(&mut tx, id, &course.holes).await?;
        }

        tx.commit().await?;

        updated.into_course(course.holes).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let locked = sqlx::query_scalar::<_, Uuid>("SELECT id FROM golf_courses WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let rounds_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM golf_rounds WHERE golf_course_id = $1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if rounds_count > 0 {
            tx.rollback().await?;
            return Err(AppError::conflict(
                "Cannot delete golf course with recorded rounds",
                json!({ "id": id, "rounds_count": rounds_count }),
            ));
        }

        // Holes go with the course via ON DELETE CASCADE.
        sqlx::query("DELETE FROM golf_courses WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn round_stats(&self, id: Uuid) -> Result<RoundStats, AppError> {
        let row = sqlx::query_as::<_, RoundStatsRow>(
            r#"
            SELECT
                COUNT(*)                  AS total_rounds,
                AVG(total_score)::FLOAT8  AS average_score,
                MIN(total_score)          AS best_score,
                MAX(total_score)          AS worst_score
            FROM golf_rounds
            WHERE golf_course_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(RoundStats {
            total_rounds: row.total_rounds,
            average_score: row.average_score,
            best_score: row.best_score,
            worst_score: row.worst_score,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
