//! DTOs for golf course and hole endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::application::services::CourseStats;
use crate::domain::entities::{CoursePatch, Difficulty, GolfCourse, Hole, NewGolfCourse};

const MAX_DESCRIPTION_LEN: usize = 2000;

fn default_total_holes() -> i32 {
    18
}

fn default_true() -> bool {
    true
}

/// Accepts an omitted field as `None` and rejects an explicit `null`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A hole as submitted by clients.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HoleRequest {
    #[validate(range(min = 1, max = 18))]
    pub hole_number: i32,

    #[validate(range(min = 3, max = 5))]
    pub par: i32,

    #[validate(range(min = 1))]
    pub distance_meters: i32,

    #[validate(range(min = 1, max = 18))]
    pub handicap: i32,
}

impl From<HoleRequest> for Hole {
    fn from(h: HoleRequest) -> Self {
        Hole::new(h.hole_number, h.par, h.distance_meters, h.handicap)
    }
}

/// Request body for `POST /golf-courses`.
///
/// Field bounds are checked here; the hole list is checked against
/// `total_holes` by the service.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    /// Client-chosen identifier; generated when absent.
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub location: String,

    #[validate(length(min = 1, max = 50))]
    pub country: String,

    #[serde(default = "default_total_holes")]
    #[validate(range(min = 9, max = 18))]
    pub total_holes: i32,

    #[validate(nested)]
    pub holes: Vec<HoleRequest>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub difficulty: Option<Difficulty>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<CreateCourseRequest> for NewGolfCourse {
    fn from(r: CreateCourseRequest) -> Self {
        NewGolfCourse {
            id: r.id,
            name: r.name,
            location: r.location,
            country: r.country,
            total_holes: r.total_holes,
            holes: r.holes.into_iter().map(Hole::from).collect(),
            description: r.description,
            difficulty: r.difficulty,
            is_active: r.is_active,
        }
    }
}

/// Request body for `PUT /golf-courses/{id}`.
///
/// All fields are optional — only provided fields are changed.
///
/// # Nullable fields
///
/// For `description` and `difficulty`:
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the value
/// - **Value** → set new value
///
/// The other fields cannot be cleared, so `null` there is rejected.
/// Supplying `holes` replaces the whole hole set.
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_update_description"))]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, max = 50))]
    pub country: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 9, max = 18))]
    pub total_holes: Option<i32>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(nested)]
    pub holes: Option<Vec<HoleRequest>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub difficulty: Option<Option<Difficulty>>,

    #[serde(default, deserialize_with = "non_null")]
    pub is_active: Option<bool>,
}

fn validate_update_description(req: &UpdateCourseRequest) -> Result<(), ValidationError> {
    match &req.description {
        Some(Some(d)) if d.chars().count() > MAX_DESCRIPTION_LEN => {
            let mut err = ValidationError::new("length");
            err.message = Some("description must be at most 2000 characters".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(r: UpdateCourseRequest) -> Self {
        CoursePatch {
            name: r.name,
            location: r.location,
            country: r.country,
            total_holes: r.total_holes,
            holes: r
                .holes
                .map(|holes| holes.into_iter().map(Hole::from).collect()),
            description: r.description,
            difficulty: r.difficulty,
            is_active: r.is_active,
        }
    }
}

/// Hole information returned to clients.
#[derive(Debug, Serialize)]
pub struct HoleItem {
    pub hole_number: i32,
    pub par: i32,
    pub distance_meters: i32,
    pub handicap: i32,
}

impl From<Hole> for HoleItem {
    fn from(h: Hole) -> Self {
        HoleItem {
            hole_number: h.hole_number,
            par: h.par,
            distance_meters: h.distance_meters,
            handicap: h.handicap,
        }
    }
}

/// Golf course returned to clients, holes ordered by number.
#[derive(Debug, Serialize)]
pub struct CourseItem {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub country: String,
    pub total_holes: i32,
    pub par: i32,
    pub holes: Vec<HoleItem>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GolfCourse> for CourseItem {
    fn from(c: GolfCourse) -> Self {
        CourseItem {
            par: c.par(),
            id: c.id,
            name: c.name,
            location: c.location,
            country: c.country,
            total_holes: c.total_holes,
            holes: c.holes.into_iter().map(HoleItem::from).collect(),
            description: c.description,
            difficulty: c.difficulty,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Course statistics returned by `GET /golf-courses/{id}/stats`.
#[derive(Debug, Serialize)]
pub struct CourseStatsItem {
    pub course_id: Uuid,
    pub course_name: String,
    pub par: i32,
    pub total_rounds: i64,
    pub average_score: Option<f64>,
    pub best_score: Option<i32>,
    pub worst_score: Option<i32>,
}

impl From<CourseStats> for CourseStatsItem {
    fn from(s: CourseStats) -> Self {
        CourseStatsItem {
            average_score: s.rounds.rounded_average(),
            course_id: s.course_id,
            course_name: s.course_name,
            par: s.par,
            total_rounds: s.rounds.total_rounds,
            best_score: s.rounds.best_score,
            worst_score: s.rounds.worst_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn holes_json(n: i32) -> serde_json::Value {
        json!((1..=n)
            .map(|i| json!({"hole_number": i, "par": 4, "distance_meters": 350, "handicap": i}))
            .collect::<Vec<_>>())
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateCourseRequest = serde_json::from_value(json!({
            "name": "Pebble Beach",
            "location": "Pebble Beach, California",
            "country": "United States",
            "holes": holes_json(18)
        }))
        .unwrap();

        assert_eq!(req.total_holes, 18);
        assert!(req.is_active);
        assert!(req.id.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_bad_hole_fields() {
        let req: CreateCourseRequest = serde_json::from_value(json!({
            "name": "Bad Par",
            "location": "Nowhere",
            "country": "Nowhere",
            "total_holes": 9,
            "holes": [{"hole_number": 1, "par": 6, "distance_meters": 100, "handicap": 1}]
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let req: CreateCourseRequest = serde_json::from_value(json!({
            "name": "",
            "location": "Somewhere",
            "country": "Scotland",
            "total_holes": 9,
            "holes": holes_json(9)
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_create_request_rejects_unknown_difficulty() {
        let result = serde_json::from_value::<CreateCourseRequest>(json!({
            "name": "X",
            "location": "Y",
            "country": "Z",
            "holes": [],
            "difficulty": "impossible"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_absent_vs_null() {
        let absent: UpdateCourseRequest = serde_json::from_value(json!({"name": "New"})).unwrap();
        assert_eq!(absent.description, None);
        assert_eq!(absent.difficulty, None);

        let cleared: UpdateCourseRequest =
            serde_json::from_value(json!({"description": null, "difficulty": null})).unwrap();
        assert_eq!(cleared.description, Some(None));
        assert_eq!(cleared.difficulty, Some(None));

        let set: UpdateCourseRequest =
            serde_json::from_value(json!({"description": "Links", "difficulty": "hard"})).unwrap();
        assert_eq!(set.description, Some(Some("Links".to_string())));
        assert_eq!(set.difficulty, Some(Some(Difficulty::Hard)));
    }

    #[test]
    fn test_update_request_rejects_null_on_required_fields() {
        for field in ["name", "location", "country", "total_holes", "holes", "is_active"] {
            let body = format!(r#"{{"{field}": null}}"#);
            let result = serde_json::from_str::<UpdateCourseRequest>(&body);
            assert!(result.is_err(), "null accepted for {field}");
        }
    }

    #[test]
    fn test_update_request_validates_only_supplied_fields() {
        let req: UpdateCourseRequest = serde_json::from_value(json!({"name": "New Name"})).unwrap();
        assert!(req.validate().is_ok());

        let req: UpdateCourseRequest = serde_json::from_value(json!({"total_holes": 27})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_description_too_long() {
        let req = UpdateCourseRequest {
            description: Some(Some("x".repeat(MAX_DESCRIPTION_LEN + 1))),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_into_patch() {
        let req: UpdateCourseRequest = serde_json::from_value(json!({
            "total_holes": 9,
            "holes": holes_json(9),
            "description": null
        }))
        .unwrap();

        let patch = CoursePatch::from(req);

        assert_eq!(patch.total_holes, Some(9));
        assert_eq!(patch.holes.as_ref().map(Vec::len), Some(9));
        assert_eq!(patch.description, Some(None));
        assert!(patch.name.is_none());
    }

    #[test]
    fn test_course_item_serializes_difficulty_lowercase() {
        let now = Utc::now();
        let item = CourseItem::from(GolfCourse {
            id: Uuid::new_v4(),
            name: "Old Course".to_string(),
            location: "St Andrews".to_string(),
            country: "Scotland".to_string(),
            total_holes: 9,
            holes: (1..=9).map(|i| Hole::new(i, 4, 350, i)).collect(),
            description: None,
            difficulty: Some(Difficulty::Championship),
            is_active: true,
            created_at: now,
            updated_at: now,
        });

        let body = serde_json::to_value(item).unwrap();
        assert_eq!(body["difficulty"], "championship");
        assert_eq!(body["par"], 36);
        assert_eq!(body["holes"].as_array().unwrap().len(), 9);
    }
}
