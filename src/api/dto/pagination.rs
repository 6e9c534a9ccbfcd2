//! Pagination, filtering and search query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::{Validate, ValidationError};

use super::envelope::PaginationMeta;
use crate::domain::entities::Difficulty;
use crate::domain::repositories::CourseFilter;

const DEFAULT_PER_PAGE: i64 = 10;
const DEFAULT_SEARCH_LIMIT: i64 = 50;
const MAX_PAGE: i64 = 10_000_000;
const MAX_SKIP: i64 = 1_000_000_000;

/// Pagination query parameters.
///
/// Accepts both page-style (`page`, `per_page`) and offset-style (`skip`,
/// `limit`) windows. Uses `serde_with` so the numbers still parse when the
/// struct is flattened into a larger query.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = MAX_PAGE))]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0, max = MAX_SKIP))]
    pub skip: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

/// Resolved window for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
    pub page: i64,
    pub per_page: i64,
}

impl PageWindow {
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.per_page - 1) / self.per_page
    }

    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages(total),
        }
    }
}

impl PaginationParams {
    /// Converts the parameters to an offset/limit window.
    ///
    /// `per_page` wins over `limit` and `skip` wins over `page`. The reported
    /// page for an offset-style request is the page containing `skip`.
    /// Call after `validate()`.
    pub fn resolve(&self) -> PageWindow {
        let per_page = self.per_page.or(self.limit).unwrap_or(DEFAULT_PER_PAGE);

        match self.skip {
            Some(skip) => PageWindow {
                offset: skip,
                limit: per_page,
                page: skip / per_page + 1,
                per_page,
            },
            None => {
                let page = self.page.unwrap_or(1);
                PageWindow {
                    offset: (page - 1).saturating_mul(per_page),
                    limit: per_page,
                    page,
                    per_page,
                }
            }
        }
    }
}

/// Query parameters for `GET /golf-courses`.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_hole_range"))]
pub struct CourseListQuery {
    #[serde(flatten)]
    #[validate(nested)]
    pub pagination: PaginationParams,

    pub search: Option<String>,

    pub country: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 9, max = 18))]
    pub min_holes: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 9, max = 18))]
    pub max_holes: Option<i32>,
}

fn validate_hole_range(query: &CourseListQuery) -> Result<(), ValidationError> {
    match (query.min_holes, query.max_holes) {
        (Some(min), Some(max)) if min > max => {
            let mut err = ValidationError::new("hole_range");
            err.message = Some("min_holes must not exceed max_holes".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl CourseListQuery {
    /// Builds the repository filter together with the window it was built from.
    pub fn into_filter(self) -> (CourseFilter, PageWindow) {
        let window = self.pagination.resolve();
        let filter = CourseFilter::new(window.offset, window.limit)
            .with_search(self.search)
            .with_country(self.country)
            .with_difficulty(self.difficulty)
            .with_active(self.is_active)
            .with_hole_range(self.min_holes, self.max_holes);
        (filter, window)
    }
}

/// Query parameters for `GET /golf-courses/search`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(min = 1, max = 200))]
    pub q: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl SearchQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }
}
