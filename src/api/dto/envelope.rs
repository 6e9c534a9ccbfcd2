//! Response envelopes shared by every endpoint.
//!
//! Single entities are wrapped as `{success, message, data}`, listings as
//! `{success, message, data: [...], total}` plus pagination metadata when
//! the listing is paged.

use serde::Serialize;

/// Envelope for single-entity responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Pagination metadata flattened into paged listings.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

/// Envelope for listings.
#[derive(Debug, Serialize)]
pub struct ApiListResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub total: i64,
    #[serde(flatten)]
    pub pagination: Option<PaginationMeta>,
}

impl<T> ApiListResponse<T> {
    /// Unpaged listing: `total` is the number of items returned.
    pub fn ok(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            total: data.len() as i64,
            data,
            pagination: None,
        }
    }

    /// Paged listing: `total` counts every match, not just this page.
    pub fn paged(
        message: impl Into<String>,
        data: Vec<T>,
        total: i64,
        pagination: PaginationMeta,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            total,
            pagination: Some(pagination),
        }
    }
}
