//! Shared response envelope types for API handlers.
//!
//! Every successful payload uses a `{ "data": ... }` envelope. Listings add a
//! `pagination` object describing the page-link bar.

use serde::Serialize;
use tourdesk_core::pagination::{PageWindow, PaginationQuery};

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "pagination": {...} }` envelope for paged listings.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PageWindow,
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, query: PaginationQuery) -> Self {
        Self {
            data,
            pagination: PageWindow::from(query),
        }
    }
}
