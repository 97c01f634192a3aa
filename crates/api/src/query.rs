//! Shared query parameter types for API handlers.

use serde::Deserialize;
use tourdesk_core::types::DbId;

/// Page-based listing parameters (`?page=&per_page=`).
///
/// Values are clamped through [`AppState::page_request`](crate::state::AppState::page_request).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Tour listing parameters, shared by the public site and the back office.
///
/// The language is resolved separately by the [`Locale`](crate::locale::Locale)
/// extractor, which also reads `?lang=`.
#[derive(Debug, Default, Deserialize)]
pub struct TourListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub city_id: Option<DbId>,
}
