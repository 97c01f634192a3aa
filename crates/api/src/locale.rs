//! Request language extractor.

use axum::extract::{FromRequestParts, OriginalUri, Query};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;
use serde::Deserialize;
use tourdesk_core::language::{resolve_language, Language};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct LangParam {
    lang: Option<String>,
}

/// The active content language for a request.
///
/// Resolved from `?lang=`, then a language segment in the URL path
/// (`/site/ar/tours`), then `Accept-Language`, then the configured default.
/// Only an explicit, unsupported `?lang=` is rejected.
///
/// ```ignore
/// async fn list(locale: Locale) -> AppResult<Json<()>> {
///     tracing::debug!(language = %locale.0, "listing");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale(pub Language);

impl FromRequestParts<AppState> for Locale {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let query_lang = Query::<LangParam>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(p)| p.lang);

        // Nested routers see a stripped URI; the original keeps the full path.
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.path())
            .unwrap_or_else(|| parts.uri.path());

        let accept = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        let language = resolve_language(
            query_lang.as_deref(),
            path,
            accept,
            state.config.default_language,
        )?;

        Ok(Locale(language))
    }
}
