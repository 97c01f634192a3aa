//! FAQ routes, mounted at `/admin/faqs`.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(faqs::create_faq))
        .route("/{id}", delete(faqs::delete_faq))
}
