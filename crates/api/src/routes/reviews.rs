//! Review moderation routes, mounted at `/admin/reviews`.
//!
//! ```text
//! GET    /pending               list_pending (?page, per_page)
//! PUT    /{id}/approval         set_approval
//! DELETE /{id}                  delete_review
//! ```

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(reviews::list_pending))
        .route("/{id}/approval", put(reviews::set_approval))
        .route("/{id}", delete(reviews::delete_review))
}
