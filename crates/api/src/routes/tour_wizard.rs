//! Route definitions for the tour creation wizard.
//!
//! Mounted at `/admin/tour-wizard` by `api_routes()`.
//!
//! ```text
//! POST   /                              create_session
//! GET    /{id}                          get_session
//! PUT    /{id}/fields                   set_field
//! POST   /{id}/advance                  advance_step
//! POST   /{id}/go-back                  go_back
//! POST   /{id}/complete                 complete_session
//! POST   /{id}/abandon                  abandon_session
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::tour_wizard;
use crate::state::AppState;

/// Tour wizard routes -- mounted at `/admin/tour-wizard`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tour_wizard::create_session))
        .route("/{id}", get(tour_wizard::get_session))
        .route("/{id}/fields", put(tour_wizard::set_field))
        .route("/{id}/advance", post(tour_wizard::advance_step))
        .route("/{id}/go-back", post(tour_wizard::go_back))
        .route("/{id}/complete", post(tour_wizard::complete_session))
        .route("/{id}/abandon", post(tour_wizard::abandon_session))
}
