//! Back-office tour routes, mounted at `/admin/tours`.
//!
//! ```text
//! GET    /                              list_tours (?page, per_page, lang, city_id)
//! GET    /{id}                          get_tour (?lang)
//! DELETE /{id}                          delete_tour
//! PUT    /{id}/translations/{lang}      update_translation
//! PUT    /{id}/active                   set_active
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tours;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tours::list_tours))
        .route("/{id}", get(tours::get_tour).delete(tours::delete_tour))
        .route(
            "/{id}/translations/{lang}",
            put(tours::update_translation),
        )
        .route("/{id}/active", put(tours::set_active))
}
