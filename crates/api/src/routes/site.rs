//! Public site routes. Merged (not nested) so `{lang}` stays in the path.
//!
//! ```text
//! GET    /site/{lang}/cities                  list_cities (?page, per_page)
//! GET    /site/{lang}/tours                   list_tours (?page, per_page, city_id)
//! GET    /site/{lang}/tours/{id}              get_tour (?currency)
//! GET    /site/{lang}/tours/{id}/reviews      list_reviews (?page, per_page)
//! POST   /site/{lang}/tours/{id}/reviews      create_review
//! GET    /site/{lang}/tours/{id}/faqs         list_faqs
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site/{lang}/cities", get(site::list_cities))
        .route("/site/{lang}/tours", get(site::list_tours))
        .route("/site/{lang}/tours/{id}", get(site::get_tour))
        .route(
            "/site/{lang}/tours/{id}/reviews",
            get(site::list_reviews).post(site::create_review),
        )
        .route("/site/{lang}/tours/{id}/faqs", get(site::list_faqs))
}
