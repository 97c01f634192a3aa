//! Back-office city routes, mounted at `/admin/cities`.

use axum::routing::get;
use axum::Router;

use crate::handlers::cities;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cities::list_cities).post(cities::create_city))
        .route(
            "/{id}",
            get(cities::get_city)
                .put(cities::update_city)
                .delete(cities::delete_city),
        )
}
