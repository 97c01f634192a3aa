//! Currency routes, mounted at `/admin/currencies`.
//!
//! ```text
//! GET    /                      list_currencies
//! PUT    /{code}                upsert_currency
//! PUT    /{code}/commission     update_commission
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::currencies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(currencies::list_currencies))
        .route("/{code}", put(currencies::upsert_currency))
        .route("/{code}/commission", put(currencies::update_commission))
}
