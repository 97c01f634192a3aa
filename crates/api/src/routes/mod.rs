pub mod cities;
pub mod currencies;
pub mod faqs;
pub mod health;
pub mod reviews;
pub mod site;
pub mod tour_wizard;
pub mod tours;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /site/{lang}/cities                              public city list
/// /site/{lang}/tours                               public tour list
/// /site/{lang}/tours/{id}                          tour detail with price quote
/// /site/{lang}/tours/{id}/reviews                  approved reviews, submit review
/// /site/{lang}/tours/{id}/faqs                     FAQ entries
///
/// /admin/tours                                     list (all languages, inactive too)
/// /admin/tours/{id}                                get, delete
/// /admin/tours/{id}/translations/{lang}            save content for a language
/// /admin/tours/{id}/active                         publish / hide
///
/// /admin/tour-wizard                               start session
/// /admin/tour-wizard/{id}                          get session
/// /admin/tour-wizard/{id}/fields                   set a form field
/// /admin/tour-wizard/{id}/advance                  next step
/// /admin/tour-wizard/{id}/go-back                  previous step
/// /admin/tour-wizard/{id}/complete                 create the tour
/// /admin/tour-wizard/{id}/abandon                  discard
///
/// /admin/cities                                    list, create
/// /admin/cities/{id}                               get, update, delete
/// /admin/reviews/pending                           moderation queue
/// /admin/reviews/{id}/approval                     approve / reject
/// /admin/reviews/{id}                              delete
/// /admin/faqs                                      create
/// /admin/faqs/{id}                                 delete
/// /admin/currencies                                list
/// /admin/currencies/{code}                         create or update
/// /admin/currencies/{code}/commission              set commission
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(site::router())
        .nest("/admin/tours", tours::router())
        .nest("/admin/tour-wizard", tour_wizard::router())
        .nest("/admin/cities", cities::router())
        .nest("/admin/reviews", reviews::router())
        .nest("/admin/faqs", faqs::router())
        .nest("/admin/currencies", currencies::router())
}
