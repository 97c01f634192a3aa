//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod city_repo;
pub mod currency_repo;
pub mod faq_repo;
pub mod review_repo;
pub mod tour_repo;
pub mod wizard_session_repo;

pub use city_repo::CityRepo;
pub use currency_repo::CurrencyRepo;
pub use faq_repo::FaqRepo;
pub use review_repo::ReviewRepo;
pub use tour_repo::TourRepo;
pub use wizard_session_repo::WizardSessionRepo;
