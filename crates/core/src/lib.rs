//! Pure domain logic for the TourDesk catalog and back office.
//!
//! Nothing in this crate touches the database or the network; the `db` and
//! `api` crates build on these types and validation helpers.

pub mod catalog;
pub mod currency;
pub mod error;
pub mod language;
pub mod pagination;
pub mod review;
pub mod tour_form;
pub mod types;
pub mod wizard;
