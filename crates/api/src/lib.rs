//! TourDesk API server library.
//!
//! Exposes configuration, state, error handling and the route tree so the
//! binaries and the integration tests build the exact same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod locale;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
