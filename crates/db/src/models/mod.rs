//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where the
//!   entity supports partial updates

pub mod city;
pub mod currency;
pub mod faq;
pub mod review;
pub mod tour;
pub mod wizard_session;
