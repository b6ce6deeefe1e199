//! Form and query payloads for the submission endpoints.
//!
//! Create/edit bodies are decoded through [`FormFields`] into the domain
//! drafts and change sets via `TryFrom`, which is where field validation
//! happens.

pub mod artist_dto;
pub mod common_dto;
pub mod show_dto;
pub mod venue_dto;

pub use common_dto::*;
pub use show_dto::parse_start_time;
