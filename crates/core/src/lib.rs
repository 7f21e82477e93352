//! Domain layer for the hotspot gallery service.
//!
//! Pure logic only: no database, network or filesystem access. The API and
//! repository crates build on the types and rules defined here.

pub mod dates;
pub mod draft;
pub mod editor;
pub mod error;
pub mod gallery;
pub mod hotspot;
pub mod listing;
pub mod types;
