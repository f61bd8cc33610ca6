//! Data model and HTTP client for the exam seating lookup service.
//!
//! The service exposes two read-only routes: `/student/{roll}` and
//! `/faculty/{course}`. This crate decodes their payloads into row-shaped
//! records that the terminal front-end renders directly.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{ClientConfig, HttpSeatingClient, SeatingApi, decode_faculty, decode_student};
pub use error::LookupError;
pub use query::{QueryKind, normalize_key};
pub use types::{FacultyEntry, MISSING_FIELD, SeatingAssignment, SeatingRecord, StudentEntry};
