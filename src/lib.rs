//! Product code registry backend.
//!
//! A small CRUD web service for managing product codes: create, list/search,
//! fetch by id, delete, and render a QR-code PNG for a product's code. Codes
//! are normalized into a canonical 35-character form before validation and
//! storage, and uniqueness is enforced both in the service and by the store's
//! unique index.

// Module declarations
pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
