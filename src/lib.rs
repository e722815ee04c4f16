//! Msgrelay - a minimal two-service message relay
//!
//! Two binaries share this library:
//! - `data-service` reads the lowest-id message from PostgreSQL and serves
//!   it as `{"message": ...}`
//! - `api-service` calls the data service over HTTP and re-exposes the field
//!   as `{"result": ...}`
//!
//! Each request is a single synchronous round trip; no state is kept between
//! requests.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod store;

pub use error::{Error, Result};
