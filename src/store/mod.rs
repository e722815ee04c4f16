//! Message store abstraction
//!
//! Provides the read seam between the data service handlers and PostgreSQL.

use async_trait::async_trait;

use crate::Result;

pub mod postgres;

pub use postgres::PgMessageStore;

/// Read-only message store
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Fetch the content of the lowest-id message, if any row exists.
    async fn fetch_first_message(&self) -> Result<Option<String>>;
}
