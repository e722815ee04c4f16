//! PostgreSQL-backed message store.

use async_trait::async_trait;
use sqlx::{Connection, PgConnection};

use crate::config::DbConfig;
use crate::error::{Error, Result};
use crate::store::MessageStore;

/// Reads messages over a transient connection, one per call. No pooling.
pub struct PgMessageStore {
    connect_url: String,
}

impl PgMessageStore {
    pub fn new(db: &DbConfig) -> Self {
        Self {
            connect_url: db.connect_url(),
        }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn fetch_first_message(&self) -> Result<Option<String>> {
        let mut conn = PgConnection::connect(&self.connect_url)
            .await
            .map_err(|e| Error::database(e.to_string()))?;

        let content =
            sqlx::query_scalar::<_, String>("SELECT content FROM messages ORDER BY id LIMIT 1")
                .fetch_optional(&mut conn)
                .await
                .map_err(|e| Error::database(e.to_string()))?;

        conn.close()
            .await
            .map_err(|e| Error::database(e.to_string()))?;

        Ok(content)
    }
}
