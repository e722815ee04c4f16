//! API service state

use std::time::Duration;

use anyhow::Context;

/// Client-side timeout on the downstream call. Fixed, not configurable.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(2);

/// API service state
#[derive(Clone)]
pub struct ApiState {
    /// HTTP client for the downstream data service, built once at startup
    pub client: reqwest::Client,

    /// URL of the data service message endpoint
    pub downstream_url: String,
}

impl ApiState {
    pub fn new(downstream_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            downstream_url: downstream_url.into(),
        })
    }
}
