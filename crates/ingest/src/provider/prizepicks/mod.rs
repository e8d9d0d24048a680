//! PrizePicks projections fetcher.
//!
//! Pulls the whole projections catalog in one GET through an authenticated
//! proxy. The response is a JSON:API document: projections in `data`, and
//! the players, games, leagues and stat types they reference in `included`.
//!
//! There is no pagination loop; the provider returns its entire board up to
//! `per_page` in a single page.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Proxy};
use tracing::{debug, warn};

use crate::config::{FeedConfig, ENV_PROXY_URL};
use crate::errors::FeedError;
use crate::models::{FeedSnapshot, IncludedResource};
use crate::provider::SnapshotSource;
use crate::sink::LogSink;

const PROVIDER_ID: &str = "PRIZEPICKS";
const USER_AGENT: &str = concat!("propline/", env!("CARGO_PKG_VERSION"));

/// Network fetcher for the PrizePicks board.
#[derive(Debug, Clone)]
pub struct PrizePicksFetcher {
    client: Client,
    api_url: String,
    per_page: u32,
    timeout: Duration,
}

impl PrizePicksFetcher {
    /// Create a fetcher from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Configuration`] if the proxy URL is missing,
    /// blank or unparseable. No request is made in that case.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let proxy_url = config
            .proxy_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| FeedError::Configuration(format!("{} is not set", ENV_PROXY_URL)))?;

        let proxy = Proxy::all(proxy_url)
            .map_err(|e| FeedError::Configuration(format!("Invalid proxy URL: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .proxy(proxy)
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                FeedError::Configuration(format!("Failed to initialize HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_url: config.api_url,
            per_page: config.per_page,
            timeout: config.timeout,
        })
    }

    fn map_transport_error(&self, error: reqwest::Error) -> FeedError {
        if error.is_timeout() {
            FeedError::Timeout {
                timeout: self.timeout,
            }
        } else {
            FeedError::Network(error)
        }
    }

    /// Make the single catalog request and return the raw body.
    async fn fetch_body(&self) -> Result<String, FeedError> {
        let per_page = self.per_page.to_string();

        debug!(
            "{} request: {} per_page={}",
            PROVIDER_ID, self.api_url, per_page
        );

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("per_page", per_page.as_str()), ("single_stat", "true")])
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))
    }
}

#[async_trait]
impl SnapshotSource for PrizePicksFetcher {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_snapshot(&self, sink: &dyn LogSink) -> Result<FeedSnapshot, FeedError> {
        let body = self.fetch_body().await?;

        let snapshot: FeedSnapshot = serde_json::from_str(&body).map_err(|e| {
            warn!(
                "{} returned an unparseable document ({} bytes): {}",
                PROVIDER_ID,
                body.len(),
                e
            );
            FeedError::from(e)
        })?;

        sink.log(&progress_line(&snapshot));

        Ok(snapshot)
    }
}

/// One-line summary of a fetched snapshot.
pub fn progress_line(snapshot: &FeedSnapshot) -> String {
    let mut players: HashSet<&str> = HashSet::new();
    let mut games: HashSet<&str> = HashSet::new();

    for resource in &snapshot.included {
        match resource {
            IncludedResource::Player { id, .. } => {
                players.insert(id);
            }
            IncludedResource::Game { id, .. } => {
                games.insert(id);
            }
            _ => {}
        }
    }

    format!(
        "Fetched {} projections ({} players, {} games) from {}",
        snapshot.projections.len(),
        players.len(),
        games.len(),
        PROVIDER_ID
    )
}
