//! Signing key set retrieval
//!
//! Fetches the identity provider's JWKS document and keeps it in memory, so
//! the provider is contacted once per process (or once per TTL window).

use crate::config::AuthConfig;
use jsonwebtoken::jwk::JwkSet;
use log::{debug, info};
use moka::future::Cache as MokaCache;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur while fetching the key set
#[derive(Debug, Error)]
pub enum JwksError {
    #[error("Invalid JWKS URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Failed to fetch JWKS: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct JwksClient {
    url: Url,
    client: Client,
    cache: MokaCache<String, Arc<JwkSet>>,
}

impl JwksClient {
    pub fn new(config: &AuthConfig) -> Result<Self, JwksError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.jwks_timeout))
            .connect_timeout(Duration::from_secs(config.jwks_timeout))
            .build()?;

        let mut builder = MokaCache::builder().max_capacity(1);
        if let Some(ttl) = config.jwks_cache_ttl {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }

        Ok(Self {
            url: config.jwks_url()?,
            client,
            cache: builder.build(),
        })
    }

    /// Returns the current key set, fetching it on first use.
    ///
    /// Concurrent callers that miss the cache share a single request.
    pub async fn key_set(&self) -> Result<Arc<JwkSet>, Arc<JwksError>> {
        self.cache
            .try_get_with(self.url.to_string(), self.fetch())
            .await
    }

    async fn fetch(&self) -> Result<Arc<JwkSet>, JwksError> {
        debug!("Fetching signing keys from {}", self.url);
        let key_set: JwkSet = self
            .client
            .get(self.url.clone())
            .header(http::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!(
            "Loaded {} signing key(s) from {}",
            key_set.keys.len(),
            self.url
        );
        Ok(Arc::new(key_set))
    }
}
