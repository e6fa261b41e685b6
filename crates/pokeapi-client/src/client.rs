//! PokeAPI HTTP client
//!
//! One retry loop serves both lookups: transport failures and 5xx
//! responses are retried with exponential backoff, anything else is
//! terminal and handed to the decode step.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::error::{PokeApiError, Result};
use crate::types::{Pokemon, PokemonList};

/// Ceiling for the exponential part of the backoff schedule
const MAX_BACKOFF: Duration = Duration::from_secs(30);
/// Upper bound of the additive jitter, in milliseconds
const JITTER_MS: u64 = 250;

/// Client for the PokeAPI species catalog
///
/// Holds an immutable [`ClientConfig`] and a pooled `reqwest` client;
/// a single instance can serve concurrent calls.
pub struct PokeApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PokeApiClient {
    /// Create a client with the default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    /// Fetch a single Pokemon by numeric id or name
    ///
    /// # Arguments
    /// * `id_or_name` - Numeric id (`"25"`) or lowercase name (`"pikachu"`)
    pub async fn get_pokemon(&self, id_or_name: &str) -> Result<Pokemon> {
        let response = self.do_request(&format!("pokemon/{}", id_or_name)).await?;
        decode_json(response).await
    }

    /// Fetch one page of the Pokemon listing
    ///
    /// `offset` and `limit` are passed through uninterpreted; the upstream
    /// service is the sole validator of nonsensical values.
    pub async fn get_pokemons(&self, offset: i64, limit: i64) -> Result<PokemonList> {
        let endpoint = format!("pokemon?offset={}&limit={}", offset, limit);
        let response = self.do_request(&endpoint).await?;
        decode_json(response).await
    }

    /// Issue a GET and retry retryable outcomes until the budget runs out
    ///
    /// Retryable: transport failure, status >= 500. Everything below 500
    /// (2xx and 4xx alike) is returned as-is for the caller to classify.
    /// The loop stops once `retry_attempts` attempts were made or the next
    /// backoff sleep would cross the `timeout` deadline, surfacing the
    /// last retryable error.
    async fn do_request(&self, endpoint: &str) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.config.base_url, endpoint)
            .parse::<reqwest::Url>()
            .map_err(|e| PokeApiError::Request(e.to_string()))?;

        let deadline = Instant::now() + self.config.timeout;
        let mut attempt = 1u32;

        loop {
            debug!(method = "GET", url = %url, "Sending request");

            let failure = match self
                .http
                .get(url.clone())
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await
            {
                Ok(response) if response.status().is_server_error() => {
                    let status = response.status().as_u16();
                    warn!(method = "GET", url = %url, status, "Upstream server error");
                    PokeApiError::Server(status)
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    error!(method = "GET", url = %url, error = %e, "Request failed");
                    PokeApiError::Network(e)
                }
            };

            let delay = backoff_delay(self.config.retry_delay, attempt);
            if attempt >= self.config.retry_attempts || Instant::now() + delay > deadline {
                return Err(failure);
            }

            debug!(attempt, delay_ms = delay.as_millis() as u64, "Retrying after backoff");
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Backoff before retry number `attempt` (1-indexed): starts at `initial`,
/// doubles per retry, capped at [`MAX_BACKOFF`], plus random jitter.
fn backoff_delay(initial: Duration, attempt: u32) -> Duration {
    let exp = initial
        .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
        .min(MAX_BACKOFF);
    let jitter = Duration::from_millis(rand::thread_rng().gen_range(0..=JITTER_MS));
    exp + jitter
}

/// Decode a terminal response: exactly 200 is a success, anything else
/// carries its literal status code back to the caller.
async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(PokeApiError::Status(status.as_u16()));
    }

    let body = response.bytes().await.map_err(PokeApiError::Network)?;
    serde_json::from_slice(&body).map_err(PokeApiError::Json)
}
