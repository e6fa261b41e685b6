//! Client configuration

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
const DEFAULT_USER_AGENT: &str = "pokeapi-client-rs/0.1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Effective settings of one client instance
///
/// Built by applying `with_*` transformations over the defaults, then
/// handed to [`crate::PokeApiClient::with_config`]. The client keeps the
/// config immutable for its whole lifetime.
///
/// Values are taken as given: an empty base URL or a zero timeout is
/// accepted here and only fails (if at all) once a request is made.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the upstream API, without a trailing slash
    pub base_url: String,
    /// Total elapsed-time bound for one logical call, retries included;
    /// also applied to each individual attempt at the transport layer
    pub timeout: Duration,
    /// Value of the `User-Agent` header on every request
    pub user_agent: String,
    /// Total attempts per call, counting the initial one
    pub retry_attempts: u32,
    /// Backoff interval before the first retry; doubles per retry
    pub retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl ClientConfig {
    /// Start from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upstream root URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the elapsed-time bound for one logical call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the total number of attempts per call
    pub fn with_retry_attempts(mut self, retry_attempts: u32) -> Self {
        self.retry_attempts = retry_attempts;
        self
    }

    /// Set the backoff interval before the first retry
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }
}
