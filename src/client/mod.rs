//! Client layer: orchestrates transport calls, retry policy, and error
//! classification.

mod error;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AlertRequest, AlertResponse, ApiKey, BaseUrl, MessageText, PartsResponse, ValidationError,
};

pub use error::NotifoxError;

/// Default base URL for the Notifox API.
pub const DEFAULT_BASE_URL: &str = "https://api.notifox.com";
/// Default timeout applied to each HTTP request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default number of retries for failed `send_alert` requests.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Environment variable consulted for the API key when none is configured.
pub const ENV_API_KEY: &str = "NOTIFOX_API_KEY";
/// Backoff grows linearly: `(completed_attempt + 1) * RETRY_BACKOFF_STEP`.
pub const RETRY_BACKOFF_STEP: Duration = Duration::from_millis(100);

const DEFAULT_USER_AGENT: &str = concat!("notifox-rust/", env!("CARGO_PKG_VERSION"));

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Raw outcome of one HTTP exchange: status code plus body text.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Pluggable HTTP execution strategy.
///
/// Implementations must be safe for concurrent reuse; one transport is shared
/// by every call a client (and its clones) makes. `bearer` is `None` for
/// endpoints that do not require authorization.
pub trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        bearer: Option<&'a str>,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
            if let Some(token) = bearer {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone)]
/// Builder for [`NotifoxClient`].
///
/// Every knob is independently optional. Without an explicit API key,
/// `build` falls back to the [`ENV_API_KEY`] environment variable; if both
/// are absent, construction fails with
/// [`ValidationError::MissingApiKey`](crate::ValidationError).
pub struct NotifoxClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl NotifoxClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            user_agent: None,
            transport: None,
        }
    }

    /// Set the API key explicitly, bypassing the environment lookup.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL. Validated at `build` time.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry budget for `send_alert` (total attempts = retries + 1).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the HTTP execution strategy, e.g. with a fake for tests.
    ///
    /// A custom transport owns its own timeout and identity headers; the
    /// `timeout` and `user_agent` settings apply only to the built-in one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`NotifoxClient`].
    pub fn build(self) -> Result<NotifoxClient, NotifoxError> {
        let api_key = resolve_api_key(self.api_key)?;
        let base_url = BaseUrl::new(self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .user_agent(
                        self.user_agent
                            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
                    )
                    .build()
                    .map_err(|err| NotifoxError::Connection(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(NotifoxClient {
            api_key,
            base_url,
            max_retries: self.max_retries,
            http,
        })
    }
}

impl Default for NotifoxClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_api_key(explicit: Option<String>) -> Result<ApiKey, NotifoxError> {
    let value = match explicit {
        Some(value) => value,
        None => match std::env::var(ENV_API_KEY) {
            Ok(value) => value,
            Err(_) => String::new(),
        },
    };
    if value.trim().is_empty() {
        return Err(NotifoxError::Validation(ValidationError::MissingApiKey {
            env: ENV_API_KEY,
        }));
    }
    Ok(ApiKey::new(value)?)
}

#[derive(Clone)]
/// High-level Notifox client.
///
/// All per-call state is local to the call, so one client (or clones of it)
/// can serve concurrent operations; only the transport's connection pool is
/// shared.
pub struct NotifoxClient {
    api_key: ApiKey,
    base_url: BaseUrl,
    max_retries: u32,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for NotifoxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifoxClient")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl NotifoxClient {
    /// Create a client with the given API key and default configuration.
    ///
    /// For more customization, or to fall back to the [`ENV_API_KEY`]
    /// environment variable, use [`NotifoxClient::builder`].
    pub fn new(api_key: impl Into<String>) -> Result<Self, NotifoxError> {
        Self::builder().api_key(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> NotifoxClientBuilder {
        NotifoxClientBuilder::new()
    }

    /// Deliver an alert to an audience.
    ///
    /// Failed attempts are classified immediately; retryable failures (see
    /// [`NotifoxError::is_retryable`]) are re-attempted up to the configured
    /// budget with linear backoff. The backoff sleep and the HTTP call are
    /// both cancel-safe: dropping the returned future (for example via
    /// `tokio::time::timeout`) aborts the operation promptly.
    pub async fn send_alert(&self, request: AlertRequest) -> Result<AlertResponse, NotifoxError> {
        let url = format!("{}/alert", self.base_url.as_str());
        let payload = crate::transport::encode_alert_request(&request)
            .map_err(|err| NotifoxError::Connection(Box::new(err)))?;

        let mut attempt: u32 = 0;
        loop {
            match self.attempt_alert(&url, payload.clone()).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if !err.is_retryable() || attempt >= self.max_retries {
                        return Err(err);
                    }
                }
            }
            tokio::time::sleep(RETRY_BACKOFF_STEP * (attempt + 1)).await;
            attempt += 1;
        }
    }

    /// Calculate parts, cost, encoding, and character count for a message
    /// without sending it.
    ///
    /// Performs exactly one attempt, and deliberately omits the Authorization
    /// header: the parts endpoint does not require it.
    pub async fn calculate_parts(&self, alert: MessageText) -> Result<PartsResponse, NotifoxError> {
        let url = format!("{}/alert/parts", self.base_url.as_str());
        let payload = crate::transport::encode_parts_request(&alert)
            .map_err(|err| NotifoxError::Connection(Box::new(err)))?;

        let response = self.exchange(&url, false, payload).await?;
        crate::transport::decode_parts_response(&response.body)
            .map_err(|_| error::invalid_success_body(response.status, &response.body))
    }

    async fn attempt_alert(&self, url: &str, payload: String) -> Result<AlertResponse, NotifoxError> {
        let response = self.exchange(url, true, payload).await?;
        crate::transport::decode_alert_response(&response.body)
            .map_err(|_| error::invalid_success_body(response.status, &response.body))
    }

    /// One HTTP exchange: transport failure becomes `Connection`, a non-2xx
    /// status goes through the classifier, a 2xx response is returned for the
    /// caller to decode.
    async fn exchange(
        &self,
        url: &str,
        authorize: bool,
        payload: String,
    ) -> Result<HttpResponse, NotifoxError> {
        let bearer = if authorize {
            Some(self.api_key.as_str())
        } else {
            None
        };
        let response = self
            .http
            .post_json(url, bearer, payload)
            .await
            .map_err(NotifoxError::Connection)?;

        if (200..300).contains(&response.status) {
            Ok(response)
        } else {
            Err(error::classify_response(response.status, &response.body))
        }
    }
}
