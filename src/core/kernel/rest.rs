use crate::core::errors::ExchangeError;
use crate::core::json;
use crate::core::params::ParameterSet;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::{instrument, trace};

/// A request descriptor handed to the transport
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub endpoint: &'static str,
    pub params: ParameterSet,
}

impl Request {
    pub fn get(endpoint: &'static str, params: ParameterSet) -> Self {
        Self {
            method: Method::GET,
            endpoint,
            params,
        }
    }
}

/// REST transport trait
///
/// Implementations perform the network call and hand back the raw response
/// body. Errors are surfaced unchanged to the caller; nothing above this
/// trait inspects or retries them.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Send `request` and return the raw response body
    async fn invoke(&self, request: &Request) -> Result<Vec<u8>, ExchangeError>;

    /// Send `request` and parse the body as an untyped JSON tree
    async fn invoke_json(&self, request: &Request) -> Result<Value, ExchangeError> {
        let body = self.invoke(request).await?;
        json::parse(&body)
    }
}

#[async_trait]
impl<T: RestClient + ?Sized> RestClient for std::sync::Arc<T> {
    async fn invoke(&self, request: &Request) -> Result<Vec<u8>, ExchangeError> {
        (**self).invoke(request).await
    }
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: 30,
            user_agent: concat!("binance-rest/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self { config }
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                ExchangeError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
        })
    }
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone, Debug)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

/// Error body returned by the exchange on rejected requests
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

impl ReqwestRest {
    /// Create a new `ReqwestRest` instance with default settings
    pub fn new(base_url: String, exchange_name: String) -> Result<Self, ExchangeError> {
        RestClientBuilder::new(RestClientConfig::new(base_url, exchange_name)).build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Build the full URL for an endpoint, query included
    fn build_url(&self, endpoint: &str, params: &ParameterSet) -> String {
        if params.is_empty() {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_url, endpoint, params.query_string())
        }
    }

    /// Handle the response and extract the body
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response(&self, response: Response) -> Result<Vec<u8>, ExchangeError> {
        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            ExchangeError::NetworkError(format!("Failed to read response body: {}", e))
        })?;

        trace!(bytes = body.len(), "response body received");

        if status.is_client_error() || status.is_server_error() {
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(body.to_vec())
    }
}

/// Map a rejected response onto `ApiError`, preferring the exchange's own
/// `{"code", "msg"}` body over the bare HTTP status.
fn api_error(status: u16, body: &[u8]) -> ExchangeError {
    serde_json::from_slice::<ApiErrorBody>(body).map_or_else(
        |_| ExchangeError::ApiError {
            code: i64::from(status),
            message: String::from_utf8_lossy(body).into_owned(),
        },
        |err| ExchangeError::ApiError {
            code: err.code,
            message: err.msg,
        },
    )
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, request), fields(exchange = %self.config.exchange_name, method = %request.method, endpoint = %request.endpoint, param_count = request.params.len()))]
    async fn invoke(&self, request: &Request) -> Result<Vec<u8>, ExchangeError> {
        let url = self.build_url(request.endpoint, &request.params);

        let response = self
            .client
            .request(request.method.clone(), &url)
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("Request failed: {}", e)))?;

        self.handle_response(response).await
    }
}
