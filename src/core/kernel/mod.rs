/// Transport kernel
///
/// The kernel holds the exchange-agnostic transport: a `RestClient` trait that
/// turns a `Request` descriptor into raw response bytes, and `ReqwestRest`, its
/// reqwest-backed implementation. Endpoint services build requests and decode
/// responses; the kernel never looks inside a payload.
///
/// # Basic usage
/// ```rust,no_run
/// use binance_rest::core::kernel::*;
/// use binance_rest::core::params::ParameterSet;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RestClientConfig::new("https://api.binance.com".to_string(), "binance".to_string())
///     .with_timeout(10);
/// let rest = RestClientBuilder::new(config).build()?;
///
/// let body = rest.invoke(&Request::get("/api/v3/ping", ParameterSet::new())).await?;
/// assert_eq!(body, b"{}");
/// # Ok(())
/// # }
/// ```
///
/// # Testing
///
/// Services are generic over `RestClient`, so tests inject an in-memory
/// transport that records requests and replays canned bodies.
pub mod rest;

pub use rest::{ReqwestRest, Request, RestClient, RestClientBuilder, RestClientConfig};
