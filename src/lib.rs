//! # HTTP Gateway
//!
//! Interception layer around an HTTP transport. Every call made through the
//! [`HttpGateway`] goes through the same pipeline:
//!
//! * request adapters transform the outgoing request,
//! * a mock generator can answer the call instead of the network,
//! * transport progress events are reduced to the final response,
//! * response adapters transform that response one after another,
//! * an exception adapter translates every error before it reaches the
//!   caller.
//!
//! The [`core`] module contains the contracts (transport, adapters, runtime
//! and errors), [`dx`] the gateway itself, [`transport`] the bundled
//! transports and [`providers`] the bundled runtime and serialization.
//!
//! ## Example
//!
//! ```no_run
//! use http_gateway::{core::{GatewayError, TransportRequest}, GatewayConfigBuilder, HttpGatewayBuilder};
//! use std::time::Duration;
//!
//! #[derive(serde::Deserialize)]
//! struct User {
//!     id: u64,
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpGatewayBuilder::with_reqwest_transport()
//!     .with_config(
//!         GatewayConfigBuilder::default()
//!             .with_url("https://api.example.com")
//!             .with_header("Authorization", "Bearer token")
//!             .build()?,
//!     )
//!     .with_request_id(true)
//!     .build()?;
//!
//! let user: User = gateway.get("users/1").execute_json().await?;
//!
//! let offline: User = gateway
//!     .get("users/2")
//!     .mock(|_: &TransportRequest| -> Result<Vec<u8>, GatewayError> {
//!         Ok(br#"{"id":2}"#.to_vec())
//!     })
//!     .mock_delay(Duration::from_millis(300))
//!     .execute_json()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * `serde` (default) - JSON request and response bodies with [`serde`],
//! * `reqwest` (default) - [`TransportReqwest`] built on top of [`reqwest`],
//! * `tokio` (default) - [`RuntimeTokio`] timers for delayed mocked responses,
//! * `full` - all of the above.
//!
//! [`serde`]: https://docs.rs/serde
//! [`reqwest`]: https://docs.rs/reqwest
//! [`TransportReqwest`]: crate::transport::TransportReqwest
//! [`RuntimeTokio`]: crate::providers::futures_tokio::RuntimeTokio

#[doc(inline)]
pub use dx::{
    GatewayConfig, GatewayConfigBuilder, GatewayRequestBuilder, HttpGateway, HttpGatewayBuilder,
    MockOptions,
};

pub mod core;
pub mod dx;
pub mod providers;
pub mod transport;
