//! # Transport Providers Module
//!
//! This module contains the transport providers that can be used by
//! [`HttpGateway`] and the [`GatewayMiddleware`] every transport is wrapped
//! into.
//!
//! [`HttpGateway`]: crate::dx::HttpGateway
//! [`GatewayMiddleware`]: crate::transport::middleware::GatewayMiddleware

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;

pub mod middleware;
