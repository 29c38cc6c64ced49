//! # Gateway Developer Experience
//!
//! This module provides the [`HttpGateway`], its configuration, the
//! interceptors it is composed from and the [`GatewayRequestBuilder`] which
//! wires them together.
//!
//! [`http_gateway`]: ../index.html

#[doc(inline)]
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub mod config;

#[doc(inline)]
pub use gateway::{HttpGateway, HttpGatewayBuilder, HttpGatewayConfigBuilder, HttpGatewayRef};
pub mod gateway;

#[doc(inline)]
pub use interceptors::{MockOptions, ResponseStream};
pub mod interceptors;

#[doc(inline)]
pub use request::GatewayRequestBuilder;
pub mod request;
