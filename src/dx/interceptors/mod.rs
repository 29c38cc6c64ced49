//! # Interceptors
//!
//! Building blocks the request methods are composed from:
//!
//! * [`request`] folds request adapters over full requests and plain strings,
//! * [`response`] filters response events, maps errors and chains response
//!   adapters in streaming and synchronous form,
//! * [`mockup`] produces synthetic responses with a mock generator.
//!
//! Every entry point is a method of [`HttpGateway`]. They are public so other
//! crates can compose their own request methods, but most callers should use
//! [`HttpGateway::request`] which wires them together.
//!
//! [`HttpGateway`]: crate::dx::HttpGateway
//! [`HttpGateway::request`]: crate::dx::HttpGateway::request

pub mod mockup;
pub mod request;
pub mod response;

pub use mockup::MockOptions;
pub use response::ResponseStream;
