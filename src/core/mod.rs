//! # Gateway Core
//!
//! Core functionality of the HTTP gateway.
//!
//! The `core` module contains the contracts every other part of the crate is
//! built on: the [`Transport`] boundary with its request, response and event
//! types, the caller-supplied adapter traits, the [`Runtime`] used for timers
//! and the [`GatewayError`] type.
//!
//! [`http_gateway`]: ../index.html

pub use error::GatewayError;
pub mod error;

pub use headers::{HeaderValue, Headers, HeadersExt};
pub mod headers;

pub use transport::{Transport, TransportEventStream};
pub mod transport;

pub use transport_request::{SyncRequest, TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

pub use transport_event::TransportEvent;
pub mod transport_event;

pub use adapter::{
    Adapter, AdapterContext, ExceptionAdapter, MockGenerator, ResponseAdapter,
};
pub mod adapter;

pub use runtime::Runtime;
pub mod runtime;

pub use serialize::Serialize;
pub mod serialize;

pub use deserializer::Deserializer;
pub mod deserializer;

pub(crate) mod utils;
