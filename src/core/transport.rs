//! # Transport module
//!
//! This module contains the [`Transport`] trait.
//!
//! You can implement this trait for your own types, or use one of the provided
//! features to use a transport library.

use futures::{
    stream::{self, BoxStream},
    StreamExt,
};

use super::{GatewayError, TransportEvent, TransportRequest, TransportResponse};

/// Stream of events produced by a single request.
pub type TransportEventStream<'a> = BoxStream<'a, Result<TransportEvent, GatewayError>>;

/// This trait is used to perform the actual network exchange.
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library.
///
/// Only [`Transport::send`] is required. Transports which can report progress
/// should also override [`Transport::events`].
///
/// # Examples
/// ```
/// use http_gateway::core::{GatewayError, Transport, TransportRequest, TransportResponse};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///     async fn send(&self, req: TransportRequest) -> Result<TransportResponse, GatewayError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the full response.
    ///
    /// # Errors
    /// Should return an [`GatewayError::Transport`] if the request cannot be sent.
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, GatewayError>;

    /// Send a request and observe its progress.
    ///
    /// The stream is lazy: nothing is sent until it is polled. It yields zero
    /// or more progress events followed by a single
    /// [`TransportEvent::Response`], or a single error.
    ///
    /// The default implementation yields only the terminal event produced by
    /// [`Transport::send`].
    fn events<'a>(&'a self, req: TransportRequest) -> TransportEventStream<'a> {
        stream::once(async move { self.send(req).await.map(TransportEvent::Response) }).boxed()
    }
}
