//! # Adapters
//!
//! Caller-supplied hooks applied by the gateway interceptors:
//!
//! * [`Adapter`] for synchronous payload transformation of requests and
//!   synchronous responses,
//! * [`ResponseAdapter`] for asynchronous response transformation,
//! * [`ExceptionAdapter`] for error transformation,
//! * [`MockGenerator`] for synthetic response payloads.
//!
//! Every trait is implemented for plain closures with a matching signature,
//! so most callers never implement them by hand.

use std::{fmt::Debug, future::Future, sync::Arc};

use super::{GatewayError, TransportRequest, TransportResponse};

/// Synchronous payload transformation.
///
/// Receives the current payload and returns the next one. Adapters are chained
/// as a left fold: the output of one is the input of the next.
///
/// # Examples
/// ```
/// use http_gateway::core::{Adapter, GatewayError, TransportRequest};
///
/// let adapter = |mut request: TransportRequest| -> Result<TransportRequest, GatewayError> {
///     request.query_parameters.push(("page".into(), "1".into()));
///     Ok(request)
/// };
///
/// let request = adapter.adapt(TransportRequest::default()).unwrap();
/// assert_eq!(request.query_parameters.len(), 1);
/// ```
pub trait Adapter<P>: Send + Sync {
    /// Transform payload.
    fn adapt(&self, payload: P) -> Result<P, GatewayError>;
}

impl<P, F> Adapter<P> for F
where
    F: Fn(P) -> Result<P, GatewayError> + Send + Sync,
{
    fn adapt(&self, payload: P) -> Result<P, GatewayError> {
        self(payload)
    }
}

/// Asynchronous response transformation.
///
/// Response adapters run one after another once the full response has been
/// received. Each one waits for the previous adapter's output.
///
/// # Examples
/// ```
/// use http_gateway::core::{AdapterContext, GatewayError, ResponseAdapter, TransportResponse};
///
/// let uppercase = |mut response: TransportResponse, _context: AdapterContext| async move {
///     response.body = response.body.map(|body| body.to_ascii_uppercase());
///     Ok::<_, GatewayError>(response)
/// };
/// # let _: &dyn ResponseAdapter = &uppercase;
/// ```
#[async_trait::async_trait]
pub trait ResponseAdapter: Send + Sync {
    /// Transform response.
    async fn adapt(
        &self,
        response: TransportResponse,
        context: AdapterContext,
    ) -> Result<TransportResponse, GatewayError>;
}

#[async_trait::async_trait]
impl<F, Fut> ResponseAdapter for F
where
    F: Fn(TransportResponse, AdapterContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<TransportResponse, GatewayError>> + Send,
{
    async fn adapt(
        &self,
        response: TransportResponse,
        context: AdapterContext,
    ) -> Result<TransportResponse, GatewayError> {
        self(response, context).await
    }
}

/// Error transformation.
///
/// Applied to transport and adapter errors before they reach the caller.
pub trait ExceptionAdapter: Send + Sync {
    /// Transform error.
    fn adapt(&self, error: GatewayError) -> GatewayError;
}

impl<F> ExceptionAdapter for F
where
    F: Fn(GatewayError) -> GatewayError + Send + Sync,
{
    fn adapt(&self, error: GatewayError) -> GatewayError {
        self(error)
    }
}

/// Mock response payload generator.
///
/// Computes the body of a synthetic `200` response for the request instead of
/// performing a real exchange.
pub trait MockGenerator: Send + Sync {
    /// Generate response body for `request`.
    fn generate(&self, request: &TransportRequest) -> Result<Vec<u8>, GatewayError>;
}

impl<F> MockGenerator for F
where
    F: Fn(&TransportRequest) -> Result<Vec<u8>, GatewayError> + Send + Sync,
{
    fn generate(&self, request: &TransportRequest) -> Result<Vec<u8>, GatewayError> {
        self(request)
    }
}

/// Pass `error` through `exception` when one is present.
pub(crate) fn map_exception(
    error: GatewayError,
    exception: Option<&dyn ExceptionAdapter>,
) -> GatewayError {
    match exception {
        Some(exception) => exception.adapt(error),
        None => error,
    }
}

/// State shared with response adapters during a single call.
#[derive(Clone, Default)]
pub struct AdapterContext {
    /// Zero-based position of the adapter in the chain.
    pub(crate) position: usize,

    /// Exception adapter active for the call.
    pub(crate) exception: Option<Arc<dyn ExceptionAdapter>>,
}

impl AdapterContext {
    pub(crate) fn new(exception: Option<Arc<dyn ExceptionAdapter>>) -> Self {
        Self {
            position: 0,
            exception,
        }
    }

    pub(crate) fn at(&self, position: usize) -> Self {
        Self {
            position,
            exception: self.exception.clone(),
        }
    }

    /// Zero-based position of the running adapter in the chain.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether an exception adapter has been configured for the call.
    pub fn has_exception_adapter(&self) -> bool {
        self.exception.is_some()
    }

    /// Pass `error` through the call's exception adapter.
    ///
    /// Errors returned from a response adapter are transformed by the
    /// pipeline. Use this only for errors which an adapter reports some other
    /// way, e.g. inside the response body.
    pub fn map_error(&self, error: GatewayError) -> GatewayError {
        map_exception(error, self.exception.as_deref())
    }
}

impl Debug for AdapterContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterContext")
            .field("position", &self.position)
            .field("exception", &self.exception.is_some())
            .finish()
    }
}
