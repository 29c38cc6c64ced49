//! # Gateway middleware
//!
//! Decorates any [`Transport`] with the headers the gateway adds to every
//! outgoing request.

use log::info;
use uuid::Uuid;

use crate::core::{
    utils::headers::{REQUEST_ID, USER_AGENT},
    GatewayError, HeaderValue, HeadersExt, Transport, TransportEventStream, TransportRequest,
    TransportResponse,
};

/// `User-Agent` value used when the request doesn't provide one.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transport wrapper used by [`HttpGateway`].
///
/// Adds a unique `X-Request-Id` header (when enabled) and a `User-Agent`
/// header (when the request has none) before handing the request over to the
/// wrapped transport.
///
/// [`HttpGateway`]: crate::dx::HttpGateway
#[derive(Debug)]
pub struct GatewayMiddleware<T> {
    /// Wrapped transport.
    pub transport: T,

    /// Whether to add `X-Request-Id` header to every request.
    pub include_request_id: bool,
}

impl<T> GatewayMiddleware<T> {
    fn prepare(&self, mut req: TransportRequest) -> TransportRequest {
        if self.include_request_id && !req.headers.contains_ignore_case(REQUEST_ID) {
            req.headers.insert(
                REQUEST_ID.into(),
                HeaderValue::from(Uuid::new_v4().to_string()),
            );
        }

        if !req.headers.contains_ignore_case(USER_AGENT) {
            req.headers
                .insert(USER_AGENT.into(), HeaderValue::from(DEFAULT_USER_AGENT));
        }

        info!("{} {}", req.method, req.full_url());
        req
    }
}

#[async_trait::async_trait]
impl<T> Transport for GatewayMiddleware<T>
where
    T: Transport,
{
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, GatewayError> {
        self.transport.send(self.prepare(req)).await
    }

    fn events<'a>(&'a self, req: TransportRequest) -> TransportEventStream<'a> {
        self.transport.events(self.prepare(req))
    }
}
