//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to perform requests with the [`reqwest`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`reqwest` feature]: ../index.html#features

use bytes::Bytes;
use futures::{stream, StreamExt};
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue as ReqwestHeaderValue},
    Method, StatusCode,
};

use crate::core::{
    GatewayError, HeaderValue, Headers, Transport, TransportEvent, TransportEventStream,
    TransportMethod, TransportRequest, TransportResponse,
};

/// This struct is used to perform requests with the [`reqwest`] crate.
/// It is used as the default transport type for the [`HttpGateway`].
///
/// Request addresses are expected to be absolute. The gateway resolves
/// relative ones against its base URL before they reach the transport.
///
/// [`reqwest`]: https://docs.rs/reqwest
/// [`HttpGateway`]: crate::dx::HttpGateway
#[derive(Clone, Debug, Default)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,
}

enum EventsState<'a> {
    Prepare(&'a TransportReqwest, TransportRequest),
    Send(reqwest::RequestBuilder),
    Receive {
        response: reqwest::Response,
        status: StatusCode,
        headers: Headers,
        body: Vec<u8>,
        total: Option<u64>,
    },
    Done,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, GatewayError> {
        let builder = self.prepare_request(request)?;

        let result = builder.send().await.map_err(transport_error)?;

        let status = result.status();
        let headers = convert_headers(result.headers());
        result
            .bytes()
            .await
            .map_err(transport_error)
            .map(|bytes| create_result(status, headers, bytes))
    }

    fn events<'a>(&'a self, request: TransportRequest) -> TransportEventStream<'a> {
        stream::unfold(EventsState::Prepare(self, request), |state| async move {
            match state {
                EventsState::Prepare(transport, request) => {
                    match transport.prepare_request(request) {
                        Ok(builder) => Some((Ok(TransportEvent::Sent), EventsState::Send(builder))),
                        Err(error) => Some((Err(error), EventsState::Done)),
                    }
                }
                EventsState::Send(builder) => match builder.send().await {
                    Ok(response) => {
                        let status = response.status();
                        let headers = convert_headers(response.headers());
                        let total = response.content_length();
                        let event = TransportEvent::ResponseHeader {
                            status: status.as_u16(),
                            headers: headers.clone(),
                        };

                        Some((
                            Ok(event),
                            EventsState::Receive {
                                response,
                                status,
                                headers,
                                body: Vec::new(),
                                total,
                            },
                        ))
                    }
                    Err(error) => Some((Err(transport_error(error)), EventsState::Done)),
                },
                EventsState::Receive {
                    mut response,
                    status,
                    headers,
                    mut body,
                    total,
                } => match response.chunk().await {
                    Ok(Some(chunk)) => {
                        body.extend_from_slice(&chunk);
                        let event = TransportEvent::DownloadProgress {
                            loaded: body.len() as u64,
                            total,
                        };

                        Some((
                            Ok(event),
                            EventsState::Receive {
                                response,
                                status,
                                headers,
                                body,
                                total,
                            },
                        ))
                    }
                    Ok(None) => {
                        debug!("Received {} bytes with status {}", body.len(), status);
                        let response = create_result(status, headers, Bytes::from(body));
                        Some((Ok(TransportEvent::Response(response)), EventsState::Done))
                    }
                    Err(error) => Some((Err(transport_error(error)), EventsState::Done)),
                },
                EventsState::Done => None,
            }
        })
        .boxed()
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using [`reqwest::Client::default()`].
    ///
    /// # Example
    /// ```
    /// use http_gateway::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`TransportReqwest`] instance which uses a preconfigured
    /// [`reqwest::Client`] (timeouts, proxies, TLS settings).
    pub fn with_client(reqwest_client: reqwest::Client) -> Self {
        Self { reqwest_client }
    }

    fn prepare_request(
        &self,
        request: TransportRequest,
    ) -> Result<reqwest::RequestBuilder, GatewayError> {
        let request_url = request.full_url();
        debug!("Sending {} {}", request.method, request_url);
        let headers = prepare_headers(&request.headers)?;

        let builder = self
            .reqwest_client
            .request(prepare_method(request.method), request_url)
            .headers(headers);

        Ok(match request.body {
            Some(body) => builder.body(body),
            None => builder,
        })
    }
}

fn prepare_method(method: TransportMethod) -> Method {
    match method {
        TransportMethod::Get => Method::GET,
        TransportMethod::Post => Method::POST,
        TransportMethod::Put => Method::PUT,
        TransportMethod::Patch => Method::PATCH,
        TransportMethod::Delete => Method::DELETE,
        TransportMethod::Head => Method::HEAD,
        TransportMethod::Options => Method::OPTIONS,
    }
}

fn prepare_headers(request_headers: &Headers) -> Result<HeaderMap, GatewayError> {
    let mut headers = HeaderMap::with_capacity(request_headers.len());

    for (name, value) in request_headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            GatewayError::Transport {
                details: format!("Invalid header name {name:?}: {err}"),
                response: None,
            }
        })?;

        for value in value.values() {
            let value = ReqwestHeaderValue::from_str(value).map_err(|err| {
                GatewayError::Transport {
                    details: format!("Invalid value for header {name}: {err}"),
                    response: None,
                }
            })?;
            headers.append(name.clone(), value);
        }
    }

    Ok(headers)
}

fn convert_headers(response_headers: &HeaderMap) -> Headers {
    let mut headers = Headers::with_capacity(response_headers.keys_len());

    for (name, value) in response_headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match headers.get_mut(name.as_str()) {
            Some(current) => current.push(value),
            None => {
                headers.insert(name.as_str().into(), HeaderValue::from(value));
            }
        }
    }

    headers
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::Transport {
        details: error.to_string(),
        response: None,
    }
}

fn create_result(status: StatusCode, headers: Headers, body: Bytes) -> TransportResponse {
    TransportResponse {
        status: status.as_u16(),
        headers,
        body: (!body.is_empty()).then(|| body.to_vec()),
    }
}
