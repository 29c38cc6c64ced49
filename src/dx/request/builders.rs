//! Request builders module.
//!
//! This module contains the [`GatewayRequestBuilder`] which composes the
//! interceptors into a single request call.

use std::{sync::Arc, time::Duration};

use futures::{future, stream, StreamExt, TryStreamExt};

#[cfg(feature = "serde")]
use crate::providers::deserialization_serde::DeserializerSerde;
use crate::{
    core::{
        adapter::map_exception, Adapter, Deserializer, ExceptionAdapter, GatewayError,
        HeaderValue, HeadersExt, MockGenerator, ResponseAdapter, Serialize, Transport,
        TransportEvent, TransportEventStream, TransportRequest, TransportResponse,
    },
    dx::{
        config::resolve_url,
        interceptors::{MockOptions, ResponseStream},
        HttpGateway,
    },
};

/// The [`GatewayRequestBuilder`] is used to describe and run a single call.
///
/// It is created by [`HttpGateway::request`] or one of its shorthands
/// ([`get`], [`post`], [`put`], [`patch`], [`delete`]).
///
/// A call goes through these steps:
///
/// 1. the address is resolved against the gateway base URL and the default
///    headers are added (headers set on the builder win),
/// 2. request adapters are applied with [`HttpGateway::request_interceptor`],
/// 3. the response is produced by the mock generator (when one has been set)
///    or by the transport, where non-`2xx` statuses become
///    [`GatewayError::Transport`] errors,
/// 4. the response goes through [`HttpGateway::response_interceptor`].
///
/// # Examples
/// ```no_run
/// use http_gateway::{core::TransportResponse, GatewayConfigBuilder, HttpGatewayBuilder};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = HttpGatewayBuilder::with_reqwest_transport()
///     .with_config(
///         GatewayConfigBuilder::default()
///             .with_url("https://api.example.com")
///             .build()?,
///     )
///     .build()?;
///
/// let response: TransportResponse = gateway
///     .get("users")
///     .query_parameter("page", "2")
///     .header("Authorization", "Bearer token")
///     .execute()
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// [`get`]: crate::dx::HttpGateway::get
/// [`post`]: crate::dx::HttpGateway::post
/// [`put`]: crate::dx::HttpGateway::put
/// [`patch`]: crate::dx::HttpGateway::patch
/// [`delete`]: crate::dx::HttpGateway::delete
pub struct GatewayRequestBuilder<T> {
    pub(super) gateway: HttpGateway<T>,
    pub(super) request: TransportRequest,
    pub(super) body_error: Option<GatewayError>,
    pub(super) request_adapters: Vec<Box<dyn Adapter<TransportRequest>>>,
    pub(super) response_adapters: Vec<Arc<dyn ResponseAdapter>>,
    pub(super) exception: Option<Arc<dyn ExceptionAdapter>>,
    pub(super) mock: Option<Box<dyn MockGenerator>>,
    pub(super) mock_options: MockOptions,
}

impl<T> GatewayRequestBuilder<T> {
    /// Append query parameter.
    ///
    /// Parameters are sent in the order they have been added.
    pub fn query_parameter<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.request
            .query_parameters
            .push((key.into(), value.into()));
        self
    }

    /// Set request header.
    ///
    /// Headers set here take precedence over the gateway default headers.
    pub fn header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<HeaderValue>,
    {
        self.request.headers.insert(name.into(), value.into());
        self
    }

    /// Set request body.
    ///
    /// A serialization failure is reported when the call is executed.
    pub fn body<B>(mut self, body: B) -> Self
    where
        B: Serialize,
    {
        match body.serialize() {
            Ok(bytes) => {
                self.request.body = Some(bytes);
                self.body_error = None;
            }
            Err(error) => self.body_error = Some(error),
        }
        self
    }

    /// Set already encoded request body.
    ///
    /// The bytes are sent as they are, without going through [`Serialize`].
    pub fn raw_body<B>(mut self, body: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        self.request.body = Some(body.into());
        self.body_error = None;
        self
    }

    /// Add request adapter.
    ///
    /// Adapters are applied in the order they have been added.
    pub fn request_adapter<A>(mut self, adapter: A) -> Self
    where
        A: Adapter<TransportRequest> + 'static,
    {
        self.request_adapters.push(Box::new(adapter));
        self
    }

    /// Add response adapter.
    ///
    /// Adapters are applied in the order they have been added, each one
    /// waiting for the previous one to finish.
    pub fn response_adapter<A>(mut self, adapter: A) -> Self
    where
        A: ResponseAdapter + 'static,
    {
        self.response_adapters.push(Arc::new(adapter));
        self
    }

    /// Set exception adapter which transforms every error of the call.
    pub fn exception_adapter<E>(mut self, exception: E) -> Self
    where
        E: ExceptionAdapter + 'static,
    {
        self.exception = Some(Arc::new(exception));
        self
    }

    /// Answer the call with data computed by `generator` instead of
    /// performing a real exchange.
    pub fn mock<G>(mut self, generator: G) -> Self
    where
        G: MockGenerator + 'static,
    {
        self.mock = Some(Box::new(generator));
        self
    }

    /// Delay delivery of the mocked response.
    ///
    /// Has no effect unless [`GatewayRequestBuilder::mock`] is set.
    pub fn mock_delay(mut self, delay: Duration) -> Self {
        self.mock_options.delay = delay;
        self
    }

    /// Build the request which would be handed to the transport.
    ///
    /// # Errors
    /// Returns the body serialization error or the first request adapter
    /// error, transformed by the exception adapter when one is set.
    pub fn prepare(&self) -> Result<TransportRequest, GatewayError> {
        if let Some(error) = &self.body_error {
            return Err(self.map_error(error.clone()));
        }

        let mut request = self.request.clone();
        request.url = resolve_url(self.gateway.base_url(), &request.url);
        request.headers.merge_defaults(&self.gateway.default_headers());

        let adapters = self
            .request_adapters
            .iter()
            .map(Box::as_ref)
            .collect::<Vec<&dyn Adapter<TransportRequest>>>();

        self.gateway
            .request_interceptor(request, &adapters, self.exception.as_deref())
    }

    fn map_error(&self, error: GatewayError) -> GatewayError {
        map_exception(error, self.exception.as_deref())
    }
}

impl<T> GatewayRequestBuilder<T>
where
    T: Transport,
{
    /// Run the call and observe its response.
    ///
    /// The stream is lazy: nothing runs until it is polled for the first
    /// time. It yields at most one item. Dropping it cancels the call,
    /// including a pending mock delay.
    pub fn stream(&self) -> ResponseStream<'_> {
        stream::once(async move {
            let request = match self.prepare() {
                Ok(request) => request,
                Err(error) => {
                    let failed: ResponseStream<'_> = stream::once(future::ready(Err(error))).boxed();
                    return failed;
                }
            };

            let mocked =
                self.gateway
                    .mockup_interceptor(&request, self.mock.as_deref(), self.mock_options);

            let events: TransportEventStream<'_> = match mocked {
                Some(responses) => responses.map_ok(TransportEvent::Response).boxed(),
                None => self
                    .gateway
                    .transport
                    .events(request)
                    .map(|event| match event {
                        Ok(TransportEvent::Response(response)) if !response.is_success() => {
                            Err(GatewayError::status_error(response))
                        }
                        event => event,
                    })
                    .boxed(),
            };

            self.gateway.response_interceptor(
                events,
                self.response_adapters.clone(),
                self.exception.clone(),
            )
        })
        .flatten()
        .boxed()
    }

    /// Execute the call and return the final response.
    ///
    /// # Errors
    /// Returns a [`GatewayError::Transport`] when the call finished without
    /// a response. Every other error comes from the interceptors.
    pub async fn execute(self) -> Result<TransportResponse, GatewayError> {
        match self.stream().next().await {
            Some(result) => result,
            None => Err(self.map_error(GatewayError::Transport {
                details: "no response".into(),
                response: None,
            })),
        }
    }

    /// Execute the call and deserialize the final response body with
    /// `deserializer`.
    ///
    /// An empty body is handed over to the deserializer as an empty slice.
    pub async fn execute_with<R, D>(self, deserializer: D) -> Result<R, GatewayError>
    where
        D: Deserializer<R>,
    {
        let exception = self.exception.clone();
        let response = self.execute().await?;

        deserializer
            .deserialize(response.body.as_deref().unwrap_or_default())
            .map_err(|error| map_exception(error, exception.as_deref()))
    }

    /// Execute the call and deserialize the final JSON response body.
    ///
    /// # Examples
    /// ```no_run
    /// use http_gateway::HttpGatewayBuilder;
    ///
    /// #[derive(serde::Deserialize)]
    /// struct User {
    ///     id: u64,
    /// }
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let gateway = HttpGatewayBuilder::with_reqwest_transport().build()?;
    ///
    /// let user: User = gateway
    ///     .get("https://api.example.com/users/1")
    ///     .execute_json()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "serde")]
    pub async fn execute_json<R>(self) -> Result<R, GatewayError>
    where
        R: serde::de::DeserializeOwned,
    {
        self.execute_with(DeserializerSerde).await
    }
}
