//! HTTP gateway module
//!
//! This module contains the [`HttpGateway`] struct and its builders.
//! The gateway composes a [`Transport`], an optional [`GatewayConfig`] and a
//! [`Runtime`]; the interception entry points and the request builder are
//! implemented on top of it in the sibling modules.
//!
//! [`Transport`]: crate::core::Transport
//! [`Runtime`]: crate::core::Runtime

use std::{fmt::Debug, ops::Deref, sync::Arc};

use derive_builder::Builder;
use log::info;

#[cfg(feature = "tokio")]
use crate::providers::futures_tokio::RuntimeTokio;
#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

use crate::{
    core::{GatewayError, Headers, Runtime, Transport},
    dx::config::{self, GatewayConfig},
    transport::middleware::GatewayMiddleware,
};

/// HTTP gateway
///
/// Transport-agnostic interception layer. Any transport that implements the
/// [`Transport`] trait can be used.
///
/// Create gateways with [`HttpGatewayBuilder`]. The transport is wrapped into
/// [`GatewayMiddleware`] when it is selected.
///
/// # Examples
/// ```
/// use http_gateway::{GatewayConfigBuilder, HttpGatewayBuilder};
///
/// # fn main() -> Result<(), http_gateway::core::GatewayError> {
/// // note that `with_reqwest_transport` requires `reqwest` feature
/// // to be enabled (default)
/// let gateway = HttpGatewayBuilder::with_reqwest_transport()
///     .with_config(
///         GatewayConfigBuilder::default()
///             .with_url("https://api.example.com")
///             .build()?,
///     )
///     .build()?;
///
/// assert_eq!(gateway.base_url(), Some("https://api.example.com"));
/// # Ok(())
/// # }
/// ```
///
/// Using your own [`Transport`] implementation:
///
/// ```
/// use http_gateway::HttpGatewayBuilder;
/// # use http_gateway::core::{GatewayError, Transport, TransportRequest, TransportResponse};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, GatewayError> {
/// #         unimplemented!()
/// #     }
/// # }
///
/// # fn main() -> Result<(), GatewayError> {
/// let gateway = HttpGatewayBuilder::with_transport(MyTransport).build()?;
///
/// assert_eq!(gateway.base_url(), None);
/// # Ok(())
/// # }
/// ```
///
/// # Synchronization
///
/// Gateway is thread-safe and can be shared between threads. Cloning is cheap
/// because the state is wrapped in `Arc` and never mutated after build.
///
/// [`Transport`]: crate::core::Transport
pub struct HttpGateway<T> {
    pub(crate) inner: Arc<HttpGatewayRef<T>>,
}

impl<T> Deref for HttpGateway<T> {
    type Target = HttpGatewayRef<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> Clone for HttpGateway<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Debug for HttpGateway<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .finish()
    }
}

/// Gateway reference
///
/// This struct contains the actual gateway state.
/// It's wrapped in `Arc` by [`HttpGateway`].
///
/// Not intended to be used directly. Use [`HttpGateway`] instead.
#[derive(Builder)]
#[builder(
    pattern = "owned",
    name = "HttpGatewayConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct HttpGatewayRef<T> {
    /// Transport layer
    pub(crate) transport: T,

    /// Base URL and default headers
    #[builder(setter(strip_option), default = "None")]
    pub(crate) config: Option<GatewayConfig>,

    /// Runtime environment
    #[builder(setter(custom))]
    #[cfg_attr(feature = "tokio", builder(default = "Arc::new(RuntimeTokio)"))]
    pub(crate) runtime: Arc<dyn Runtime>,
}

impl<T> HttpGatewayRef<T> {
    /// Base URL which relative request addresses are resolved against.
    ///
    /// Returns `None` when there is no configuration or it has no URL, in
    /// which case callers are expected to use absolute addresses.
    pub fn base_url(&self) -> Option<&str> {
        config::base_url(self.config.as_ref())
    }

    /// Headers added to every request.
    ///
    /// Without configuration these are `Accept`, `Content-Type` and
    /// `DataType`, all set to `application/json`.
    pub fn default_headers(&self) -> Headers {
        config::default_headers(self.config.as_ref())
    }
}

impl<T> HttpGatewayConfigBuilder<T>
where
    T: Transport,
{
    /// Set runtime environment.
    ///
    /// The runtime provides timers for delayed mocked responses. With the
    /// `tokio` feature enabled it defaults to [`RuntimeTokio`].
    ///
    /// [`RuntimeTokio`]: crate::providers::futures_tokio::RuntimeTokio
    pub fn with_runtime<R>(mut self, runtime: R) -> Self
    where
        R: Runtime + 'static,
    {
        self.runtime = Some(Arc::new(runtime));
        self
    }
}

impl<T> HttpGatewayConfigBuilder<GatewayMiddleware<T>>
where
    T: Transport,
{
    /// Whether every request should carry a unique `X-Request-Id` header.
    ///
    /// Disabled by default.
    pub fn with_request_id(mut self, include_request_id: bool) -> Self {
        if let Some(transport) = self.transport.as_mut() {
            transport.include_request_id = include_request_id;
        }
        self
    }

    /// Build [`HttpGateway`].
    pub fn build(self) -> Result<HttpGateway<GatewayMiddleware<T>>, GatewayError> {
        self.build_internal()
            .map_err(|err| GatewayError::ClientInitialization {
                details: err.to_string(),
            })
            .map(|pre_build| {
                info!(
                    "Gateway Configuration: \n base_url: {:?}\n default_headers: {:?}\n request_id: {}",
                    config::base_url(pre_build.config.as_ref()),
                    config::default_headers(pre_build.config.as_ref()),
                    pre_build.transport.include_request_id
                );

                HttpGateway {
                    inner: Arc::new(pre_build),
                }
            })
    }
}

/// Gateway builder entry point.
///
/// Selects the transport and returns [`HttpGatewayConfigBuilder`] where the
/// configuration, runtime and request id behaviour can be set.
pub struct HttpGatewayBuilder;

impl HttpGatewayBuilder {
    /// Set the transport layer for the gateway.
    ///
    /// The transport is wrapped into [`GatewayMiddleware`].
    ///
    /// # Examples
    /// ```
    /// # use http_gateway::core::{GatewayError, Transport, TransportRequest, TransportResponse};
    /// use http_gateway::HttpGatewayBuilder;
    /// #
    /// # struct MyTransport;
    /// # #[async_trait::async_trait]
    /// # impl Transport for MyTransport {
    /// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, GatewayError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    ///
    /// # fn main() -> Result<(), GatewayError> {
    /// let gateway = HttpGatewayBuilder::with_transport(MyTransport)
    ///     .with_request_id(true)
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_transport<T>(transport: T) -> HttpGatewayConfigBuilder<GatewayMiddleware<T>>
    where
        T: Transport,
    {
        HttpGatewayConfigBuilder {
            transport: Some(GatewayMiddleware {
                transport,
                include_request_id: false,
            }),
            ..Default::default()
        }
    }

    /// Set [`TransportReqwest`] as the transport layer for the gateway.
    ///
    /// [`TransportReqwest`]: crate::transport::TransportReqwest
    #[cfg(feature = "reqwest")]
    pub fn with_reqwest_transport(
    ) -> HttpGatewayConfigBuilder<GatewayMiddleware<TransportReqwest>> {
        Self::with_transport(TransportReqwest::new())
    }
}
