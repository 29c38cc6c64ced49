//! Request module.
//!
//! Entry point for complete calls. The [`GatewayRequestBuilder`] combines
//! the request, mock and response interceptors the way most callers need
//! them.
//!
//! [`GatewayRequestBuilder`]: crate::dx::request::GatewayRequestBuilder

#[doc(inline)]
pub use builders::GatewayRequestBuilder;
pub mod builders;

use crate::{
    core::{TransportMethod, TransportRequest},
    dx::HttpGateway,
};

impl<T> HttpGateway<T> {
    /// Create a new request builder.
    ///
    /// `url` is either absolute or relative to the configured base URL.
    ///
    /// # Example
    /// ```
    /// use http_gateway::{core::TransportMethod, HttpGatewayBuilder};
    ///
    /// # fn main() -> Result<(), http_gateway::core::GatewayError> {
    /// let gateway = HttpGatewayBuilder::with_reqwest_transport().build()?;
    ///
    /// let request = gateway
    ///     .request(TransportMethod::Head, "https://api.example.com/health")
    ///     .prepare()?;
    ///
    /// assert_eq!(request.method, TransportMethod::Head);
    /// # Ok(())
    /// # }
    /// ```
    pub fn request<S>(&self, method: TransportMethod, url: S) -> GatewayRequestBuilder<T>
    where
        S: Into<String>,
    {
        GatewayRequestBuilder {
            gateway: self.clone(),
            request: TransportRequest {
                method,
                url: url.into(),
                ..Default::default()
            },
            body_error: None,
            request_adapters: Vec::new(),
            response_adapters: Vec::new(),
            exception: None,
            mock: None,
            mock_options: Default::default(),
        }
    }

    /// Create a new `GET` request builder.
    pub fn get<S>(&self, url: S) -> GatewayRequestBuilder<T>
    where
        S: Into<String>,
    {
        self.request(TransportMethod::Get, url)
    }

    /// Create a new `POST` request builder.
    pub fn post<S>(&self, url: S) -> GatewayRequestBuilder<T>
    where
        S: Into<String>,
    {
        self.request(TransportMethod::Post, url)
    }

    /// Create a new `PUT` request builder.
    pub fn put<S>(&self, url: S) -> GatewayRequestBuilder<T>
    where
        S: Into<String>,
    {
        self.request(TransportMethod::Put, url)
    }

    /// Create a new `PATCH` request builder.
    pub fn patch<S>(&self, url: S) -> GatewayRequestBuilder<T>
    where
        S: Into<String>,
    {
        self.request(TransportMethod::Patch, url)
    }

    /// Create a new `DELETE` request builder.
    pub fn delete<S>(&self, url: S) -> GatewayRequestBuilder<T>
    where
        S: Into<String>,
    {
        self.request(TransportMethod::Delete, url)
    }
}
