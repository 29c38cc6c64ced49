//! Request interception.
//!
//! Request adapters are applied as a left fold in the order they were given.
//! The first failing adapter stops the fold and its error is passed through
//! the exception adapter, when one is present.

use log::debug;

use crate::{
    core::{
        adapter::map_exception, Adapter, ExceptionAdapter, GatewayError, SyncRequest,
        TransportRequest,
    },
    dx::HttpGateway,
};

impl<T> HttpGateway<T> {
    /// Apply request adapters to `request`.
    ///
    /// The output equals `an(...a2(a1(request))...)`. With no adapters the
    /// request is returned unchanged.
    ///
    /// # Errors
    /// Returns the first adapter error, transformed by `exception` when one
    /// is present.
    ///
    /// # Examples
    /// ```
    /// use http_gateway::{
    ///     core::{Adapter, GatewayError, TransportRequest},
    ///     HttpGatewayBuilder,
    /// };
    ///
    /// # fn main() -> Result<(), GatewayError> {
    /// let gateway = HttpGatewayBuilder::with_reqwest_transport().build()?;
    /// let paginate = |mut request: TransportRequest| -> Result<TransportRequest, GatewayError> {
    ///     request.query_parameters.push(("page".into(), "1".into()));
    ///     Ok(request)
    /// };
    /// let adapters: Vec<&dyn Adapter<TransportRequest>> = vec![&paginate];
    ///
    /// let request = gateway.request_interceptor(TransportRequest::default(), &adapters, None)?;
    ///
    /// assert_eq!(request.full_url(), "?page=1");
    /// # Ok(())
    /// # }
    /// ```
    pub fn request_interceptor(
        &self,
        request: TransportRequest,
        adapters: &[&dyn Adapter<TransportRequest>],
        exception: Option<&dyn ExceptionAdapter>,
    ) -> Result<TransportRequest, GatewayError> {
        debug!(
            "Applying {} request adapter(s) to {} {}",
            adapters.len(),
            request.method,
            request.url
        );

        fold(request, adapters, exception)
    }

    /// Apply request adapters to plain string request parts.
    ///
    /// Same contract as [`HttpGateway::request_interceptor`], for request
    /// paths which deal with already serialized bodies and query strings.
    ///
    /// # Errors
    /// Returns the first adapter error, transformed by `exception` when one
    /// is present.
    pub fn request_interceptor_sync<B, U, Q>(
        &self,
        body: B,
        url: U,
        query_args: Q,
        adapters: &[&dyn Adapter<SyncRequest>],
        exception: Option<&dyn ExceptionAdapter>,
    ) -> Result<SyncRequest, GatewayError>
    where
        B: Into<String>,
        U: Into<String>,
        Q: Into<String>,
    {
        fold(SyncRequest::new(body, url, query_args), adapters, exception)
    }
}

fn fold<P>(
    payload: P,
    adapters: &[&dyn Adapter<P>],
    exception: Option<&dyn ExceptionAdapter>,
) -> Result<P, GatewayError> {
    adapters
        .iter()
        .try_fold(payload, |payload, adapter| adapter.adapt(payload))
        .map_err(|error| map_exception(error, exception))
}
