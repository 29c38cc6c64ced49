//! Mocked responses.
//!
//! Replaces the real exchange with a synthetic `200` response whose body is
//! computed by a caller-supplied [`MockGenerator`].

use std::time::Duration;

use futures::{
    future,
    stream::{self, StreamExt},
};
use log::debug;

use crate::{
    core::{GatewayError, MockGenerator, TransportRequest, TransportResponse},
    dx::{interceptors::ResponseStream, HttpGateway},
};

/// Mocked response options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MockOptions {
    /// Time to wait before the mocked response is delivered.
    ///
    /// Zero delivers the response as soon as the stream is polled.
    pub delay: Duration,
}

impl MockOptions {
    /// Options with the given delivery delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl<T> HttpGateway<T> {
    /// Build a mocked response stream for `request`.
    ///
    /// Returns `None` when no `generator` is given, which means the caller
    /// should perform a real exchange instead.
    ///
    /// The generator is called right away. Its output becomes the body of a
    /// `200` response carrying the request headers. The stream yields that
    /// response after `options.delay` and completes; dropping it before the
    /// delay elapses cancels delivery. A generator error is yielded
    /// immediately without waiting for the delay.
    ///
    /// # Examples
    /// ```
    /// use futures::StreamExt;
    /// use http_gateway::{
    ///     core::{GatewayError, TransportRequest},
    ///     dx::MockOptions,
    ///     HttpGatewayBuilder,
    /// };
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GatewayError> {
    /// let gateway = HttpGatewayBuilder::with_reqwest_transport().build()?;
    /// let generator = |_: &TransportRequest| -> Result<Vec<u8>, GatewayError> {
    ///     Ok(br#"{"id":1}"#.to_vec())
    /// };
    ///
    /// let mut responses = gateway
    ///     .mockup_interceptor(&TransportRequest::default(), Some(&generator), MockOptions::default())
    ///     .unwrap();
    ///
    /// let response = responses.next().await.unwrap()?;
    /// assert_eq!(response.status, 200);
    /// assert_eq!(response.body, Some(br#"{"id":1}"#.to_vec()));
    /// # Ok(())
    /// # }
    /// ```
    pub fn mockup_interceptor(
        &self,
        request: &TransportRequest,
        generator: Option<&dyn MockGenerator>,
        options: MockOptions,
    ) -> Option<ResponseStream<'static>> {
        let generator = generator?;

        debug!(
            "Mocking {} {} with {:?} delay",
            request.method, request.url, options.delay
        );

        let response = match generator.generate(request) {
            Ok(body) => mocked_response(request, body),
            Err(error) => return Some(stream::once(future::ready(Err(error))).boxed()),
        };

        if options.delay.is_zero() {
            return Some(stream::once(future::ready(Ok(response))).boxed());
        }

        let runtime = self.runtime.clone();
        Some(
            stream::once(async move {
                runtime.sleep(options.delay).await;
                Ok::<_, GatewayError>(response)
            })
            .boxed(),
        )
    }
}

fn mocked_response(request: &TransportRequest, body: Vec<u8>) -> TransportResponse {
    TransportResponse {
        status: 200,
        headers: request.headers.clone(),
        body: Some(body),
    }
}
