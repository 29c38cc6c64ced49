//! Response interception.
//!
//! The streaming path turns a transport event stream into a stream with at
//! most one item:
//!
//! 1. progress events are dropped and only the first terminal response is
//!    kept,
//! 2. an error is passed through the exception adapter (when present),
//! 3. the response is fed through the response adapters one at a time.
//!
//! Nothing runs until the returned stream is polled and dropping it stops the
//! pipeline wherever it is.

use std::sync::Arc;

use futures::{
    future,
    stream::{BoxStream, Stream},
    StreamExt, TryStreamExt,
};
use log::{debug, warn};

use crate::{
    core::{
        adapter::map_exception, Adapter, AdapterContext, ExceptionAdapter, GatewayError,
        ResponseAdapter, TransportEvent, TransportResponse,
    },
    dx::HttpGateway,
};

/// Single-response stream returned by the streaming interceptors.
pub type ResponseStream<'a> = BoxStream<'a, Result<TransportResponse, GatewayError>>;

impl<T> HttpGateway<T> {
    /// Intercept transport `events`.
    ///
    /// The returned stream yields exactly one item for a source which
    /// contains a terminal [`TransportEvent::Response`] or an error, and then
    /// completes. A source which completes without either yields nothing.
    ///
    /// Response adapters run in order, each one awaiting the previous
    /// adapter's output. Transport and adapter errors are passed through
    /// `exception` once, when it is present, and re-raised as the error item.
    ///
    /// # Examples
    /// ```
    /// use futures::{stream, StreamExt};
    /// use http_gateway::{
    ///     core::{AdapterContext, GatewayError, TransportEvent, TransportResponse},
    ///     HttpGatewayBuilder,
    /// };
    /// use std::sync::Arc;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GatewayError> {
    /// let gateway = HttpGatewayBuilder::with_reqwest_transport().build()?;
    /// let events = stream::iter(vec![
    ///     Ok(TransportEvent::Sent),
    ///     Ok(TransportEvent::Response(TransportResponse {
    ///         status: 200,
    ///         body: Some(b"ok".to_vec()),
    ///         ..Default::default()
    ///     })),
    /// ]);
    /// let shout = |mut response: TransportResponse, _: AdapterContext| async move {
    ///     response.body = response.body.map(|body| body.to_ascii_uppercase());
    ///     Ok::<_, GatewayError>(response)
    /// };
    ///
    /// let mut responses = gateway.response_interceptor(events, vec![Arc::new(shout)], None);
    ///
    /// let response = responses.next().await.unwrap()?;
    /// assert_eq!(response.body, Some(b"OK".to_vec()));
    /// assert!(responses.next().await.is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub fn response_interceptor<'a, S>(
        &self,
        events: S,
        adapters: Vec<Arc<dyn ResponseAdapter>>,
        exception: Option<Arc<dyn ExceptionAdapter>>,
    ) -> ResponseStream<'a>
    where
        S: Stream<Item = Result<TransportEvent, GatewayError>> + Send + 'a,
    {
        let context = AdapterContext::new(exception);
        let error_context = context.clone();

        events
            .try_filter_map(|event| future::ready(Ok(event.into_response())))
            .take(1)
            .map_err(move |error| {
                warn!("Response failed: {error}");
                error_context.map_error(error)
            })
            .and_then(move |response| {
                apply_response_adapters(response, adapters.clone(), context.clone())
            })
            .boxed()
    }

    /// Apply an optional `adapter` to an already received `body`.
    ///
    /// # Errors
    /// Returns the adapter error, transformed by `exception` when one is
    /// present.
    pub fn response_interceptor_sync<P>(
        &self,
        body: P,
        adapter: Option<&dyn Adapter<P>>,
        exception: Option<&dyn ExceptionAdapter>,
    ) -> Result<P, GatewayError> {
        match adapter {
            Some(adapter) => adapter
                .adapt(body)
                .map_err(|error| map_exception(error, exception)),
            None => Ok(body),
        }
    }
}

async fn apply_response_adapters(
    mut response: TransportResponse,
    adapters: Vec<Arc<dyn ResponseAdapter>>,
    context: AdapterContext,
) -> Result<TransportResponse, GatewayError> {
    debug!(
        "Applying {} response adapter(s) to {} response",
        adapters.len(),
        response.status
    );

    for (position, adapter) in adapters.iter().enumerate() {
        response = adapter
            .adapt(response, context.at(position))
            .await
            .map_err(|error| context.map_error(error))?;
    }

    Ok(response)
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::dx::gateway::should::gateway;
    use futures::{channel::mpsc, stream};
    use std::{
        sync::Mutex,
        task::Poll,
        time::Duration,
    };

    fn response(body: &str) -> TransportResponse {
        TransportResponse {
            status: 200,
            body: Some(body.as_bytes().to_vec()),
            ..Default::default()
        }
    }

    fn append(suffix: &'static str) -> Arc<dyn ResponseAdapter> {
        Arc::new(move |mut response: TransportResponse, _: AdapterContext| async move {
            if let Some(body) = response.body.as_mut() {
                body.extend_from_slice(suffix.as_bytes());
            }
            Ok::<_, GatewayError>(response)
        })
    }

    fn to_custom(error: GatewayError) -> GatewayError {
        GatewayError::Custom {
            details: format!("custom: {error}"),
        }
    }

    fn transport_error() -> GatewayError {
        GatewayError::Transport {
            details: "connection reset".into(),
            response: None,
        }
    }

    fn progress(count: usize) -> Vec<Result<TransportEvent, GatewayError>> {
        let mut events = vec![Ok(TransportEvent::Sent)];
        events.extend((0..count).map(|loaded| {
            Ok(TransportEvent::DownloadProgress {
                loaded: loaded as u64,
                total: None,
            })
        }));
        events
    }

    #[tokio::test]
    async fn emit_only_terminal_response() {
        for count in [0, 1, 5] {
            let mut events = progress(count);
            events.push(Ok(TransportEvent::Response(response("done"))));

            let items = gateway(None)
                .response_interceptor(stream::iter(events), vec![], None)
                .collect::<Vec<_>>()
                .await;

            assert_eq!(items, vec![Ok(response("done"))]);
        }
    }

    #[tokio::test]
    async fn complete_empty_without_terminal_event() {
        let items = gateway(None)
            .response_interceptor(stream::iter(progress(3)), vec![], None)
            .collect::<Vec<_>>()
            .await;

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn stop_polling_source_after_terminal_event() {
        let events = stream::iter(vec![
            Ok(TransportEvent::Response(response("first"))),
            Ok(TransportEvent::Response(response("second"))),
        ]);

        let items = gateway(None)
            .response_interceptor(events, vec![], None)
            .collect::<Vec<_>>()
            .await;

        assert_eq!(items, vec![Ok(response("first"))]);
    }

    #[tokio::test]
    async fn apply_adapters_in_order() {
        let events = stream::iter(vec![Ok(TransportEvent::Response(response("body")))]);

        let items = gateway(None)
            .response_interceptor(events, vec![append("-a"), append("-b"), append("-c")], None)
            .collect::<Vec<_>>()
            .await;

        assert_eq!(items, vec![Ok(response("body-a-b-c"))]);
    }

    #[tokio::test]
    async fn wait_for_previous_adapter_before_next_one() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let slow_log = log.clone();
        let fast_log = log.clone();
        let slow = move |response: TransportResponse, context: AdapterContext| {
            let log = slow_log.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                log.lock().unwrap().push(("slow", context.position()));
                Ok::<_, GatewayError>(response)
            }
        };
        let fast = move |response: TransportResponse, context: AdapterContext| {
            let log = fast_log.clone();
            async move {
                log.lock().unwrap().push(("fast", context.position()));
                Ok::<_, GatewayError>(response)
            }
        };
        let events = stream::iter(vec![Ok(TransportEvent::Response(response("x")))]);

        let _ = gateway(None)
            .response_interceptor(events, vec![Arc::new(slow), Arc::new(fast)], None)
            .collect::<Vec<_>>()
            .await;

        assert_eq!(*log.lock().unwrap(), vec![("slow", 0), ("fast", 1)]);
    }

    #[tokio::test]
    async fn reraise_transport_error_unchanged_without_exception_adapter() {
        let mut events = progress(2);
        events.push(Err(transport_error()));

        let items = gateway(None)
            .response_interceptor(stream::iter(events), vec![append("-a")], None)
            .collect::<Vec<_>>()
            .await;

        assert_eq!(items, vec![Err(transport_error())]);
    }

    #[tokio::test]
    async fn reraise_transformed_transport_error() {
        let events = stream::iter(vec![Err(transport_error())]);

        let items = gateway(None)
            .response_interceptor(events, vec![], Some(Arc::new(to_custom)))
            .collect::<Vec<_>>()
            .await;

        assert_eq!(
            items,
            vec![Err(GatewayError::Custom {
                details: "custom: Transport error: connection reset".into()
            })]
        );
    }

    #[tokio::test]
    async fn transform_adapter_error_once() {
        let failing = |_: TransportResponse, _: AdapterContext| async move {
            Err::<TransportResponse, _>(GatewayError::ResponseAdapter {
                details: "invalid body".into(),
            })
        };
        let events = stream::iter(vec![Ok(TransportEvent::Response(response("x")))]);

        let items = gateway(None)
            .response_interceptor(
                events,
                vec![Arc::new(failing), append("-never")],
                Some(Arc::new(to_custom)),
            )
            .collect::<Vec<_>>()
            .await;

        assert_eq!(
            items,
            vec![Err(GatewayError::Custom {
                details: "custom: Response adapter error: invalid body".into()
            })]
        );
    }

    #[tokio::test]
    async fn stay_idle_until_polled_and_stop_when_dropped() {
        let (sender, receiver) = mpsc::unbounded();
        let called = Arc::new(Mutex::new(false));
        let adapter_called = called.clone();
        let adapter = move |response: TransportResponse, _: AdapterContext| {
            *adapter_called.lock().unwrap() = true;
            future::ready(Ok::<_, GatewayError>(response))
        };

        let mut responses = gateway(None).response_interceptor(receiver, vec![Arc::new(adapter)], None);
        sender.unbounded_send(Ok(TransportEvent::Sent)).unwrap();

        let poll = futures::poll!(responses.next());
        assert!(matches!(poll, Poll::Pending));

        drop(responses);
        assert!(sender
            .unbounded_send(Ok(TransportEvent::Response(response("late"))))
            .is_err());
        assert!(!*called.lock().unwrap());
    }

    #[test]
    fn return_body_unchanged_without_adapter() {
        let result = gateway(None).response_interceptor_sync(42, None, None);

        assert_eq!(result, Ok(42));
    }

    #[test]
    fn apply_single_sync_adapter() {
        let double = |value: i32| -> Result<i32, GatewayError> { Ok(value * 2) };

        let result = gateway(None).response_interceptor_sync(21, Some(&double), None);

        assert_eq!(result, Ok(42));
    }

    #[test]
    fn reraise_sync_adapter_error_unchanged_without_exception_adapter() {
        let fail = |_: String| -> Result<String, GatewayError> {
            Err(GatewayError::ResponseAdapter {
                details: "thrown".into(),
            })
        };

        let result = gateway(None).response_interceptor_sync("body".to_string(), Some(&fail), None);

        assert_eq!(
            result,
            Err(GatewayError::ResponseAdapter {
                details: "thrown".into()
            })
        );
    }

    #[test]
    fn transform_sync_adapter_error() {
        let fail = |_: String| -> Result<String, GatewayError> {
            Err(GatewayError::ResponseAdapter {
                details: "thrown".into(),
            })
        };

        let result = gateway(None).response_interceptor_sync(
            "body".to_string(),
            Some(&fail),
            Some(&to_custom),
        );

        assert!(matches!(result, Err(GatewayError::Custom { .. })));
    }
}
