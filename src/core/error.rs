//! # Error types
//!
//! This module contains the error types for the [`http_gateway`] crate.
//!
//! [`http_gateway`]: ../index.html

use snafu::Snafu;

use super::TransportResponse;

/// Gateway error type
///
/// Every failure of a call ends up as one of these variants. Interceptors
/// never swallow them: an error is forwarded either as is or after it has been
/// passed through the caller's [`ExceptionAdapter`].
///
/// # Examples
/// ```
/// use http_gateway::core::GatewayError;
///
/// fn foo() -> Result<(), GatewayError> {
///     Ok(())
/// }
///
/// foo().map_err(|e| match e {
///     GatewayError::Transport { .. } => println!("Transport error"),
///     GatewayError::ResponseAdapter { .. } => println!("Response adapter error"),
///     _ => println!("Other error"),
/// });
/// ```
///
/// [`ExceptionAdapter`]: crate::core::ExceptionAdapter
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// this error is returned when the transport layer fails or the service
    /// answers with a non-success status code
    #[snafu(display("Transport error: {details}"))]
    Transport {
        /// Human readable error details.
        details: String,

        /// Failed request HTTP response, when one has been received.
        response: Option<Box<TransportResponse>>,
    },

    /// this error is returned when a request adapter rejects the request
    #[snafu(display("Request adapter error: {details}"))]
    RequestAdapter {
        /// Human readable error details.
        details: String,
    },

    /// this error is returned when a response adapter fails to process the
    /// response
    #[snafu(display("Response adapter error: {details}"))]
    ResponseAdapter {
        /// Human readable error details.
        details: String,
    },

    /// this error is returned when the mock data generator fails
    #[snafu(display("Mock generator error: {details}"))]
    MockGenerator {
        /// Human readable error details.
        details: String,
    },

    /// this error is returned when the serialization of the request body fails
    #[snafu(display("Serialization error: {details}"))]
    Serialization {
        /// Human readable error details.
        details: String,
    },

    /// this error is returned when the deserialization of the response fails
    #[snafu(display("Deserialization error: {details}"))]
    Deserialization {
        /// Human readable error details.
        details: String,
    },

    /// this error is returned when the initialization of the gateway fails
    #[snafu(display("Gateway initialization error: {details}"))]
    ClientInitialization {
        /// Human readable error details.
        details: String,
    },

    /// this error is built by exception adapters which translate gateway
    /// errors into their own domain
    #[snafu(display("{details}"))]
    Custom {
        /// Human readable error details.
        details: String,
    },
}

impl GatewayError {
    /// Create transport error from the received non-success response.
    pub(crate) fn status_error(response: TransportResponse) -> Self {
        let details = match response.body.as_deref() {
            Some(body) if !body.is_empty() => format!(
                "HTTP {}: {}",
                response.status,
                String::from_utf8_lossy(body)
            ),
            _ => format!("HTTP {}", response.status),
        };

        GatewayError::Transport {
            details,
            response: Some(Box::new(response)),
        }
    }

    /// Retrieve attached service response.
    ///
    /// Only [`GatewayError::Transport`] errors caused by a non-success status
    /// code carry the response.
    pub fn transport_response(&self) -> Option<&TransportResponse> {
        match self {
            GatewayError::Transport {
                response: Some(response),
                ..
            } => Some(response),
            _ => None,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn render_details_in_display() {
        let error = GatewayError::RequestAdapter {
            details: "missing token".into(),
        };

        assert_eq!(error.to_string(), "Request adapter error: missing token");
    }

    #[test]
    fn attach_response_to_status_error() {
        let response = TransportResponse {
            status: 404,
            body: Some(b"not here".to_vec()),
            ..Default::default()
        };

        let error = GatewayError::status_error(response.clone());

        assert_eq!(error.to_string(), "Transport error: HTTP 404: not here");
        assert_eq!(error.transport_response(), Some(&response));
    }

    #[test]
    fn omit_empty_body_in_status_error() {
        let error = GatewayError::status_error(TransportResponse {
            status: 503,
            ..Default::default()
        });

        assert_eq!(error.to_string(), "Transport error: HTTP 503");
    }
}
