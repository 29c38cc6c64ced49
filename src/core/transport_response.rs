//! This module contains the `TransportResponse` struct.
//!
//! This struct is used to represent the response received through the
//! [`Transport`] or synthesized by a mock generator.
//!
//! [`Transport`]: ../transport/trait.Transport.html

use super::Headers;

/// This struct is used to represent the response to a [`TransportRequest`].
/// It is used as the response type for the [`Transport`] trait.
///
/// [`TransportRequest`]: ../transport_request/struct.TransportRequest.html
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// status code of the response
    pub status: u16,

    /// headers of the response
    pub headers: Headers,

    /// body of the response
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// Whether the status code is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
