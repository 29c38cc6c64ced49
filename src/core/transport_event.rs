//! # Transport events
//!
//! A request sent with [`Transport::events`] is observed as a sequence of
//! [`TransportEvent`]s: zero or more progress events followed by a single
//! terminal [`TransportEvent::Response`].
//!
//! [`Transport::events`]: crate::core::Transport::events

use super::{Headers, TransportResponse};

/// Event observed while a request is in flight.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TransportEvent {
    /// Request has been handed to the network.
    Sent,

    /// Part of the request body has been uploaded.
    UploadProgress {
        /// Bytes uploaded so far.
        loaded: u64,

        /// Total body size, when known.
        total: Option<u64>,
    },

    /// Status line and headers have been received.
    ResponseHeader {
        /// Response status code.
        status: u16,

        /// Response headers.
        headers: Headers,
    },

    /// Part of the response body has been received.
    DownloadProgress {
        /// Bytes received so far.
        loaded: u64,

        /// Total body size, when known.
        total: Option<u64>,
    },

    /// Full response received. Terminal event.
    Response(TransportResponse),
}

impl TransportEvent {
    /// Whether this is the terminal full response event.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransportEvent::Response(_))
    }

    /// Take response out of the terminal event.
    ///
    /// Progress events return `None`.
    pub fn into_response(self) -> Option<TransportResponse> {
        match self {
            TransportEvent::Response(response) => Some(response),
            _ => None,
        }
    }
}
