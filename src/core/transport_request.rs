//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types.
//!
//! [`http_gateway`]: ../index.html

use std::fmt::Display;

use super::{
    utils::encoding::{query_string, url_encode},
    Headers,
};

/// The method to use for a request.
///
/// This enum represents the method to use for a request. It is used by the
/// [`TransportRequest`] struct.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub enum TransportMethod {
    /// Retrieve resource.
    #[default]
    Get,

    /// Create resource or submit data.
    Post,

    /// Replace resource.
    Put,

    /// Partially update resource.
    Patch,

    /// Remove resource.
    Delete,

    /// Retrieve resource headers only.
    Head,

    /// Describe communication options.
    Options,
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMethod::Get => "GET",
                TransportMethod::Post => "POST",
                TransportMethod::Put => "PUT",
                TransportMethod::Patch => "PATCH",
                TransportMethod::Delete => "DELETE",
                TransportMethod::Head => "HEAD",
                TransportMethod::Options => "OPTIONS",
            }
        )
    }
}

/// This struct represents a request to be sent through the [`Transport`].
///
/// All fields are representing certain parts of the request that can be used
/// to prepare one. Request adapters receive the request by value and return
/// the next version of it.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportRequest {
    /// method to use for the request
    pub method: TransportMethod,

    /// absolute or base URL relative address of the resource
    pub url: String,

    /// headers to be sent with the request
    pub headers: Headers,

    /// query parameters to be sent with the request, in order
    pub query_parameters: Vec<(String, String)>,

    /// body to be sent with the request
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Full request address with percent-encoded query string.
    pub fn full_url(&self) -> String {
        if self.query_parameters.is_empty() {
            return self.url.clone();
        }

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}{}",
            self.url,
            query_string(&self.query_parameters)
        )
    }
}

/// Primitive request payload used by the synchronous interception path.
///
/// `query_args` is an already built query string (without leading `?`), so
/// adapters which build or sign query strings can work on plain text.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct SyncRequest {
    /// Request body.
    pub body: String,

    /// Request address without query string.
    pub url: String,

    /// Query string without leading `?`.
    pub query_args: String,
}

impl SyncRequest {
    /// Create payload from its parts.
    pub fn new<B, U, Q>(body: B, url: U, query_args: Q) -> Self
    where
        B: Into<String>,
        U: Into<String>,
        Q: Into<String>,
    {
        Self {
            body: body.into(),
            url: url.into(),
            query_args: query_args.into(),
        }
    }

    /// Append single encoded `key=value` pair to the query string.
    pub fn append_query<K, V>(mut self, key: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if !self.query_args.is_empty() {
            self.query_args.push('&');
        }
        self.query_args.push_str(&format!(
            "{}={}",
            url_encode(key.as_ref().as_bytes()),
            url_encode(value.as_ref().as_bytes())
        ));
        self
    }

    /// Request address joined with the query string.
    pub fn into_url(self) -> String {
        let query = self.query_args.trim_start_matches('?');
        if query.is_empty() {
            self.url
        } else {
            format!("{}?{}", self.url, query)
        }
    }
}
