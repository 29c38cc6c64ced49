//! # Headers
//!
//! This module contains the [`Headers`] map and the [`HeaderValue`] type used
//! by requests, responses and the gateway configuration.

use hashbrown::HashMap;

/// Header name to value(s) mapping.
///
/// Header names are kept as they were provided. Lookups through
/// [`HeadersExt::get_ignore_case`] compare names case-insensitively.
pub type Headers = HashMap<String, HeaderValue>;

/// Value of a single header.
///
/// A header can be sent once with one value or repeated with several values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HeaderValue {
    /// Header sent once.
    Single(String),

    /// Header repeated for every value.
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// List of values in the order in which they should be sent.
    pub fn values(&self) -> Vec<&str> {
        match self {
            HeaderValue::Single(value) => vec![value.as_str()],
            HeaderValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// First value of the header.
    pub fn first(&self) -> Option<&str> {
        match self {
            HeaderValue::Single(value) => Some(value.as_str()),
            HeaderValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// Add value to the header.
    ///
    /// A single value header is turned into a multi value header.
    pub fn push<S>(&mut self, value: S)
    where
        S: Into<String>,
    {
        match self {
            HeaderValue::Single(current) => {
                *self = HeaderValue::Multiple(vec![std::mem::take(current), value.into()])
            }
            HeaderValue::Multiple(values) => values.push(value.into()),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Single(value.into())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Single(value)
    }
}

impl From<Vec<String>> for HeaderValue {
    fn from(values: Vec<String>) -> Self {
        HeaderValue::Multiple(values)
    }
}

impl From<Vec<&str>> for HeaderValue {
    fn from(values: Vec<&str>) -> Self {
        HeaderValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}

/// Case-insensitive helpers for [`Headers`].
pub trait HeadersExt {
    /// Find header by name ignoring ASCII case.
    fn get_ignore_case(&self, name: &str) -> Option<&HeaderValue>;

    /// Check whether header with name (ignoring ASCII case) is present.
    fn contains_ignore_case(&self, name: &str) -> bool {
        self.get_ignore_case(name).is_some()
    }

    /// Add headers from `defaults` which are missing (ignoring ASCII case).
    fn merge_defaults(&mut self, defaults: &Headers);
}

impl HeadersExt for Headers {
    fn get_ignore_case(&self, name: &str) -> Option<&HeaderValue> {
        self.get(name).or_else(|| {
            self.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }

    fn merge_defaults(&mut self, defaults: &Headers) {
        for (name, value) in defaults {
            if !self.contains_ignore_case(name) {
                self.insert(name.clone(), value.clone());
            }
        }
    }
}
