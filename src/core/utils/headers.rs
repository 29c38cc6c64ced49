//! Headers module
//!
//! This module provides a constants for HTTP headers.
//!

pub(crate) const ACCEPT: &str = "Accept";
pub(crate) const CONTENT_TYPE: &str = "Content-Type";
pub(crate) const DATA_TYPE: &str = "DataType";
pub(crate) const USER_AGENT: &str = "User-Agent";
pub(crate) const REQUEST_ID: &str = "X-Request-Id";
pub(crate) const APPLICATION_JSON: &str = "application/json";
