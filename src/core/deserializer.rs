//! Deserialization of response bodies.
//!
//! This module contains the [`Deserializer`] trait which is used to turn the
//! final response body into the caller's type.

use super::GatewayError;

/// Trait for deserializing response bodies.
///
/// It is used by [`GatewayRequestBuilder::execute_with`] once all response
/// adapters have run.
///
/// # Examples
/// ```
/// use http_gateway::core::{Deserializer, GatewayError};
///
/// struct Utf8;
///
/// impl Deserializer<String> for Utf8 {
///     fn deserialize(&self, bytes: &[u8]) -> Result<String, GatewayError> {
///         String::from_utf8(bytes.to_vec()).map_err(|e| GatewayError::Deserialization {
///             details: e.to_string(),
///         })
///     }
/// }
/// ```
///
/// [`GatewayRequestBuilder::execute_with`]: crate::dx::GatewayRequestBuilder::execute_with
pub trait Deserializer<T> {
    /// Deserialize a `&[u8]` into a `Result<T, GatewayError>`.
    fn deserialize(&self, bytes: &[u8]) -> Result<T, GatewayError>;
}
