//! Serde implementation for the gateway [`Deserializer`] trait.
//!
//! Response bodies are decoded from JSON.
//!
//! # Examples
//! ```
//! use http_gateway::{core::Deserializer, providers::deserialization_serde::DeserializerSerde};
//!
//! #[derive(serde::Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo: Foo = DeserializerSerde.deserialize(b"{\"bar\":\"baz\"}").unwrap();
//! assert_eq!(foo, Foo { bar: "baz".to_string() });
//! ```
//!
//! [`Deserializer`]: crate::core::Deserializer

use crate::core::{Deserializer, GatewayError};

/// Serde implementation for the gateway [`Deserializer`] trait.
///
/// Used by [`GatewayRequestBuilder::execute_json`] to deserialize the final
/// response body.
///
/// [`Deserializer`]: crate::core::Deserializer
/// [`GatewayRequestBuilder::execute_json`]: crate::dx::GatewayRequestBuilder::execute_json
#[derive(Debug, Clone, Copy, Default)]
pub struct DeserializerSerde;

impl<T> Deserializer<T> for DeserializerSerde
where
    T: serde::de::DeserializeOwned,
{
    fn deserialize(&self, bytes: &[u8]) -> Result<T, GatewayError> {
        serde_json::from_slice(bytes).map_err(|e| GatewayError::Deserialization {
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Foo {
        bar: String,
    }

    #[test]
    fn deserialize() {
        let sut = DeserializerSerde;

        let result: Foo = sut.deserialize(&Vec::from("{\"bar\":\"baz\"}")).unwrap();

        assert_eq!(
            result,
            Foo {
                bar: "baz".to_string()
            }
        );
    }

    #[test]
    fn report_malformed_body() {
        let result: Result<Foo, _> = DeserializerSerde.deserialize(b"{\"bar\":");

        assert!(matches!(result, Err(GatewayError::Deserialization { .. })));
    }
}
