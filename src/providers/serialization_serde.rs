//! Serde implementation for the gateway [`Serialize`] trait.
//!
//! Request bodies are encoded as JSON.
//!
//! # Examples
//! ```
//! use http_gateway::core::Serialize as _;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo = Foo { bar: "baz".to_string() };
//! assert_eq!(foo.serialize().unwrap(), b"{\"bar\":\"baz\"}".to_vec());
//! ```
//!
//! [`Serialize`]: crate::core::Serialize
impl<S> crate::core::Serialize for S
where
    S: serde::Serialize,
{
    fn serialize(self) -> Result<Vec<u8>, crate::core::GatewayError> {
        serde_json::to_vec(&self).map_err(|e| crate::core::GatewayError::Serialization {
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod should {
    use crate::core::Serialize;
    use std::collections::BTreeMap;

    #[test]
    fn serialize_serde_values() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            bar: String,
        }

        let sut = Foo { bar: "baz".into() };
        assert_eq!(sut.serialize().unwrap(), b"{\"bar\":\"baz\"}".to_vec());
    }

    #[test]
    fn report_serialization_failure() {
        let sut = BTreeMap::from([((1, 2), "tuple keys are not valid JSON keys")]);

        assert!(matches!(
            sut.serialize(),
            Err(crate::core::GatewayError::Serialization { .. })
        ));
    }
}
