//! Serialization module
//!
//! This module provides a [`Serialize`] trait used to turn request bodies
//! into bytes.
//!
//! You can implement this trait for your own types, or use the provided
//! implementations for [`Into<Vec<u8>>`] (without `serde` feature) or for
//! every [`serde::Serialize`] type (with `serde` feature).
//!
//! [`Serialize`]: trait.Serialize.html

use super::GatewayError;

/// Serialize values
///
/// This trait provides a [`serialize`] method for request bodies.
///
/// [`serialize`]: #tymethod.serialize
pub trait Serialize {
    /// Serialize the value
    ///
    /// # Errors
    /// Should return an [`GatewayError::Serialization`] if the value cannot be serialized.
    ///
    /// [`GatewayError::Serialization`]: ../error/enum.GatewayError.html#variant.Serialization
    fn serialize(self) -> Result<Vec<u8>, GatewayError>;
}

#[cfg(not(feature = "serde"))]
impl<I> Serialize for I
where
    I: Into<Vec<u8>>,
{
    fn serialize(self) -> Result<Vec<u8>, GatewayError> {
        Ok(self.into())
    }
}
