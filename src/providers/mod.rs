//! # Providers module
//!
//! This module contains the providers that can be plugged into
//! [`HttpGateway`]: the tokio-based [`Runtime`] and `serde` implementations of
//! the body [`Serialize`] and [`Deserializer`] traits.
//!
//! [`HttpGateway`]: crate::dx::HttpGateway
//! [`Runtime`]: crate::core::Runtime
//! [`Serialize`]: crate::core::Serialize
//! [`Deserializer`]: crate::core::Deserializer

#[cfg(feature = "serde")]
pub mod serialization_serde;

#[cfg(feature = "serde")]
pub mod deserialization_serde;

#[cfg(feature = "tokio")]
pub mod futures_tokio;
