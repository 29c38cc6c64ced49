//! # Futures implementation using Tokio runtime
//!
//! This module contains [`RuntimeTokio`] type.
//!
//! It requires the [`tokio` feature] to be enabled.
//!
//! [`tokio` feature]: ../index.html#features

use std::time::Duration;

use crate::core::Runtime;

/// Tokio-based timers for the gateway.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuntimeTokio;

#[async_trait::async_trait]
impl Runtime for RuntimeTokio {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await
    }
}
