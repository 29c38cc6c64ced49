//! # Runtime
//!
//! This module contains the [`Runtime`] trait used by the gateway to delay
//! mocked responses.

use std::time::Duration;

/// Gateway runtime environment.
///
/// The gateway never spawns tasks: every suspension happens inside the
/// caller's poll. The runtime is only asked for timers.
///
/// # Examples
/// ```
/// use http_gateway::core::Runtime;
/// use std::time::Duration;
///
/// #[derive(Clone, Debug)]
/// struct MyRuntime;
///
/// #[async_trait::async_trait]
/// impl Runtime for MyRuntime {
///     async fn sleep(&self, delay: Duration) {
///         // e.g. tokio::time::sleep(delay).await
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Runtime: Send + Sync {
    /// Suspend the current task for `delay`.
    ///
    /// Dropping the returned future must cancel the timer.
    async fn sleep(&self, delay: Duration);
}
