// src/readiness.rs
//! Bounded polling for conditions that become true over time.
//!
//! The original automation relied on fixed sleeps and the driver's
//! implicit waits; this primitive makes the wait's contract explicit:
//! a probe, a maximum wait, and an interval between attempts.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Polls `probe` until it yields a value or `timeout` elapses.
///
/// The probe runs immediately, then once per `interval`. Returns `None`
/// if the deadline passes without the probe ever yielding.
pub async fn poll_until<F, Fut, T>(mut probe: F, timeout: Duration, interval: Duration) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(value) = probe().await {
            return Some(value);
        }

        if Instant::now() + interval > deadline {
            return None;
        }

        tokio::time::sleep(interval).await;
    }
}
