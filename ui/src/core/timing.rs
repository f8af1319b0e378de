//! Timer utilities for the submission flow, toast expiry and image watchdogs.

use time::OffsetDateTime;

/// Suspend the current task for `ms` milliseconds without blocking the event loop.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let clamped = ms.min(u32::MAX as u64) as u32;
    gloo_timers::future::TimeoutFuture::new(clamped).await;
}

/// Suspend the current task for `ms` milliseconds without blocking the event loop.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
