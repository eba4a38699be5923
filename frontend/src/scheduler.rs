//! Timers and background tasks.
//!
//! The fixed pauses before navigation or tab switches go through
//! [`Scheduler`] so tests can skip them.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use std::time::Duration;

#[async_trait(?Send)]
pub trait Scheduler {
    async fn sleep(&self, duration: Duration);

    /// Runs `task` in the background; the caller does not await it.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Browser event-loop scheduler.
pub struct BrowserScheduler;

#[async_trait(?Send)]
impl Scheduler for BrowserScheduler {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
