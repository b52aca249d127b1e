//! Cancellable fixed-period tasks owned by a mounted view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every simulated gauge advances on a timer. `use_ticker` spawns the loop
//! and registers cancellation with the owning reactive scope, so unmounting
//! the view (navigation, logout, or an error tearing the subtree down) always
//! stops the loop before its next tick. The returned handle also cancels on
//! drop, for tickers held outside a reactive scope.
//!
//! TRADE-OFFS
//! ==========
//! Cancellation is checked after each sleep, so a cancelled ticker may
//! still be parked inside one final sleep. It never runs the callback again.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Owner of one running ticker loop.
#[derive(Debug)]
pub struct TickerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TickerHandle {
    fn new() -> Self {
        Self { cancelled: Arc::new(AtomicBool::new(false)) }
    }

    /// Stop the loop. Safe to call more than once.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Read-only view of the cancellation flag that outlives the handle.
    pub fn status(&self) -> TickerStatus {
        TickerStatus { cancelled: self.cancelled.clone() }
    }
}

/// Observer for a ticker owned elsewhere. Holding it never keeps the loop
/// alive.
#[derive(Clone, Debug)]
pub struct TickerStatus {
    cancelled: Arc<AtomicBool>,
}

impl TickerStatus {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `tick` every `period` until the handle is cancelled or dropped.
///
/// Outside the browser nothing is spawned; server renders show the initial
/// values only.
pub fn spawn_ticker<F>(period: Duration, tick: F) -> TickerHandle
where
    F: FnMut() + 'static,
{
    let handle = TickerHandle::new();
    #[cfg(feature = "hydrate")]
    {
        let cancelled = handle.cancelled.clone();
        let mut tick = tick;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if cancelled.load(Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, tick);
    }
    handle
}

/// Spawn a ticker tied to the current reactive owner. The loop is cancelled
/// when the owner is cleaned up; the returned status reports that.
pub fn use_ticker<F>(period: Duration, tick: F) -> TickerStatus
where
    F: FnMut() + 'static,
{
    let handle = spawn_ticker(period, tick);
    let status = handle.status();
    leptos::prelude::on_cleanup(move || handle.cancel());
    status
}
