use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Longest single sleep while waiting for the next tick, so a stop request
/// is noticed promptly.
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Recurring tick source driven on the caller's thread.
///
/// Ticks never overlap: each callback finishes before the next one is
/// scheduled. Dropping the ticker stops it.
pub struct Ticker {
    interval: Duration,
    running: Arc<AtomicBool>,
}

/// Cloneable handle that stops a [`Ticker`] from elsewhere (e.g. a signal handler).
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(self.running.clone())
    }

    /// Invoke `on_tick` now and then once per interval until the ticker is
    /// stopped or the callback breaks. Returns the number of ticks delivered.
    ///
    /// Does nothing unless [`Ticker::start`] was called first.
    pub fn run<F>(&self, mut on_tick: F) -> u64
    where
        F: FnMut(u64) -> ControlFlow<()>,
    {
        let started = Instant::now();
        let mut ticks: u64 = 0;

        while self.is_running() {
            let flow = on_tick(ticks);
            ticks += 1;
            if flow.is_break() {
                self.stop();
                break;
            }

            let deadline =
                started + self.interval.saturating_mul(u32::try_from(ticks).unwrap_or(u32::MAX));
            while self.is_running() {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                thread::sleep((deadline - now).min(POLL_SLICE));
            }
        }

        tracing::debug!(ticks, "ticker stopped");
        ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
