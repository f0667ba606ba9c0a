//! Cancellable background timer threads.
//!
//! A `Worker` sleeps for a delay chosen by one closure, then runs another.
//! The sleep is a `recv_timeout` on a stop channel, so `stop()` wakes the
//! thread immediately instead of waiting out the remaining delay.

use std::io;
use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

pub struct Worker {
    name: String,
    stop_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Spawn a named thread that waits `next_delay()` and then calls
    /// `fire()`, until stopped or until `fire` breaks.
    pub fn spawn<D, F>(name: &str, mut next_delay: D, mut fire: F) -> io::Result<Self>
    where
        D: FnMut() -> Duration + Send + 'static,
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new().name(name.into()).spawn(move || loop {
            match stop_rx.recv_timeout(next_delay()) {
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if fire().is_break() {
                        break;
                    }
                }
                // Explicit stop, or every sender dropped.
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        })?;
        debug!(worker = name, "worker started");

        Ok(Self {
            name: name.into(),
            stop_tx,
            handle: Some(handle),
        })
    }

    /// Signal the thread and wait for it to finish. Called from the worker's
    /// own thread it only signals, since a thread cannot join itself.
    pub fn stop(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                warn!(worker = %self.name, "worker thread panicked");
            }
        }
        debug!(worker = %self.name, "worker stopped");
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Detached: the thread exits at its next wake-up.
        let _ = self.stop_tx.send(());
    }
}

/// Fixed-rate pacing: yields the delay until the next nominal deadline.
pub struct FixedRate {
    period: Duration,
    next_deadline: Instant,
}

impl FixedRate {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_deadline: Instant::now(),
        }
    }

    pub fn next_delay(&mut self) -> Duration {
        self.next_deadline += self.period;
        let now = Instant::now();
        if self.next_deadline > now {
            self.next_deadline - now
        } else {
            if now - self.next_deadline > self.period * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                self.next_deadline = now;
            }
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_worker_fires_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let worker = Worker::spawn(
            "test-worker",
            || Duration::from_millis(1),
            move || {
                c.fetch_add(1, Ordering::SeqCst);
                ControlFlow::Continue(())
            },
        )
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        while count.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        worker.stop();
        let after_stop = count.load(Ordering::SeqCst);
        assert!(after_stop >= 3, "worker should have fired, got {after_stop}");

        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn test_worker_stop_interrupts_long_delay() {
        let worker = Worker::spawn(
            "test-sleeper",
            || Duration::from_secs(3600),
            || ControlFlow::Continue(()),
        )
        .unwrap();
        let started = Instant::now();
        worker.stop();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_worker_exits_on_break() {
        let worker = Worker::spawn(
            "test-once",
            || Duration::ZERO,
            || ControlFlow::Break(()),
        )
        .unwrap();
        let deadline = Instant::now() + Duration::from_secs(2);
        while !worker.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(worker.is_finished());
    }

    #[test]
    fn test_fixed_rate_first_delay_is_one_period() {
        let mut rate = FixedRate::new(Duration::from_millis(50));
        let delay = rate.next_delay();
        assert!(delay <= Duration::from_millis(50));
        assert!(delay > Duration::from_millis(20));
    }
}
