use std::collections::HashMap;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};

pub type TimerCallback = Box<dyn FnMut() + Send + 'static>;

/// Identifies one running timer. Only the clock that issued it can stop it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Repeating timers. After `stop` returns, the callback for that handle is
/// never invoked again.
pub trait Clock {
    fn start(&mut self, interval: Duration, callback: TimerCallback) -> TimerHandle;
    fn stop(&mut self, handle: TimerHandle);
}

struct RunningTimer {
    cancel: mpsc::Sender<()>,
    thread: JoinHandle<()>,
}

/// One background thread per timer, parked on a cancellable wait.
#[derive(Default)]
pub struct ThreadClock {
    next_id: u64,
    timers: HashMap<TimerHandle, RunningTimer>,
}

impl ThreadClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.timers.len()
    }
}

impl Clock for ThreadClock {
    fn start(&mut self, interval: Duration, mut callback: TimerCallback) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let (cancel, cancelled) = mpsc::channel::<()>();
        let thread = thread::spawn(move || {
            loop {
                match cancelled.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => callback(),
                    // Explicit cancel or the clock was dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        });

        self.timers.insert(handle, RunningTimer { cancel, thread });
        handle
    }

    fn stop(&mut self, handle: TimerHandle) {
        if let Some(timer) = self.timers.remove(&handle) {
            let _ = timer.cancel.send(());
            if timer.thread.join().is_err() {
                tracing::warn!("timer thread panicked before it was stopped");
            }
        }
    }
}

impl Drop for ThreadClock {
    fn drop(&mut self) {
        let handles: Vec<TimerHandle> = self.timers.keys().copied().collect();
        for handle in handles {
            self.stop(handle);
        }
    }
}

struct ManualTimer {
    interval: Duration,
    until_next: Duration,
    callback: TimerCallback,
}

/// Deterministic clock: time only moves when `advance` is called.
#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Arc<Mutex<ManualClockState>>,
}

#[derive(Default)]
struct ManualClockState {
    next_id: u64,
    timers: HashMap<TimerHandle, ManualTimer>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ManualClockState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn active(&self) -> usize {
        self.state().timers.len()
    }

    /// Move time forward, firing each due timer once per elapsed interval.
    /// Callbacks run with the clock locked and must not call back into it.
    pub fn advance(&self, by: Duration) {
        let mut state = self.state();
        for timer in state.timers.values_mut() {
            if timer.interval.is_zero() {
                continue;
            }
            let mut left = by;
            while left >= timer.until_next {
                left -= timer.until_next;
                timer.until_next = timer.interval;
                (timer.callback)();
            }
            timer.until_next -= left;
        }
    }
}

impl Clock for ManualClock {
    fn start(&mut self, interval: Duration, callback: TimerCallback) -> TimerHandle {
        let mut state = self.state();
        let handle = TimerHandle(state.next_id);
        state.next_id += 1;
        state.timers.insert(
            handle,
            ManualTimer {
                interval,
                until_next: interval,
                callback,
            },
        );
        handle
    }

    fn stop(&mut self, handle: TimerHandle) {
        self.state().timers.remove(&handle);
    }
}

/// Where "now" comes from.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable instant, shared between clones.
#[derive(Clone)]
pub struct FixedTimeSource {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedTimeSource {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    fn guard(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn advance(&self, by: chrono::Duration) {
        *self.guard() += by;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.guard()
    }
}
