//! Wall-clock timing around a unit of work

use std::time::{Duration, Instant};

/// A started monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start_new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Runs `work` and returns its output together with how long it took
///
/// The output is returned untouched, errors included.
pub fn measure<T>(work: impl FnOnce() -> T) -> (T, Duration) {
    let watch = Stopwatch::start_new();
    let output = work();
    (output, watch.elapsed())
}
