//! Wall-clock timing of zero-argument operations.
//!
//! The harness runs an operation exactly once and measures the time from
//! just before the call to just after it returns. A panic or an `Err` from
//! the operation goes straight back to the caller and no duration is
//! produced for that run.
//!
//! How a duration gets displayed is up to the caller; [`report`] is a
//! convenience that logs it.

use std::time::{Duration, Instant};

use tracing::info;

/// Explicit start/stop measurement of wall-clock time.
///
/// Once stopped, [`Stopwatch::elapsed`] keeps returning the stopped reading.
#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
    stopped: Option<Duration>,
}

impl Stopwatch {
    pub fn start_new() -> Self {
        Self { start: Instant::now(), stopped: None }
    }
    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.start.elapsed())
    }
    pub fn is_running(&self) -> bool {
        self.stopped.is_none()
    }
    // Stopping twice keeps the first reading.
    pub fn stop(&mut self) -> Duration {
        *self.stopped.get_or_insert_with(|| self.start.elapsed())
    }
}

/// Runs `op` once and returns how long it took.
pub fn measure_void<F>(op: F) -> Duration
where
    F: FnOnce(),
{
    let mut watch = Stopwatch::start_new();
    op();
    watch.stop()
}

/// Runs `op` once and returns its value untouched together with how long it took.
///
/// ```
/// use strainer::timing::measure_value;
/// let (value, elapsed) = measure_value(|| 63);
/// assert_eq!(value, 63);
/// assert!(elapsed >= std::time::Duration::ZERO);
/// ```
pub fn measure_value<T, F>(op: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let mut watch = Stopwatch::start_new();
    let value = op();
    (value, watch.stop())
}

/// Runs a fallible `op` once.
///
/// On success the value is paired with the elapsed time. On failure the
/// error is returned as-is and the time spent is discarded.
pub fn measure_result<T, E, F>(op: F) -> Result<(T, Duration), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let mut watch = Stopwatch::start_new();
    let value = op()?;
    Ok((value, watch.stop()))
}

/// Logs `elapsed` under `label` and returns it in (fractional) milliseconds.
pub fn report(label: &str, elapsed: Duration) -> f64 {
    let ms = as_millis_f64(elapsed);
    info!(label, ms, "operation complete");
    ms
}

pub fn as_millis_f64(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}
