use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// A time source returning milliseconds since the Unix epoch.
///
/// This abstraction lets callers plug in a real system clock, a monotonic
/// timer, or a mocked time source in tests. The encoder only ever sees the
/// returned value; how it was obtained is external configuration.
///
/// # Example
///
/// ```
/// use lexid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}

/// The wall clock: milliseconds since the Unix epoch from [`SystemTime`].
///
/// A system clock set before the epoch degrades to `0` instead of
/// panicking. Wall-clock adjustments (NTP, manual changes) are visible
/// through this source; use [`MonotonicClock`] when timestamps must never
/// go backwards within a process.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_millis() as u64
    }
}

/// A monotonic time source anchored to the Unix epoch.
///
/// The wall-clock offset is captured once at construction; afterwards the
/// clock advances with [`Instant`], so the reported time never goes
/// backwards even if the system clock is adjusted externally. Preferred
/// over [`SystemClock`] for timestamp generation.
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    start: Instant,
    epoch_offset: u64,
}

impl MonotonicClock {
    /// Constructs a monotonic clock anchored to the current wall-clock
    /// time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            epoch_offset: SystemClock.current_millis(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    /// Returns the anchored epoch offset plus the monotonic time elapsed
    /// since construction.
    fn current_millis(&self) -> u64 {
        self.epoch_offset + self.start.elapsed().as_millis() as u64
    }
}
