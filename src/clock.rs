//! Monotonic clock state shared by the time-based generators.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Number of sub-second units per second (100-nanosecond resolution).
pub const SUBSEC_RANGE: u32 = 10_000_000;

/// Number of 100-nanosecond intervals between the Gregorian epoch (1582-10-15) used by UUIDv6 and
/// the Unix epoch (1970-01-01).
pub const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

pub(crate) const SUBSEC_PER_MS: u32 = SUBSEC_RANGE / 1_000;

/// Bit width of the sub-millisecond fraction in UUIDv8.
pub(crate) const SUBSEC_FRACTION_BITS: u32 = 14;

/// A trait that defines the wall clock interface for [`Generator`](crate::Generator).
pub trait TimeSource {
    /// Returns the current time as the duration elapsed since the Unix epoch.
    fn now(&mut self) -> Duration;
}

/// The default [`TimeSource`] that reads [`SystemTime`].
///
/// A system clock set before the Unix epoch is reported as the epoch itself; the monotonic cursor
/// takes care of ordering from there.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn now(&mut self) -> Duration {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// Represents the last timestamps emitted by the time-based generators.
///
/// Two independent cursors are kept: a `(seconds, sub-second units)` pair for UUIDv6 and UUIDv8,
/// and a millisecond count for UUIDv7. Each `next_*` call returns a value strictly greater than the
/// one it returned before, adopting the wall clock reading when it advances and stepping the cursor
/// by one unit when it does not.
///
/// # Examples
///
/// ```rust
/// use uuidx::MonotonicClock;
///
/// let mut clock = MonotonicClock::default();
/// assert_eq!(clock.next_subsec(1_000, 500), (1_000, 500));
/// assert_eq!(clock.next_subsec(1_000, 500), (1_000, 501));
/// assert_eq!(clock.next_subsec(999, 0), (1_000, 502));
///
/// assert_eq!(clock.next_ms(42), 42);
/// assert_eq!(clock.next_ms(41), 43);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct MonotonicClock {
    unix_ts: u64,
    subsec: u32,
    unix_ts_ms: u64,
}

impl MonotonicClock {
    /// Creates a clock whose cursors start at the given values instead of zero.
    ///
    /// This is intended for test harnesses that need to simulate a clock running ahead of the
    /// system time; regular callers should start from [`MonotonicClock::default()`].
    ///
    /// # Panics
    ///
    /// Panics if `subsec` is not less than [`SUBSEC_RANGE`].
    pub const fn starting_at(unix_ts: u64, subsec: u32, unix_ts_ms: u64) -> Self {
        assert!(subsec < SUBSEC_RANGE, "`subsec` out of range");
        Self {
            unix_ts,
            subsec,
            unix_ts_ms,
        }
    }

    /// Returns the last `(seconds, sub-second units)` pair emitted.
    pub const fn last_subsec(&self) -> (u64, u32) {
        (self.unix_ts, self.subsec)
    }

    /// Returns the last millisecond count emitted.
    pub const fn last_ms(&self) -> u64 {
        self.unix_ts_ms
    }

    /// Advances the sub-second cursor with a wall clock reading and returns the new cursor.
    ///
    /// `subsec` is measured in units of 100 nanoseconds.
    ///
    /// # Panics
    ///
    /// Panics if `subsec` is not less than [`SUBSEC_RANGE`].
    pub fn next_subsec(&mut self, unix_ts: u64, subsec: u32) -> (u64, u32) {
        assert!(subsec < SUBSEC_RANGE, "`subsec` out of range");

        if (unix_ts, subsec) > (self.unix_ts, self.subsec) {
            self.unix_ts = unix_ts;
            self.subsec = subsec;
        } else {
            tracing::trace!(
                unix_ts,
                subsec,
                cursor_unix_ts = self.unix_ts,
                cursor_subsec = self.subsec,
                "clock did not advance; stepping cursor"
            );
            if self.subsec >= SUBSEC_RANGE - 1 {
                self.unix_ts += 1;
                self.subsec = 0;
            } else {
                self.subsec += 1;
            }
        }
        (self.unix_ts, self.subsec)
    }

    /// Advances the millisecond cursor with a wall clock reading and returns the new cursor.
    pub fn next_ms(&mut self, unix_ts_ms: u64) -> u64 {
        if unix_ts_ms > self.unix_ts_ms {
            self.unix_ts_ms = unix_ts_ms;
        } else {
            tracing::trace!(
                unix_ts_ms,
                cursor_unix_ts_ms = self.unix_ts_ms,
                "clock did not advance; stepping cursor"
            );
            self.unix_ts_ms += 1;
        }
        self.unix_ts_ms
    }
}
