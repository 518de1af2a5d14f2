//! Timestamp extraction from time-based UUIDs.

use std::fmt;

use crate::clock::{GREGORIAN_OFFSET, SUBSEC_FRACTION_BITS, SUBSEC_PER_MS, SUBSEC_RANGE};
use crate::Uuid;

/// A point in time recovered from a UUIDv6, UUIDv7, or UUIDv8, counted in 100-nanosecond ticks
/// since the Unix epoch.
///
/// Ticks are signed because the UUIDv6 timestamp can express instants back to 1582-10-15. The
/// [`Display`](fmt::Display) implementation renders seconds with seven decimal places.
///
/// # Examples
///
/// ```rust
/// use uuidx::Uuid;
///
/// let x: Uuid = "1EC9414C-232A-6B00-B3C8-9E6BDECED846".parse()?;
/// assert_eq!(x.timestamp().unwrap().to_string(), "1645557742.0000000");
///
/// let y: Uuid = "00000000-0000-6000-8000-000000000000".parse()?;
/// assert_eq!(y.timestamp().unwrap().to_string(), "-12219292800.0000000");
///
/// assert!(Uuid::NAMESPACE_DNS.timestamp().is_none());
/// # Ok::<(), uuidx::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from 100-nanosecond ticks since the Unix epoch.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Returns the number of 100-nanosecond ticks since the Unix epoch.
    pub const fn as_ticks(&self) -> i64 {
        self.0
    }

    /// Returns the number of seconds since the Unix epoch as `f64`.
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / f64::from(SUBSEC_RANGE)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = u64::from(SUBSEC_RANGE);
        let abs = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:07}", sign, abs / range, abs % range)
    }
}

impl Uuid {
    /// Extracts the timestamp embedded in a UUIDv6, UUIDv7, or UUIDv8.
    ///
    /// Returns `None` for any other version. UUIDv7 carries millisecond precision only, while
    /// UUIDv6 and UUIDv8 recover the full 100-nanosecond resolution they were created with.
    pub fn timestamp(&self) -> Option<Timestamp> {
        let bytes = self.as_bytes();
        let unix_ts_ms = bytes[..6]
            .iter()
            .fold(0u64, |acc, e| (acc << 8) | u64::from(*e));
        let subsec_per_ms = u64::from(SUBSEC_PER_MS);

        match self.version() {
            6 => {
                let timestamp = (unix_ts_ms << 12)
                    | (u64::from(bytes[6] & 0x0f) << 8)
                    | u64::from(bytes[7]);
                Some(Timestamp(timestamp as i64 - GREGORIAN_OFFSET as i64))
            }
            7 => Some(Timestamp((unix_ts_ms * subsec_per_ms) as i64)),
            8 => {
                let fraction = (u64::from(bytes[6] & 0x0f) << 10)
                    | (u64::from(bytes[7]) << 2)
                    | u64::from((bytes[8] >> 4) & 0x03);
                // rounds up to undo the floor division in the generator
                let subsec = (fraction * subsec_per_ms + (1 << SUBSEC_FRACTION_BITS) - 1)
                    >> SUBSEC_FRACTION_BITS;
                Some(Timestamp((unix_ts_ms * subsec_per_ms + subsec) as i64))
            }
            _ => None,
        }
    }
}
