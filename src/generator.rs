//! UUID generator and related types.

use crate::clock::{
    MonotonicClock, StdSystemTime, TimeSource, GREGORIAN_OFFSET, SUBSEC_FRACTION_BITS,
    SUBSEC_PER_MS, SUBSEC_RANGE,
};
use crate::Uuid;

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// Represents a UUID generator that encapsulates a monotonic clock and guarantees the strictly
/// increasing order of the time-based UUIDs it produces.
///
/// The generator owns a [`MonotonicClock`], so the ordering guarantee holds across all UUIDv6,
/// UUIDv7, and UUIDv8 generated by the same instance. Wrapping it in a mutex extends the guarantee
/// to every thread that shares it, which is what the process-wide entry points such as
/// [`uuid7()`](crate::uuid7) do.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuidx::Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v6(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Generator functions
///
/// | Version | From current time | From argument        | Clock resolution |
/// | ------- | ----------------- | -------------------- | ---------------- |
/// | 4       | [`generate_v4`]   | n/a                  | n/a              |
/// | 6       | [`generate_v6`]   | [`generate_v6_core`] | 100 nanoseconds  |
/// | 7       | [`generate_v7`]   | [`generate_v7_core`] | 1 millisecond    |
/// | 8       | [`generate_v8`]   | [`generate_v8_core`] | 100 nanoseconds  |
///
/// When the timestamp passed or read is not greater than the previous one, the `core` functions
/// advance the previous one by a single unit instead; UUIDv6 and UUIDv8 share one such cursor.
///
/// [`generate_v4`]: Generator::generate_v4
/// [`generate_v6`]: Generator::generate_v6
/// [`generate_v6_core`]: Generator::generate_v6_core
/// [`generate_v7`]: Generator::generate_v7
/// [`generate_v7_core`]: Generator::generate_v7_core
/// [`generate_v8`]: Generator::generate_v8
/// [`generate_v8_core`]: Generator::generate_v8_core
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime> {
    clock: MonotonicClock,

    /// The random number generator used by the generator.
    rand_source: R,

    /// The system clock used by the generator.
    time_source: T,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator instance that reads the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator instance with specified random number and time sources.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            clock: MonotonicClock::starting_at(0, 0, 0),
            rand_source,
            time_source,
        }
    }

    /// Replaces the clock state, typically with one from [`MonotonicClock::starting_at()`] in
    /// test harnesses.
    pub fn with_clock(mut self, clock: MonotonicClock) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the current clock state.
    pub const fn clock(&self) -> &MonotonicClock {
        &self.clock
    }

    /// Generates a new UUIDv4 object utilizing the random number generator inside.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rand_source.fill_bytes(&mut bytes);
        Uuid::pack(bytes, 4)
    }

    /// Generates a new UUIDv6 object from the current time.
    pub fn generate_v6(&mut self) -> Uuid {
        let (unix_ts, subsec) = self.read_subsec();
        self.generate_v6_core(unix_ts, subsec)
    }

    /// Generates a new UUIDv6 object from a Unix timestamp in seconds and 100-nanosecond units.
    ///
    /// # Panics
    ///
    /// Panics if `subsec` is not less than [`SUBSEC_RANGE`] or if the Gregorian timestamp, either
    /// the one given or the one the clock cursor steps to, does not fit in 60 bits. The generator
    /// state is left unchanged in that case.
    pub fn generate_v6_core(&mut self, unix_ts: u64, subsec: u32) -> Uuid {
        assert!(
            gregorian_timestamp(unix_ts, subsec).is_some(),
            "`unix_ts` out of 60-bit timestamp range"
        );
        let mut clock = self.clock;
        let (unix_ts, subsec) = clock.next_subsec(unix_ts, subsec);
        let Some(timestamp) = gregorian_timestamp(unix_ts, subsec) else {
            panic!("clock cursor reached the end of 60-bit timestamp range");
        };
        self.clock = clock;
        Uuid::from_fields_v6(timestamp, self.rand_source.next_u64() >> 2)
    }

    /// Generates a new UUIDv7 object from the current time.
    pub fn generate_v7(&mut self) -> Uuid {
        let unix_ts_ms = self.time_source.now().as_millis() as u64;
        self.generate_v7_core(unix_ts_ms)
    }

    /// Generates a new UUIDv7 object from a Unix timestamp in milliseconds.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms`, or the value the clock cursor steps to, does not fit in 48 bits. The
    /// generator state is left unchanged in that case.
    pub fn generate_v7_core(&mut self, unix_ts_ms: u64) -> Uuid {
        assert!(unix_ts_ms < 1 << 48, "`unix_ts_ms` out of 48-bit range");
        let mut clock = self.clock;
        let unix_ts_ms = clock.next_ms(unix_ts_ms);
        assert!(
            unix_ts_ms < 1 << 48,
            "clock cursor reached the end of 48-bit timestamp range"
        );
        self.clock = clock;
        Uuid::from_fields_v7(
            unix_ts_ms,
            (self.rand_source.next_u64() >> 52) as u16,
            self.rand_source.next_u64() >> 2,
        )
    }

    /// Generates a new UUIDv8 object from the current time.
    pub fn generate_v8(&mut self) -> Uuid {
        let (unix_ts, subsec) = self.read_subsec();
        self.generate_v8_core(unix_ts, subsec)
    }

    /// Generates a new UUIDv8 object from a Unix timestamp in seconds and 100-nanosecond units.
    ///
    /// # Panics
    ///
    /// Panics if `subsec` is not less than [`SUBSEC_RANGE`] or if the millisecond timestamp, either
    /// the one given or the one the clock cursor steps to, does not fit in 48 bits. The generator
    /// state is left unchanged in that case.
    pub fn generate_v8_core(&mut self, unix_ts: u64, subsec: u32) -> Uuid {
        assert!(
            unix_ts_ms_of(unix_ts, subsec).is_some(),
            "`unix_ts` out of 48-bit millisecond range"
        );
        let mut clock = self.clock;
        let (unix_ts, subsec) = clock.next_subsec(unix_ts, subsec);
        let Some(unix_ts_ms) = unix_ts_ms_of(unix_ts, subsec) else {
            panic!("clock cursor reached the end of 48-bit millisecond range");
        };
        self.clock = clock;
        let fraction = ((subsec % SUBSEC_PER_MS) << SUBSEC_FRACTION_BITS) / SUBSEC_PER_MS;
        Uuid::from_fields_v8(unix_ts_ms, fraction as u16, self.rand_source.next_u64() >> 4)
    }

    /// Reads the time source as seconds and 100-nanosecond units.
    fn read_subsec(&mut self) -> (u64, u32) {
        let now = self.time_source.now();
        (now.as_secs(), now.subsec_nanos() / 100)
    }
}

/// Converts a Unix timestamp to 100-nanosecond intervals since 1582-10-15, or returns `None` if the
/// result does not fit in 60 bits.
fn gregorian_timestamp(unix_ts: u64, subsec: u32) -> Option<u64> {
    unix_ts
        .checked_mul(u64::from(SUBSEC_RANGE))?
        .checked_add(u64::from(subsec) + GREGORIAN_OFFSET)
        .filter(|e| *e < 1 << 60)
}

/// Converts a Unix timestamp to milliseconds, or returns `None` if the result does not fit in 48
/// bits.
fn unix_ts_ms_of(unix_ts: u64, subsec: u32) -> Option<u64> {
    unix_ts
        .checked_mul(1_000)?
        .checked_add(u64::from(subsec / SUBSEC_PER_MS))
        .filter(|e| *e < 1 << 48)
}
