//! Generation, parsing, and comparison of UUID versions 3 through 8
//!
//! ```rust
//! let uuid = uuidx::uuid7();
//! println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuidx::uuid6();
//! println!("{}", uuid.timestamp().unwrap()); // e.g., "1645557742.0000000"
//!
//! let uuid = uuidx::uuid5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "php.net")?;
//! assert_eq!(uuid.to_string(), "c4a760a8-dbcf-5254-a0d9-6a4474bd1b62");
//! # Ok::<(), uuidx::ParseError>(())
//! ```
//!
//! # Supported versions
//!
//! | Version | Entry point              | Contents                                           |
//! | ------- | ------------------------ | -------------------------------------------------- |
//! | 3       | [`uuid3()`]              | MD5 digest of name space and name                  |
//! | 4       | [`uuid4()`]              | 122 random bits                                    |
//! | 5       | [`uuid5()`]              | SHA-1 digest of name space and name                |
//! | 6       | [`uuid6()`]              | 60-bit Gregorian timestamp, 62 random bits         |
//! | 7       | [`uuid7()`]              | 48-bit Unix millisecond timestamp, 74 random bits  |
//! | 8       | [`uuid8()`]              | Unix millisecond timestamp with 14-bit fraction    |
//!
//! The time-based versions (6, 7, and 8) are generated from a monotonic clock, so that each one
//! is strictly greater than the one generated before it within the same process, both in byte
//! order and in the timestamp [`Uuid::timestamp()`] extracts. When the system clock does not
//! advance between two calls, the clock cursor is moved forward by one unit (100 nanoseconds for
//! versions 6 and 8, one millisecond for version 7) instead. No ordering is guaranteed across
//! processes.
//!
//! # Field and bit layout
//!
//! UUIDv6 stores the number of 100-nanosecond intervals since 1582-10-15 with the most
//! significant bits first:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! UUIDv7 stores the Unix timestamp in milliseconds followed by random bits:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! UUIDv8 extends the UUIDv7 timestamp with a 14-bit binary fraction of the millisecond, split
//! into `subsec_a` (12 bits) and `subsec_b` (2 bits):
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |       subsec_a        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|sub|                      rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! In all layouts the 4-bit `ver` field holds the version and the 2-bit `var` field is set at
//! `10`.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide generator behind [`uuid4()`], [`uuid6()`],
//!   [`uuid7()`], and [`uuid8()`].
//!
//! Optional features:
//!
//! - `serde`: enables serialization and deserialization of [`Uuid`] through `serde`.
//! - `uuid`: enables conversion from/to `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::ParseError;

mod id;
pub use id::{Uuid, Variant};

pub mod clock;
pub use clock::{MonotonicClock, StdSystemTime, TimeSource};

pub mod generator;
pub use generator::{Generator, RandSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid4, uuid6, uuid7, uuid8};

mod named;
pub use named::{uuid3, uuid5};

mod timestamp;
pub use timestamp::Timestamp;

pub mod text;
