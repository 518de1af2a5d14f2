//! Operations on textual UUID representations.
//!
//! Each function parses its arguments first, so any form accepted by [`Uuid`]'s `FromStr`
//! implementation may be passed: `8-4-4-4-12`, braced, or `urn:uuid:` prefixed, in any letter case.
//! Malformed input is reported as [`ParseError`], except by [`is_valid()`].
//!
//! ```rust
//! use std::cmp::Ordering;
//! use uuidx::text;
//!
//! assert!(text::equals(
//!     "urn:uuid:c4a760a8-dbcf-5254-a0d9-6a4474bd1b62",
//!     "{C4A760A8-DBCF-5254-A0D9-6A4474BD1B62}",
//! )?);
//! assert_eq!(
//!     text::compare(
//!         "c4a760a8-dbcf-5254-a0d9-6a4474bd1b63",
//!         "c4a760a8-dbcf-5254-a0d9-6a4474bd1b62",
//!     )?,
//!     Ordering::Greater
//! );
//! # Ok::<(), uuidx::ParseError>(())
//! ```

use std::cmp::Ordering;

use crate::{ParseError, Timestamp, Uuid};

/// Returns true if `text` is a valid UUID representation.
pub fn is_valid(text: &str) -> bool {
    text.parse::<Uuid>().is_ok()
}

/// Returns true if both representations denote the same UUID.
pub fn equals(a: &str, b: &str) -> Result<bool, ParseError> {
    Ok(a.parse::<Uuid>()? == b.parse::<Uuid>()?)
}

/// Compares two representations byte by byte.
pub fn compare(a: &str, b: &str) -> Result<Ordering, ParseError> {
    Ok(a.parse::<Uuid>()?.cmp(&b.parse::<Uuid>()?))
}

/// Returns the version field value (`0` through `15`).
pub fn version(text: &str) -> Result<u8, ParseError> {
    Ok(text.parse::<Uuid>()?.version())
}

/// Returns the timestamp embedded in a UUIDv6, UUIDv7, or UUIDv8, or `None` for other versions.
pub fn time(text: &str) -> Result<Option<Timestamp>, ParseError> {
    Ok(text.parse::<Uuid>()?.timestamp())
}

/// Returns the lowercase `8-4-4-4-12` representation without braces or prefix.
pub fn to_canonical_string(text: &str) -> Result<String, ParseError> {
    Ok(text.parse::<Uuid>()?.to_string())
}
