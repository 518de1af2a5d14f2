//! Error type for parsing textual UUID representations.

use thiserror::Error;

/// Error parsing an invalid string representation of UUID.
///
/// Every variant denotes the same failure, malformed input; the variants only tell where the
/// input went wrong.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Error)]
pub enum ParseError {
    /// An opening `{` without a closing `}` or vice versa.
    #[error("invalid string representation: unbalanced braces")]
    UnbalancedBraces,

    /// A character that is neither a hexadecimal digit nor a hyphen at a group boundary.
    #[error("invalid string representation: unexpected character")]
    InvalidCharacter,

    /// Fewer or more than 32 hexadecimal digits.
    #[error("invalid string representation: expected 32 hexadecimal digits")]
    InvalidLength,
}
