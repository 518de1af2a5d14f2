use std::{fmt, str};

use fstr::FStr;

use crate::ParseError;

/// Represents a Universally Unique IDentifier.
///
/// The derived ordering compares the 16 bytes lexicographically, which for UUIDv6, UUIDv7, and
/// UUIDv8 produced by this crate follows the order of the embedded timestamps.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::namespace(0x10);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::namespace(0x11);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::namespace(0x12);

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::namespace(0x14);

    /// Builds one of the well-known name space UUIDs, which differ only in the fourth byte.
    const fn namespace(b3: u8) -> Self {
        Self([
            0x6b, 0xa7, 0xb8, b3, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
            0xc8,
        ])
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Overwrites the version and variant fields of a 128-bit payload.
    ///
    /// The top four bits of byte 6 are replaced by `version` and the top two bits of byte 8 by the
    /// `10` variant; all other bits of `payload` are kept as they are, regardless of whether they
    /// came from a digest, a timestamp, or a random number generator.
    ///
    /// # Panics
    ///
    /// Panics if `version` is not a 4-bit integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidx::Uuid;
    ///
    /// let x = Uuid::pack([0xff; 16], 4);
    /// assert_eq!(x.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// ```
    pub fn pack(mut payload: [u8; 16], version: u8) -> Self {
        assert!(version < 16, "`version` must be a 4-bit integer");
        payload[6] = (version << 4) | (payload[6] & 0x0f);
        payload[8] = 0x80 | (payload[8] & 0x3f);
        Self(payload)
    }

    /// Creates a UUIDv6 from a 60-bit Gregorian timestamp (100-nanosecond intervals since
    /// 1582-10-15) and 62 random bits.
    ///
    /// # Panics
    ///
    /// Panics if any argument exceeds its bit width.
    pub fn from_fields_v6(timestamp: u64, rand_b: u64) -> Self {
        if timestamp >= 1 << 60 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self::pack(
            [
                (timestamp >> 52) as u8,
                (timestamp >> 44) as u8,
                (timestamp >> 36) as u8,
                (timestamp >> 28) as u8,
                (timestamp >> 20) as u8,
                (timestamp >> 12) as u8,
                (timestamp >> 8) as u8 & 0x0f,
                timestamp as u8,
                (rand_b >> 56) as u8,
                (rand_b >> 48) as u8,
                (rand_b >> 40) as u8,
                (rand_b >> 32) as u8,
                (rand_b >> 24) as u8,
                (rand_b >> 16) as u8,
                (rand_b >> 8) as u8,
                rand_b as u8,
            ],
            6,
        )
    }

    /// Creates a UUIDv7 from a 48-bit Unix timestamp in milliseconds and 74 random bits split into
    /// 12-bit `rand_a` and 62-bit `rand_b`.
    ///
    /// # Panics
    ///
    /// Panics if any argument exceeds its bit width.
    pub fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self::pack(
            [
                (unix_ts_ms >> 40) as u8,
                (unix_ts_ms >> 32) as u8,
                (unix_ts_ms >> 24) as u8,
                (unix_ts_ms >> 16) as u8,
                (unix_ts_ms >> 8) as u8,
                unix_ts_ms as u8,
                (rand_a >> 8) as u8,
                rand_a as u8,
                (rand_b >> 56) as u8,
                (rand_b >> 48) as u8,
                (rand_b >> 40) as u8,
                (rand_b >> 32) as u8,
                (rand_b >> 24) as u8,
                (rand_b >> 16) as u8,
                (rand_b >> 8) as u8,
                rand_b as u8,
            ],
            7,
        )
    }

    /// Creates a UUIDv8 from a 48-bit Unix timestamp in milliseconds, a 14-bit binary fraction of
    /// the millisecond, and 60 random bits.
    ///
    /// The upper 12 bits of `subsec_fraction` follow the version nibble; the lower two sit right
    /// after the variant bits.
    ///
    /// # Panics
    ///
    /// Panics if any argument exceeds its bit width.
    pub fn from_fields_v8(unix_ts_ms: u64, subsec_fraction: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || subsec_fraction >= 1 << 14 || rand_b >= 1 << 60 {
            panic!("invalid field value");
        }

        let subsec_a = subsec_fraction >> 2;
        let subsec_b = (subsec_fraction & 0x03) as u8;
        Self::pack(
            [
                (unix_ts_ms >> 40) as u8,
                (unix_ts_ms >> 32) as u8,
                (unix_ts_ms >> 24) as u8,
                (unix_ts_ms >> 16) as u8,
                (unix_ts_ms >> 8) as u8,
                unix_ts_ms as u8,
                (subsec_a >> 8) as u8,
                subsec_a as u8,
                (subsec_b << 4) | (rand_b >> 56) as u8,
                (rand_b >> 48) as u8,
                (rand_b >> 40) as u8,
                (rand_b >> 32) as u8,
                (rand_b >> 24) as u8,
                (rand_b >> 16) as u8,
                (rand_b >> 8) as u8,
                rand_b as u8,
            ],
            8,
        )
    }

    /// Returns the 4-bit version field value.
    ///
    /// The value is returned as is, whether or not the variant field designates the layout in
    /// which the version field is meaningful.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Reports the variant field value of the UUID or, if appropriate, [`Variant::Nil`] or
    /// [`Variant::Max`].
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if *self == Self::NIL => Variant::Nil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ if *self == Self::MAX => Variant::Max,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidx::Uuid;
    ///
    /// let x = "{0180A8F0-5B84-7438-AB50-F06AC2E5E082}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "0180a8f0-5b84-7438-ab50-f06ac2e5e082");
    /// assert_eq!(format!("{}", y), "0180a8f0-5b84-7438-ab50-f06ac2e5e082");
    /// # Ok::<(), uuidx::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        let mut w = 0;
        for (i, e) in self.0.iter().enumerate() {
            write_hex_byte(&mut buffer[w..w + 2], *e);
            w += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[w] = b'-';
                w += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hexadecimal digits and hyphens only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Returns the 32-digit lowercase hexadecimal string representation without hyphens.
    pub fn encode_hex(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (chunk, e) in buffer.chunks_exact_mut(2).zip(self.0.iter()) {
            write_hex_byte(chunk, *e);
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hexadecimal digits only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

/// Writes two lowercase hexadecimal digits representing `byte` to `dst`.
fn write_hex_byte(dst: &mut [u8], byte: u8) {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    dst[0] = DIGITS[(byte >> 4) as usize];
    dst[1] = DIGITS[(byte & 15) as usize];
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from a textual representation.
    ///
    /// Accepts the 8-4-4-4-12 hexadecimal form, optionally preceded by `urn:` and/or `uuid:` and
    /// optionally enclosed in braces, in any letter case. The hyphen at each group boundary may be
    /// omitted.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let mut src = src.as_bytes();
        src = strip_prefix_ignore_case(src, b"urn:");
        src = strip_prefix_ignore_case(src, b"uuid:");
        src = match src {
            [b'{', inner @ .., b'}'] => inner,
            [b'{', ..] | [.., b'}'] => return Err(ParseError::UnbalancedBraces),
            _ => src,
        };

        let mut dst = [0u8; 16];
        let mut iter = src.iter().copied().peekable();
        for (i, e) in dst.iter_mut().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                iter.next_if_eq(&b'-');
            }
            let hi = decode_digit(iter.next())?;
            let lo = decode_digit(iter.next())?;
            *e = (hi << 4) | lo;
        }
        match iter.next() {
            None => Ok(Self(dst)),
            Some(c) if c.is_ascii_hexdigit() => Err(ParseError::InvalidLength),
            Some(_) => Err(ParseError::InvalidCharacter),
        }
    }
}

fn strip_prefix_ignore_case<'a>(src: &'a [u8], prefix: &[u8]) -> &'a [u8] {
    match src.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &src[prefix.len()..],
        _ => src,
    }
}

fn decode_digit(src: Option<u8>) -> Result<u8, ParseError> {
    let c = src.ok_or(ParseError::InvalidLength)?;
    (c as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseError::InvalidCharacter)
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// UUID variants defined by RFC 9562.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Variant 0 (NCS backward compatibility), excluding the Nil UUID.
    Var0,
    /// Variant 10 (RFC 9562), the one this crate generates.
    Var10,
    /// Variant 110 (Microsoft backward compatibility).
    Var110,
    /// Reserved variant 111, excluding the Max UUID.
    VarReserved,
    /// The Nil UUID.
    Nil,
    /// The Max UUID.
    Max,
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}
