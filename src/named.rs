//! Name-based UUIDs (versions 3 and 5).

use digest::Digest;
use md5::Md5;
use sha1::Sha1;

use crate::{ParseError, Uuid};

impl Uuid {
    /// Creates a UUIDv3 from the MD5 digest of a name space UUID followed by a name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidx::Uuid;
    ///
    /// let x = Uuid::new_v3(&Uuid::NAMESPACE_DNS, b"php.net");
    /// assert_eq!(x.to_string(), "11a38b9a-b3da-360f-9353-a5a725514269");
    /// ```
    pub fn new_v3(namespace: &Uuid, name: &[u8]) -> Self {
        Self::pack(hash_name::<Md5>(namespace, name), 3)
    }

    /// Creates a UUIDv5 from the SHA-1 digest of a name space UUID followed by a name.
    ///
    /// Only the leading 16 bytes of the 20-byte digest are used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidx::Uuid;
    ///
    /// let x = Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"php.net");
    /// assert_eq!(x.to_string(), "c4a760a8-dbcf-5254-a0d9-6a4474bd1b62");
    /// ```
    pub fn new_v5(namespace: &Uuid, name: &[u8]) -> Self {
        Self::pack(hash_name::<Sha1>(namespace, name), 5)
    }
}

fn hash_name<D: Digest>(namespace: &Uuid, name: &[u8]) -> [u8; 16] {
    let digest = D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}

/// Generates a UUIDv3 from a textual name space UUID and a name.
///
/// The name space may be written in any form [`Uuid`] parses, e.g. braced or `urn:uuid:`
/// prefixed.
///
/// # Examples
///
/// ```rust
/// let x = uuidx::uuid3("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "php.net")?;
/// assert_eq!(x.to_string(), "11a38b9a-b3da-360f-9353-a5a725514269");
/// assert!(uuidx::uuid3("invalid", "php.net").is_err());
/// # Ok::<(), uuidx::ParseError>(())
/// ```
pub fn uuid3(namespace: &str, name: impl AsRef<[u8]>) -> Result<Uuid, ParseError> {
    Ok(Uuid::new_v3(&namespace.parse()?, name.as_ref()))
}

/// Generates a UUIDv5 from a textual name space UUID and a name.
///
/// # Examples
///
/// ```rust
/// let x = uuidx::uuid5("{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}", "php.net")?;
/// assert_eq!(x.to_string(), "c4a760a8-dbcf-5254-a0d9-6a4474bd1b62");
/// # Ok::<(), uuidx::ParseError>(())
/// ```
pub fn uuid5(namespace: &str, name: impl AsRef<[u8]>) -> Result<Uuid, ParseError> {
    Ok(Uuid::new_v5(&namespace.parse()?, name.as_ref()))
}
