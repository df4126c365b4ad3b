use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Fixed-width message digest value.
///
/// `N` is the digest width in bytes; the widths used by the cell model are
/// [`Md5Digest`] (16), [`Sha1Digest`] (20) and [`Sha256Digest`] (32).
/// Identical content always produces the same digest, which is what makes
/// cells and chunks content-addressable and deduplicatable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest<const N: usize>([u8; N]);

/// MD5 digest (16 bytes).
pub type Md5Digest = Digest<16>;
/// SHA-1 digest (20 bytes).
pub type Sha1Digest = Digest<20>;
/// SHA-256 digest (32 bytes).
pub type Sha256Digest = Digest<32>;

impl<const N: usize> Digest<N> {
    /// Create a digest from a pre-computed hash.
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != N {
            return Err(TypeError::InvalidLength {
                expected: N,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; N];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The first four digest bytes as a little-endian integer.
    ///
    /// Hash-code seed for `Cell`/`Chunk` in hash-based containers.
    pub fn leading_u32(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<Digest<N>> for [u8; N] {
    fn from(digest: Digest<N>) -> Self {
        digest.0
    }
}

// Digests travel as hex strings, not byte arrays, on the wire.
impl<const N: usize> Serialize for Digest<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for Digest<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// The MD5/SHA-1/SHA-256 digests of one canonical byte representation.
///
/// A triple is computed in full whenever a cell or chunk receives a
/// non-empty payload, and cleared in full when the payload is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashTriple {
    /// MD5 digest.
    pub md5: Md5Digest,
    /// SHA-1 digest.
    pub sha1: Sha1Digest,
    /// SHA-256 digest.
    pub sha256: Sha256Digest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sha256Digest {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        Sha256Digest::from_bytes(bytes)
    }

    #[test]
    fn hex_roundtrip() {
        let digest = sample();
        let hex = digest.to_hex();
        let parsed = Sha256Digest::from_hex(&hex).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_rejects_bad_characters() {
        let result = Md5Digest::from_hex("zz");
        assert!(matches!(result, Err(TypeError::InvalidHex(_))));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        let result = Sha256Digest::from_hex("abcd");
        assert_eq!(
            result,
            Err(TypeError::InvalidLength {
                expected: 32,
                actual: 2
            })
        );
    }

    #[test]
    fn short_hex_is_8_chars() {
        assert_eq!(sample().short_hex().len(), 8);
    }

    #[test]
    fn display_is_full_hex() {
        let digest = sample();
        let display = format!("{digest}");
        assert_eq!(display.len(), 64);
        assert_eq!(display, digest.to_hex());
    }

    #[test]
    fn leading_u32_is_little_endian() {
        let digest = sample();
        // Bytes 00 01 02 03 read little-endian.
        assert_eq!(digest.leading_u32(), u32::from_le_bytes([0, 1, 2, 3]));
    }

    #[test]
    fn serde_is_hex_string() {
        let digest = sample();
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", digest.to_hex()));
        let parsed: Sha256Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn serde_rejects_wrong_width() {
        let short = "\"abcd\"";
        let parsed: Result<Sha256Digest, _> = serde_json::from_str(short);
        assert!(parsed.is_err());
    }

    #[test]
    fn ordering_is_consistent() {
        let low = Sha256Digest::from_bytes([0; 32]);
        let high = Sha256Digest::from_bytes([1; 32]);
        assert!(low < high);
    }
}
