//! The semantic chunk type.
//!
//! A chunk is a portion of the data found within a cell, normally cut to
//! fit language-model limits, semantic boundaries, or logical sub-grouping.
//! Where the chunk boundaries come from is the caller's business — the
//! model only stores what it is given.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use scf_types::{BoundingBox, HashTriple, Md5Digest, Sha1Digest, Sha256Digest};

/// Unique identifier for a chunk (random UUID v4).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkId(Uuid);

impl ChunkId {
    /// Generate a new random chunk ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short representation (first 8 characters).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkId({})", self.short_id())
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two content shapes a chunk can hold.
///
/// "Neither assigned" is represented by the owning chunk's `Option`, not by
/// a separate empty variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum ChunkContent {
    /// Plain text.
    Text(String),
    /// Raw binary data, hex-encoded on the wire.
    Binary(#[serde(with = "hex::serde")] Vec<u8>),
}

impl ChunkContent {
    /// Returns `true` when the content carries no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Binary(data) => data.is_empty(),
        }
    }

    /// Character length for text, byte length for binary.
    pub fn content_length(&self) -> usize {
        match self {
            Self::Text(text) => text.chars().count(),
            Self::Binary(data) => data.len(),
        }
    }

    /// Hash triple of the content.
    pub fn hash_triple(&self) -> HashTriple {
        match self {
            Self::Text(text) => scf_hash::hash_text(text),
            Self::Binary(data) => scf_hash::hash_bytes(data),
        }
    }
}

/// A portion of a cell's content, sized for downstream processing.
///
/// Chunks carry position and offset metadata, the digest triple of their
/// content, and an externally-produced embedding vector. Start/end offsets
/// are caller-assigned and not validated against the owning cell's length.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Chunk {
    /// Process-unique identifier, fixed at construction.
    id: ChunkId,
    /// UTC timestamp from creation.
    created_utc: DateTime<Utc>,
    /// The active content, absent when neither shape is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<ChunkContent>,
    /// Digests of the active content, absent alongside it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hashes: Option<HashTriple>,
    /// Canonical content length.
    length: usize,
    /// Ordinal index among the owning cell's chunks.
    pub position: usize,
    /// Offset of the first covered unit of the owning cell's content.
    pub start: usize,
    /// Offset of the last covered unit of the owning cell's content.
    pub end: usize,
    /// Geometry for chunks tied to spatial source content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Embedding vector, produced externally and merely stored here.
    #[serde(default)]
    pub embeddings: Vec<f32>,
    /// Opaque caller-supplied metadata, not interpreted by the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Chunk {
    /// Create a chunk with no content, a fresh random identity and the
    /// current timestamp.
    pub fn new() -> Self {
        Self {
            id: ChunkId::new(),
            created_utc: Utc::now(),
            content: None,
            hashes: None,
            length: 0,
            position: 0,
            start: 0,
            end: 0,
            bounding_box: None,
            embeddings: Vec::new(),
            metadata: None,
        }
    }

    /// This chunk's identifier.
    pub fn id(&self) -> ChunkId {
        self.id
    }

    /// UTC timestamp from creation.
    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }

    /// The active content.
    pub fn content(&self) -> Option<&ChunkContent> {
        self.content.as_ref()
    }

    /// The digest triple, absent while no content is assigned.
    pub fn hashes(&self) -> Option<&HashTriple> {
        self.hashes.as_ref()
    }

    /// MD5 digest of the active content.
    pub fn md5(&self) -> Option<&Md5Digest> {
        self.hashes.as_ref().map(|h| &h.md5)
    }

    /// SHA-1 digest of the active content.
    pub fn sha1(&self) -> Option<&Sha1Digest> {
        self.hashes.as_ref().map(|h| &h.sha1)
    }

    /// SHA-256 digest of the active content.
    pub fn sha256(&self) -> Option<&Sha256Digest> {
        self.hashes.as_ref().map(|h| &h.sha256)
    }

    /// Canonical content length; zero while no content is assigned.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Text content when the text shape is active.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(ChunkContent::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Binary data when the binary shape is active.
    pub fn binary(&self) -> Option<&[u8]> {
        match &self.content {
            Some(ChunkContent::Binary(data)) => Some(data),
            _ => None,
        }
    }

    /// Assign text content. Empty text clears the content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.assign(Some(ChunkContent::Text(text.into())));
    }

    /// Assign binary content. Empty data clears the content.
    pub fn set_binary(&mut self, data: Vec<u8>) {
        self.assign(Some(ChunkContent::Binary(data)));
    }

    /// Remove the content together with the hash triple and length.
    pub fn clear_content(&mut self) {
        self.assign(None);
    }

    fn assign(&mut self, content: Option<ChunkContent>) {
        self.hashes = None;
        self.length = 0;
        self.content = None;

        let Some(content) = content else {
            return;
        };
        if content.is_empty() {
            return;
        }

        self.length = content.content_length();
        self.hashes = Some(content.hash_triple());
        debug!(
            chunk = %self.id.short_id(),
            length = self.length,
            "assigned chunk content"
        );
        self.content = Some(content);
    }

    /// The value written into hash-based containers: the leading four
    /// SHA-256 bytes read little-endian, or `0` while no content is
    /// assigned.
    pub fn hash_code(&self) -> u32 {
        self.hashes.as_ref().map_or(0, |h| h.sha256.leading_u32())
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

/// Content-addressed equality, exactly as for cells: both sides must carry
/// a SHA-256 digest and the digests must match. `Eq` is deliberately not
/// implemented.
impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        match (self.sha256(), other.sha256()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for Chunk {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_chunk(content: &str) -> Chunk {
        let mut chunk = Chunk::new();
        chunk.set_text(content);
        chunk
    }

    #[test]
    fn new_chunk_has_no_content() {
        let chunk = Chunk::new();
        assert_eq!(chunk.content(), None);
        assert_eq!(chunk.hashes(), None);
        assert_eq!(chunk.length(), 0);
        assert!(chunk.embeddings.is_empty());
    }

    #[test]
    fn set_text_computes_hashes_and_length() {
        let chunk = text_chunk("chunk text");
        assert_eq!(chunk.text(), Some("chunk text"));
        assert_eq!(chunk.length(), 10);
        assert_eq!(chunk.hashes(), Some(&scf_hash::hash_text("chunk text")));
    }

    #[test]
    fn set_binary_replaces_text() {
        let mut chunk = text_chunk("text first");
        chunk.set_binary(vec![0xab, 0xcd]);
        assert_eq!(chunk.text(), None);
        assert_eq!(chunk.binary(), Some(&[0xab_u8, 0xcd][..]));
        assert_eq!(chunk.length(), 2);
        assert_eq!(chunk.hashes(), Some(&scf_hash::hash_bytes(&[0xab, 0xcd])));
    }

    #[test]
    fn empty_text_clears_content() {
        let mut chunk = text_chunk("something");
        chunk.set_text("");
        assert_eq!(chunk.content(), None);
        assert_eq!(chunk.hashes(), None);
        assert_eq!(chunk.length(), 0);
    }

    #[test]
    fn clear_content_resets_everything() {
        let mut chunk = text_chunk("something");
        chunk.clear_content();
        assert_eq!(chunk.content(), None);
        assert_eq!(chunk.hashes(), None);
        assert_eq!(chunk.length(), 0);
    }

    #[test]
    fn offsets_are_caller_assigned() {
        let mut chunk = text_chunk("abc");
        chunk.position = 4;
        chunk.start = 100;
        chunk.end = 102;
        // No validation against any cell length.
        assert_eq!((chunk.position, chunk.start, chunk.end), (4, 100, 102));
    }

    #[test]
    fn equality_is_content_addressed() {
        let a = text_chunk("same");
        let b = text_chunk("same");
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
        assert_ne!(text_chunk("same"), text_chunk("other"));
    }

    #[test]
    fn contentless_chunks_are_never_equal() {
        let a = Chunk::new();
        let b = Chunk::new();
        assert_ne!(a, b);
        assert!(a != a);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn serde_roundtrip_preserves_hashes_and_embeddings() {
        let mut chunk = text_chunk("roundtrip");
        chunk.position = 1;
        chunk.start = 10;
        chunk.end = 18;
        chunk.embeddings = vec![0.1, -0.2, 0.3];

        let json = serde_json::to_string(&chunk).unwrap();
        let parsed: Chunk = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id(), chunk.id());
        assert_eq!(parsed.text(), Some("roundtrip"));
        assert_eq!(parsed.hashes(), chunk.hashes());
        assert_eq!(parsed.embeddings, chunk.embeddings);
        assert_eq!((parsed.position, parsed.start, parsed.end), (1, 10, 18));
    }

    #[test]
    fn serde_omits_absent_fields() {
        let chunk = Chunk::new();
        let json = serde_json::to_string(&chunk).unwrap();
        assert!(!json.contains("content"));
        assert!(!json.contains("hashes"));
        assert!(!json.contains("bounding_box"));
        assert!(!json.contains("metadata"));
    }
}
