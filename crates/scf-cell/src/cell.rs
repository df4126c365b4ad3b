//! The semantic cell node type.
//!
//! A cell holds exactly one typed payload (or none), an automatically
//! maintained hash triple and content length, and owns its child cells and
//! chunks exclusively — the hierarchy is a strict tree with no aliasing,
//! back-references, or cycles.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use scf_types::{BoundingBox, HashTriple, Md5Digest, Sha1Digest, Sha256Digest, Table};

use crate::chunk::Chunk;
use crate::payload::{Payload, PayloadKind};

/// Unique identifier for a cell (random UUID v4).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(Uuid);

impl CellId {
    /// Generate a new random cell ID.
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

impl Default for CellId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({})", self.short_id())
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node that contains semantically-correlated data.
///
/// Cells nest into a hierarchy through [`children`](Cell::children) and
/// their content can be chunked into [`chunks`](Cell::chunks). Assigning a
/// payload clears and recomputes the node's hash triple and length; the
/// mutation never propagates to children or chunks. Cells are not safe for
/// concurrent mutation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// Process-unique identifier, fixed at construction.
    id: CellId,
    /// UTC timestamp from creation.
    created_utc: DateTime<Utc>,
    /// The active payload.
    #[serde(default, skip_serializing_if = "Payload::is_empty")]
    payload: Payload,
    /// Digests of the active payload, absent while the payload is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hashes: Option<HashTriple>,
    /// Canonical content length of the active payload.
    length: usize,
    /// Ordinal hint for ordering among siblings. Uniqueness and contiguity
    /// are not enforced.
    pub position: usize,
    /// Geometry for cells tied to spatial source content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Child cells, owned exclusively by this cell.
    #[serde(default)]
    pub children: Vec<Cell>,
    /// Chunks owned directly by this cell (not by descendants).
    #[serde(default)]
    pub chunks: Vec<Chunk>,
    /// Opaque caller-supplied metadata, not interpreted by the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Cell {
    /// Create a cell with no payload, a fresh random identity and the
    /// current timestamp.
    pub fn new() -> Self {
        Self {
            id: CellId::new(),
            created_utc: Utc::now(),
            payload: Payload::Empty,
            hashes: None,
            length: 0,
            position: 0,
            bounding_box: None,
            children: Vec::new(),
            chunks: Vec::new(),
            metadata: None,
        }
    }

    /// This cell's identifier.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// UTC timestamp from creation.
    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }

    /// The active payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Discriminator of the active payload.
    pub fn kind(&self) -> PayloadKind {
        self.payload.kind()
    }

    /// The digest triple, absent while the payload is empty.
    pub fn hashes(&self) -> Option<&HashTriple> {
        self.hashes.as_ref()
    }

    /// MD5 digest of the active payload.
    pub fn md5(&self) -> Option<&Md5Digest> {
        self.hashes.as_ref().map(|h| &h.md5)
    }

    /// SHA-1 digest of the active payload.
    pub fn sha1(&self) -> Option<&Sha1Digest> {
        self.hashes.as_ref().map(|h| &h.sha1)
    }

    /// SHA-256 digest of the active payload.
    pub fn sha256(&self) -> Option<&Sha256Digest> {
        self.hashes.as_ref().map(|h| &h.sha256)
    }

    /// Canonical content length; zero while the payload is empty.
    pub fn length(&self) -> usize {
        self.length
    }

    // ---------------------------------------------------------------
    // Payload assignment
    // ---------------------------------------------------------------

    /// Assign a payload.
    ///
    /// Clears the hash triple, length and previous payload first; when the
    /// new value is non-empty, stores it and recomputes both. Empty values
    /// (empty text, bytes, lists, tables or arrays, or a JSON `null`) just
    /// clear.
    pub fn set_payload(&mut self, payload: Payload) {
        self.hashes = None;
        self.length = 0;
        self.payload = Payload::Empty;

        if payload.is_empty() {
            return;
        }

        self.length = payload.content_length();
        self.hashes = payload.hash_triple();
        debug!(
            cell = %self.id.short_id(),
            kind = %payload.kind(),
            length = self.length,
            "assigned payload"
        );
        self.payload = payload;
    }

    /// Assign a text payload. Empty text clears the payload.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.set_payload(Payload::Text(text.into()));
    }

    /// Assign a binary payload. Empty data clears the payload.
    pub fn set_binary(&mut self, data: Vec<u8>) {
        self.set_payload(Payload::Binary(data));
    }

    /// Assign unordered list items. An empty list clears the payload.
    pub fn set_unordered_list(&mut self, items: Vec<String>) {
        self.set_payload(Payload::UnorderedList(items));
    }

    /// Assign ordered list items. An empty list clears the payload.
    pub fn set_ordered_list(&mut self, items: Vec<String>) {
        self.set_payload(Payload::OrderedList(items));
    }

    /// Assign a tabular payload. A table with no columns and no rows clears
    /// the payload.
    pub fn set_table(&mut self, table: Table) {
        self.set_payload(Payload::Table(table));
    }

    /// Assign a JSON object payload. `Null` clears the payload.
    pub fn set_object(&mut self, value: serde_json::Value) {
        self.set_payload(Payload::Object(value));
    }

    /// Assign a JSON array payload. An empty array clears the payload.
    pub fn set_array(&mut self, values: Vec<serde_json::Value>) {
        self.set_payload(Payload::Array(values));
    }

    /// Remove the payload together with the hash triple and length.
    pub fn clear_payload(&mut self) {
        self.set_payload(Payload::Empty);
    }

    // ---------------------------------------------------------------
    // Typed accessors — the accessor of an inactive variant reads `None`
    // ---------------------------------------------------------------

    /// Text content when the text variant is active.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Binary data when the binary variant is active.
    pub fn binary(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Binary(data) => Some(data),
            _ => None,
        }
    }

    /// Unordered list items when that variant is active.
    pub fn unordered_list(&self) -> Option<&[String]> {
        match &self.payload {
            Payload::UnorderedList(items) => Some(items),
            _ => None,
        }
    }

    /// Ordered list items when that variant is active.
    pub fn ordered_list(&self) -> Option<&[String]> {
        match &self.payload {
            Payload::OrderedList(items) => Some(items),
            _ => None,
        }
    }

    /// The table when the tabular variant is active.
    pub fn table(&self) -> Option<&Table> {
        match &self.payload {
            Payload::Table(table) => Some(table),
            _ => None,
        }
    }

    /// The JSON document when the object variant is active.
    pub fn object(&self) -> Option<&serde_json::Value> {
        match &self.payload {
            Payload::Object(value) => Some(value),
            _ => None,
        }
    }

    /// The value sequence when the array variant is active.
    pub fn array(&self) -> Option<&[serde_json::Value]> {
        match &self.payload {
            Payload::Array(values) => Some(values),
            _ => None,
        }
    }

    // ---------------------------------------------------------------
    // Subtree statistics
    // ---------------------------------------------------------------

    /// Number of cells in this subtree, this cell included.
    pub fn count_cells(&self) -> usize {
        1 + self.children.iter().map(Cell::count_cells).sum::<usize>()
    }

    /// Total embedding-vector length across this subtree's chunks.
    pub fn count_embeddings(&self) -> usize {
        let own: usize = self.chunks.iter().map(|chunk| chunk.embeddings.len()).sum();
        own + self
            .children
            .iter()
            .map(Cell::count_embeddings)
            .sum::<usize>()
    }

    /// Sum of this subtree's cell and chunk lengths.
    ///
    /// A cell's own length and its chunks' lengths are independent
    /// quantities; both are included.
    pub fn count_bytes(&self) -> usize {
        let own_chunks: usize = self.chunks.iter().map(Chunk::length).sum();
        self.length + own_chunks + self.children.iter().map(Cell::count_bytes).sum::<usize>()
    }

    /// Unique chunk SHA-256 digests in this subtree, first-seen order.
    pub fn distinct_sha256(&self) -> Vec<Sha256Digest> {
        crate::forest::distinct_sha256(std::slice::from_ref(self))
    }

    /// The value written into hash-based containers: the leading four
    /// SHA-256 bytes read little-endian, or `0` while the payload is empty.
    pub fn hash_code(&self) -> u32 {
        self.hashes.as_ref().map_or(0, |h| h.sha256.leading_u32())
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

/// Content-addressed equality: two cells are equal only when both carry a
/// SHA-256 digest and the digests match byte for byte. Payload-less cells
/// compare unequal to everything, themselves included, so `Eq` is
/// deliberately not implemented.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self.sha256(), other.sha256()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
