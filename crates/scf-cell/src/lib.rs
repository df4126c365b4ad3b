//! Semantic cell model for the SCF workspace.
//!
//! A [`Cell`] is a node of semantically-correlated content: it holds one
//! typed payload, nests into a hierarchy through child cells, and its
//! content can be split into [`Chunk`]s sized for language-model
//! consumption. Payload assignment recomputes the node's MD5/SHA-1/SHA-256
//! triple and canonical length; equality is content-addressed through the
//! SHA-256 digest. The [`forest`] module provides traversal, counting,
//! filtering and deduplication over collections of cells.
//!
//! Cells and chunks are not safe for concurrent mutation; ordinary Rust
//! aliasing rules cover the single-writer model (shared `&`-traversal is
//! fine while no `&mut` exists).

pub mod cell;
pub mod chunk;
pub mod error;
pub mod forest;
pub mod payload;

pub use cell::{Cell, CellId};
pub use chunk::{Chunk, ChunkContent, ChunkId};
pub use error::{ForestError, ForestResult};
pub use payload::{Payload, PayloadKind};
