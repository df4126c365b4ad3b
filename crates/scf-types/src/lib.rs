//! Foundation types for the Semantic Cell Forest (SCF).
//!
//! This crate provides the digest, geometry and tabular value types used
//! throughout the SCF workspace. Every other SCF crate depends on
//! `scf-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — fixed-width digest value, hex-encoded on the wire
//! - [`HashTriple`] — the MD5/SHA-1/SHA-256 triple derived from content
//! - [`BoundingBox`] — page-layout geometry with a top-left origin
//! - [`Table`] — minimal tabular value consumed by hashing and cells

pub mod digest;
pub mod error;
pub mod geometry;
pub mod table;

pub use digest::{Digest, HashTriple, Md5Digest, Sha1Digest, Sha256Digest};
pub use error::TypeError;
pub use geometry::{BoundingBox, Point};
pub use table::Table;
