//! Content hashing for the Semantic Cell Forest.
//!
//! Computes the MD5/SHA-1/SHA-256 triple over bytes, text, string lists,
//! tabular values, and arbitrary JSON values, with defined canonical forms
//! for the composite shapes.
//!
//! All digests come from established RustCrypto implementations — no custom
//! cryptography.

pub mod hasher;

pub use hasher::{hash_bytes, hash_string_list, hash_table, hash_text, hash_value};
