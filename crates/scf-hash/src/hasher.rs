use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use scf_types::{HashTriple, Md5Digest, Sha1Digest, Sha256Digest, Table};

/// Hash raw bytes.
///
/// Empty input hashes as the digests of zero bytes, not an error.
pub fn hash_bytes(data: &[u8]) -> HashTriple {
    HashTriple {
        md5: Md5Digest::from_bytes(Md5::digest(data).into()),
        sha1: Sha1Digest::from_bytes(Sha1::digest(data).into()),
        sha256: Sha256Digest::from_bytes(Sha256::digest(data).into()),
    }
}

/// Hash text as its UTF-8 bytes.
pub fn hash_text(text: &str) -> HashTriple {
    hash_bytes(text.as_bytes())
}

/// Hash a list of strings joined with an embedded NUL separator between
/// elements (no trailing separator), as text.
///
/// An empty list short-circuits to `None` rather than producing the digest
/// of the empty string — the two cases are deliberately distinct and must
/// not be conflated by callers.
pub fn hash_string_list(items: &[String]) -> Option<HashTriple> {
    if items.is_empty() {
        return None;
    }
    Some(hash_text(&items.join("\0")))
}

/// Hash a tabular value via its canonical text form.
///
/// The canonical form is every column name in declared order, each followed
/// by a NUL byte, then every row's cell text in column order (the literal
/// `NULL` stands in for a missing cell), each followed by a NUL byte.
pub fn hash_table(table: &Table) -> HashTriple {
    hash_text(&canonical_table_text(table))
}

/// Hash an arbitrary JSON value.
///
/// `Null` hashes as the digests of zero bytes and strings hash by the text
/// rule; any other value hashes as its compact JSON text. Byte sequences,
/// tables, and string lists have their own typed entry points.
pub fn hash_value(value: &serde_json::Value) -> HashTriple {
    match value {
        serde_json::Value::Null => hash_bytes(&[]),
        serde_json::Value::String(text) => hash_text(text),
        other => hash_text(&other.to_string()),
    }
}

fn canonical_table_text(table: &Table) -> String {
    let mut out = String::new();

    for column in table.columns() {
        out.push_str(column);
        out.push('\0');
    }

    for row in table.rows() {
        for value in row {
            out.push_str(value.as_deref().unwrap_or("NULL"));
            out.push('\0');
        }
    }

    out
}
