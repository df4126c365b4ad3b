//! Traversal, counting, filtering and deduplication over forests of cells.
//!
//! Every operation takes a forest — an ordered slice of root cells — and
//! traverses it pre-order, depth-first, preserving sibling order. Nothing
//! here mutates the structure. The lazy sequences are explicit-stack
//! iterators; each call builds a fresh traversal, so re-invoking an
//! operation restarts it from scratch. An empty forest yields zero elements
//! everywhere; only the SHA-256 lookup rejects its argument.

use std::collections::HashSet;
use std::slice;

use scf_types::Sha256Digest;

use crate::cell::Cell;
use crate::chunk::Chunk;
use crate::error::{ForestError, ForestResult};

/// Iterate every cell in the forest, parent before children, in sibling
/// order.
pub fn cells(forest: &[Cell]) -> Cells<'_> {
    Cells {
        stack: vec![forest.iter()],
    }
}

/// Iterate the cells whose own chunk list is non-empty.
///
/// A qualifying cell's children are still traversed, so qualifying
/// descendants beneath it are found too.
pub fn cells_with_chunks(forest: &[Cell]) -> impl Iterator<Item = &Cell> {
    cells(forest).filter(|cell| !cell.chunks.is_empty())
}

/// Iterate every chunk owned directly by any cell in the forest: for each
/// cell in pre-order, its own chunks in stored order, then its descendants.
pub fn chunks(forest: &[Cell]) -> Chunks<'_> {
    Chunks {
        cells: cells(forest),
        current: [].iter(),
    }
}

/// Iterate the chunks whose SHA-256 digest equals `target`, compared byte
/// for byte.
///
/// The target must be a full 32-byte digest; an empty or mis-sized key is
/// rejected up front. A digest absent from the forest yields an empty
/// sequence, not an error.
pub fn chunks_by_sha256<'a>(
    forest: &'a [Cell],
    target: &[u8],
) -> ForestResult<impl Iterator<Item = &'a Chunk>> {
    if target.is_empty() {
        return Err(ForestError::EmptyTargetDigest);
    }
    let target: [u8; 32] = target
        .try_into()
        .map_err(|_| ForestError::TargetDigestLength(target.len()))?;
    let target = Sha256Digest::from_bytes(target);

    Ok(chunks(forest).filter(move |chunk| chunk.sha256() == Some(&target)))
}

/// Collected counterpart of [`cells_with_chunks`].
pub fn find_cells_with_chunks(forest: &[Cell]) -> Vec<&Cell> {
    cells_with_chunks(forest).collect()
}

// ---------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------

/// Total number of cells in the forest, descendants included.
pub fn count_cells(forest: &[Cell]) -> usize {
    cells(forest).count()
}

/// Total number of chunks across all cells, descendants included.
pub fn count_chunks(forest: &[Cell]) -> usize {
    cells(forest).map(|cell| cell.chunks.len()).sum()
}

/// Sum of every chunk's embedding-vector length.
pub fn count_embeddings(forest: &[Cell]) -> usize {
    chunks(forest).map(|chunk| chunk.embeddings.len()).sum()
}

/// Sum of every cell's and every chunk's own length.
///
/// The double counting is intentional: a parent cell's length and its
/// chunks' lengths are independent quantities and both are included.
pub fn count_bytes(forest: &[Cell]) -> usize {
    let cell_bytes: usize = cells(forest).map(Cell::length).sum();
    let chunk_bytes: usize = chunks(forest).map(Chunk::length).sum();
    cell_bytes + chunk_bytes
}

/// Unique, non-empty chunk SHA-256 digests across the forest.
///
/// Order is first-seen during the pre-order traversal, so it is stable for
/// a fixed input.
pub fn distinct_sha256(forest: &[Cell]) -> Vec<Sha256Digest> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for chunk in chunks(forest) {
        if let Some(digest) = chunk.sha256() {
            if seen.insert(*digest) {
                out.push(*digest);
            }
        }
    }

    out
}

// ---------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------

/// Pre-order, depth-first cell iterator.
///
/// Keeps an explicit stack of sibling cursors. Pushing a visited cell's
/// children on top keeps parents ahead of descendants while preserving
/// sibling order.
pub struct Cells<'a> {
    stack: Vec<slice::Iter<'a, Cell>>,
}

impl<'a> Iterator for Cells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<&'a Cell> {
        while let Some(siblings) = self.stack.last_mut() {
            if let Some(cell) = siblings.next() {
                self.stack.push(cell.children.iter());
                return Some(cell);
            }
            self.stack.pop();
        }
        None
    }
}

/// Chunk iterator following the cell pre-order: each visited cell's own
/// chunks drain in stored order before the traversal descends further.
pub struct Chunks<'a> {
    cells: Cells<'a>,
    current: slice::Iter<'a, Chunk>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a Chunk;

    fn next(&mut self) -> Option<&'a Chunk> {
        loop {
            if let Some(chunk) = self.current.next() {
                return Some(chunk);
            }
            let cell = self.cells.next()?;
            self.current = cell.chunks.iter();
        }
    }
}
