//! Fingerprint type produced by the winnowing stage.
//!
//! The field layout is part of the public contract: consumers persist these
//! pairs and intersect them across documents.

use serde::{Deserialize, Serialize};

/// A selected k-gram hash together with the index of the k-gram it came
/// from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// K-gram hash value, in `[0, modulo)`.
    pub hash: u64,
    /// Index into the k-gram (and hash) sequence. Also the character offset
    /// of the k-gram in the sanitized text.
    pub position: usize,
}

impl Fingerprint {
    pub fn new(hash: u64, position: usize) -> Self {
        Self { hash, position }
    }
}

impl From<(u64, usize)> for Fingerprint {
    fn from((hash, position): (u64, usize)) -> Self {
        Self { hash, position }
    }
}

impl From<Fingerprint> for (u64, usize) {
    fn from(fp: Fingerprint) -> Self {
        (fp.hash, fp.position)
    }
}
