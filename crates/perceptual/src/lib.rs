//! # winnowfp hashing and winnowing
//!
//! Turns sanitized text into a sparse, position-tagged fingerprint set.
//!
//! ## Contract
//!
//! - Input is text that has already been through the sanitization layer.
//!   This crate never filters or lowercases.
//! - The API is a pure function of `(sanitized_text, config)`: no I/O, no
//!   clocks, no global state.
//!
//! Invariant: for the same sanitized text and the same [`WinnowConfig`], the
//! fingerprints are bit identical across runs, machines and instances.
//!
//! ## Pipeline
//!
//! 1.  **K-gram hashing**: every run of `kgram_len` characters is hashed with
//!     a Karp-Rabin polynomial hash, updated in O(1) per shift.
//! 2.  **Winnowing**: a window of `window_len` hashes slides over the hash
//!     stream; each window elects its rightmost minimum, tracked with a
//!     monotonic deque. Adjacent duplicates are suppressed.
//!
//! Any substring of length `kgram_len + window_len - 1` shared by two
//! documents yields at least one common fingerprint hash.
//!
//! ## Example
//!
//! ```
//! use perceptual::{fingerprint_text, WinnowConfig};
//!
//! let cfg = WinnowConfig::new().with_kgram_len(5).with_window_len(4);
//! let out = fingerprint_text("adorunrunrunadorunrun", &cfg).unwrap();
//!
//! assert_eq!(out.hashes.len(), 17);
//! assert_eq!(out.fingerprints.len(), 7);
//! assert!(out
//!     .fingerprints
//!     .iter()
//!     .all(|fp| out.hashes[fp.position] == fp.hash));
//! ```

pub mod config;
pub mod fingerprint;
mod kgram;
mod winnow;

pub use crate::config::{
    PerceptualError, WinnowConfig, DEFAULT_BASE, DEFAULT_KGRAM_LEN, DEFAULT_MODULO,
    DEFAULT_WINDOW_LEN,
};
pub use crate::fingerprint::Fingerprint;
pub use crate::kgram::{char_value, kgrams, KgramHasher};
pub use crate::winnow::{winnow, winnow_rescan};

/// Hash stream and selected fingerprints for one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnowedText {
    /// One hash per k-gram.
    pub hashes: Vec<u64>,
    /// Winnowed fingerprints, ordered by position.
    pub fingerprints: Vec<Fingerprint>,
}

/// Hash and winnow sanitized text in one call.
///
/// Text too short for a single window yields empty output, not an error.
pub fn fingerprint_text(text: &str, cfg: &WinnowConfig) -> Result<WinnowedText, PerceptualError> {
    let hasher = KgramHasher::new(cfg)?;
    let hashes = hasher.hash_text(text);
    let fingerprints = winnow(&hashes, cfg.window_len);
    Ok(WinnowedText {
        hashes,
        fingerprints,
    })
}
