//! Configuration and error types for k-gram hashing and winnowing.
//!
//! The hashing and winnowing stages are a pure function of
//! `(sanitized_text, config)`. Nothing here reads the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default k-gram length in characters.
pub const DEFAULT_KGRAM_LEN: usize = 50;
/// Default winnowing window length in hashes.
pub const DEFAULT_WINDOW_LEN: usize = 100;
/// Default hash modulus: the largest signed 64-bit integer.
pub const DEFAULT_MODULO: u64 = i64::MAX as u64;
/// Default polynomial base.
pub const DEFAULT_BASE: u64 = 158;

/// Parameters for the hashing and winnowing stages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WinnowConfig {
    /// Characters per k-gram.
    ///
    /// Shared substrings shorter than this are never detected.
    pub kgram_len: usize,
    /// Hashes per winnowing window.
    ///
    /// Any shared run of at least `window_len + kgram_len - 1` characters is
    /// guaranteed to produce a common fingerprint.
    pub window_len: usize,
    /// Modulus applied to every k-gram hash. Hashes lie in `[0, modulo)`.
    pub modulo: u64,
    /// Polynomial base of the Karp-Rabin hash.
    pub base: u64,
}

impl WinnowConfig {
    /// Create a new configuration with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the k-gram length.
    pub fn with_kgram_len(mut self, kgram_len: usize) -> Self {
        self.kgram_len = kgram_len;
        self
    }

    /// Set the window length.
    pub fn with_window_len(mut self, window_len: usize) -> Self {
        self.window_len = window_len;
        self
    }

    /// Set the hash modulus.
    pub fn with_modulo(mut self, modulo: u64) -> Self {
        self.modulo = modulo;
        self
    }

    /// Set the polynomial base.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Shortest sanitized text that yields at least one fingerprint.
    pub fn min_text_len(&self) -> usize {
        self.kgram_len
            .saturating_add(self.window_len)
            .saturating_sub(1)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.kgram_len == 0 {
            return Err(PerceptualError::InvalidKgramLen {
                kgram_len: self.kgram_len,
            });
        }
        if self.window_len == 0 {
            return Err(PerceptualError::InvalidWindowLen {
                window_len: self.window_len,
            });
        }
        if self.modulo == 0 {
            return Err(PerceptualError::InvalidModulo {
                modulo: self.modulo,
            });
        }
        if self.base == 0 {
            return Err(PerceptualError::InvalidBase { base: self.base });
        }
        Ok(())
    }
}

impl Default for WinnowConfig {
    fn default() -> Self {
        Self {
            kgram_len: DEFAULT_KGRAM_LEN,
            window_len: DEFAULT_WINDOW_LEN,
            modulo: DEFAULT_MODULO,
            base: DEFAULT_BASE,
        }
    }
}

/// Errors returned by the hashing and winnowing stages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config: kgram_len must be >= 1 (got {kgram_len})")]
    InvalidKgramLen { kgram_len: usize },

    #[error("invalid config: window_len must be >= 1 (got {window_len})")]
    InvalidWindowLen { window_len: usize },

    #[error("invalid config: modulo must be >= 1 (got {modulo})")]
    InvalidModulo { modulo: u64 },

    #[error("invalid config: base must be >= 1 (got {base})")]
    InvalidBase { base: u64 },
}
