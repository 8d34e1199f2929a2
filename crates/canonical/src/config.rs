//! Configuration for the sanitization stage.
//!
//! Sanitization has a single knob: whether ASCII spaces survive the
//! character filter. Everything else (URL stripping, `[`/`]` removal,
//! lowercasing) is fixed so that fingerprints stay comparable across
//! deployments.
//!
//! ```rust
//! use canonical::SanitizeConfig;
//!
//! let config = SanitizeConfig::default();
//! assert!(!config.allow_space);
//!
//! let spaced = SanitizeConfig::with_spaces();
//! assert!(spaced.allow_space);
//! ```

use serde::{Deserialize, Serialize};

/// Controls which characters survive [`crate::sanitize`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SanitizeConfig {
    /// Keep ASCII spaces in the sanitized output.
    ///
    /// With `false` (the default) the output is a single run of
    /// `[a-z0-9_]` characters and word boundaries are lost.
    pub allow_space: bool,
}

impl SanitizeConfig {
    /// Configuration that keeps spaces between words.
    pub fn with_spaces() -> Self {
        Self { allow_space: true }
    }
}
