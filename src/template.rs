//! Sizing k-grams and windows from a sample of the target corpus.
//!
//! Documents with long words need longer k-grams before a match means
//! anything. The heuristic takes half the mean word length of a template
//! document as both the k-gram and the window length.

use canonical::word_lengths;
use tracing::info;

use crate::{FingerprintConfig, FingerprintError, Fingerprinter};

/// Half of the floored mean word length, or `None` for an empty slice.
pub fn derive_window_len(word_lengths: &[usize]) -> Option<usize> {
    if word_lengths.is_empty() {
        return None;
    }
    let total: usize = word_lengths.iter().sum();
    let average_len = total / word_lengths.len();
    Some(average_len / 2)
}

impl Fingerprinter {
    /// Build a fingerprinter whose `kgram_len` and `window_len` are derived
    /// from the average word length of `template`.
    ///
    /// `modulo`, `base` and `allow_space` are inherited from `self`. Fails
    /// with [`FingerprintError::EmptyTemplate`] when the template has no
    /// words after URL and punctuation stripping, and with
    /// [`FingerprintError::Config`] when its words are so short that the
    /// derived length is zero.
    pub fn derive_from_template(&self, template: &str) -> Result<Fingerprinter, FingerprintError> {
        let lengths = word_lengths(template);
        let len = derive_window_len(&lengths).ok_or(FingerprintError::EmptyTemplate)?;

        info!(
            word_count = lengths.len(),
            kgram_len = len,
            window_len = len,
            "template_derived"
        );

        let config = FingerprintConfig {
            kgram_len: len,
            window_len: len,
            ..*self.config()
        };
        Fingerprinter::new(config)
    }
}
