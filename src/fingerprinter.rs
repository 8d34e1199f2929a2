//! The [`Fingerprinter`]: one immutable configuration, reused across
//! documents.

use std::time::Instant;

use canonical::{SanitizeConfig, sanitize};
use perceptual::{
    DEFAULT_BASE, DEFAULT_KGRAM_LEN, DEFAULT_MODULO, DEFAULT_WINDOW_LEN, Fingerprint,
    KgramHasher, PerceptualError, WinnowConfig, winnow,
};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, warn};

use crate::{FingerprintError, MetricsSpan};

/// Current fingerprint algorithm version.
///
/// Bump whenever sanitization, hashing or selection changes in a way that
/// alters output for any input.
pub const FINGERPRINT_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const FINGERPRINT_ALGORITHM: &str = "karprabin_winnow_v1";

/// Full configuration of a fingerprinter.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Characters per k-gram.
    pub kgram_len: usize,
    /// Hashes per winnowing window.
    pub window_len: usize,
    /// Hash modulus; hashes lie in `[0, modulo)`.
    pub modulo: u64,
    /// Polynomial base of the rolling hash.
    pub base: u64,
    /// Keep spaces during sanitization.
    pub allow_space: bool,
}

impl FingerprintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kgram_len(mut self, kgram_len: usize) -> Self {
        self.kgram_len = kgram_len;
        self
    }

    pub fn with_window_len(mut self, window_len: usize) -> Self {
        self.window_len = window_len;
        self
    }

    pub fn with_modulo(mut self, modulo: u64) -> Self {
        self.modulo = modulo;
        self
    }

    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    pub fn with_allow_space(mut self, allow_space: bool) -> Self {
        self.allow_space = allow_space;
        self
    }

    /// Parameters of the hashing and winnowing stages.
    pub fn winnow_config(&self) -> WinnowConfig {
        WinnowConfig {
            kgram_len: self.kgram_len,
            window_len: self.window_len,
            modulo: self.modulo,
            base: self.base,
        }
    }

    /// Parameters of the sanitization stage.
    pub fn sanitize_config(&self) -> SanitizeConfig {
        SanitizeConfig {
            allow_space: self.allow_space,
        }
    }

    pub fn validate(&self) -> Result<(), PerceptualError> {
        self.winnow_config().validate()
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            kgram_len: DEFAULT_KGRAM_LEN,
            window_len: DEFAULT_WINDOW_LEN,
            modulo: DEFAULT_MODULO,
            base: DEFAULT_BASE,
            allow_space: false,
        }
    }
}

/// Provenance recorded alongside a [`DocumentFingerprint`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintMeta {
    pub fingerprint_version: u16,
    pub algorithm_name: String,
    pub config: FingerprintConfig,
}

/// Fingerprints of one document together with the intermediate hash stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentFingerprint {
    /// Length of the sanitized text in characters.
    pub sanitized_len: usize,
    /// One hash per k-gram of the sanitized text.
    pub hashes: Vec<u64>,
    /// Winnowed fingerprints, ordered by position.
    pub fingerprints: Vec<Fingerprint>,
    pub meta: FingerprintMeta,
}

/// Computes winnowing fingerprints for documents.
///
/// Holds no per-document state, so one instance can be shared across
/// threads and reused indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprinter {
    config: FingerprintConfig,
    hasher: KgramHasher,
}

impl Fingerprinter {
    /// Validate `config` and build a fingerprinter around it.
    pub fn new(config: FingerprintConfig) -> Result<Self, FingerprintError> {
        match KgramHasher::new(&config.winnow_config()) {
            Ok(hasher) => Ok(Self { config, hasher }),
            Err(err) => {
                warn!(error = %err, ?config, "fingerprinter_config_rejected");
                Err(FingerprintError::Config(err))
            }
        }
    }

    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// Shortest sanitized text that yields at least one fingerprint.
    ///
    /// Shorter documents are not an error: [`generate`](Self::generate)
    /// returns an empty sequence for them.
    pub fn min_text_len(&self) -> usize {
        self.config.winnow_config().min_text_len()
    }

    /// Sanitize `text` with this fingerprinter's space policy.
    pub fn sanitize(&self, text: &str) -> String {
        sanitize(text, &self.config.sanitize_config())
    }

    /// Fingerprint `text`: sanitize, hash every k-gram, winnow.
    pub fn generate(&self, text: &str) -> Vec<Fingerprint> {
        self.run(text).fingerprints
    }

    /// Like [`generate`](Self::generate), but also returns the hash stream
    /// and provenance metadata.
    pub fn fingerprint_document(&self, text: &str) -> DocumentFingerprint {
        self.run(text)
    }

    /// Fingerprint many documents, preserving input order.
    ///
    /// Documents are spread over rayon's global pool when the `parallel`
    /// feature is enabled.
    pub fn generate_batch<S>(&self, texts: &[S]) -> Vec<Vec<Fingerprint>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            texts
                .par_iter()
                .map(|text| self.generate(text.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            texts
                .iter()
                .map(|text| self.generate(text.as_ref()))
                .collect()
        }
    }

    fn run(&self, text: &str) -> DocumentFingerprint {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "winnowfp.generate",
            input_len = text.len(),
            kgram_len = self.config.kgram_len,
            window_len = self.config.window_len
        );
        let _guard = span.enter();

        let sanitize_metrics = MetricsSpan::start();
        let sanitized = self.sanitize(text);
        // Sanitized text is ASCII, so bytes and characters coincide.
        let sanitized_len = sanitized.len();
        if let Some(span) = sanitize_metrics {
            span.record_sanitize(text.len(), sanitized_len);
        }

        if sanitized_len < self.min_text_len() {
            debug!(
                sanitized_len,
                min_text_len = self.min_text_len(),
                "text_too_short_for_window"
            );
        }

        let hash_metrics = MetricsSpan::start();
        let hashes = self.hasher.hash_text(&sanitized);
        if let Some(span) = hash_metrics {
            span.record_hash(hashes.len());
        }

        let winnow_metrics = MetricsSpan::start();
        let fingerprints = winnow(&hashes, self.config.window_len);
        if let Some(span) = winnow_metrics {
            span.record_winnow(fingerprints.len());
        }

        info!(
            sanitized_len,
            kgram_count = hashes.len(),
            fingerprint_count = fingerprints.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "fingerprint_success"
        );

        DocumentFingerprint {
            sanitized_len,
            hashes,
            fingerprints,
            meta: FingerprintMeta {
                fingerprint_version: FINGERPRINT_VERSION,
                algorithm_name: FINGERPRINT_ALGORITHM.to_string(),
                config: self.config,
            },
        }
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self {
            config: FingerprintConfig::default(),
            hasher: KgramHasher::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NURSERY: &str = "A do run run run, a do run run";

    fn small() -> Fingerprinter {
        Fingerprinter::new(FingerprintConfig::new().with_kgram_len(5).with_window_len(4))
            .expect("valid config")
    }

    #[test]
    fn default_config_values() {
        let cfg = FingerprintConfig::default();
        assert_eq!(cfg.kgram_len, 50);
        assert_eq!(cfg.window_len, 100);
        assert_eq!(cfg.modulo, i64::MAX as u64);
        assert_eq!(cfg.base, 158);
        assert!(!cfg.allow_space);
    }

    #[test]
    fn default_fingerprinter_matches_new_with_defaults() {
        let built = Fingerprinter::new(FingerprintConfig::default()).unwrap();
        assert_eq!(built, Fingerprinter::default());
    }

    #[test]
    fn rejects_invalid_config() {
        let err = Fingerprinter::new(FingerprintConfig::new().with_kgram_len(0)).unwrap_err();
        assert_eq!(
            err,
            FingerprintError::Config(PerceptualError::InvalidKgramLen { kgram_len: 0 })
        );
        assert!(Fingerprinter::new(FingerprintConfig::new().with_base(0)).is_err());
        assert!(Fingerprinter::new(FingerprintConfig::new().with_modulo(0)).is_err());
        assert!(Fingerprinter::new(FingerprintConfig::new().with_window_len(0)).is_err());
    }

    #[test]
    fn nursery_rhyme_fingerprints() {
        let fps: Vec<(u64, usize)> = small()
            .generate(NURSERY)
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(
            fps,
            vec![
                (639355869, 0),
                (2552422548, 1),
                (8796342234, 5),
                (8796342217, 8),
                (8728864700, 11),
                (639355869, 12),
                (2552422548, 13),
            ]
        );
    }

    #[test]
    fn document_fingerprint_carries_intermediates() {
        let doc = small().fingerprint_document(NURSERY);
        assert_eq!(doc.sanitized_len, 21);
        assert_eq!(doc.hashes.len(), 17);
        assert_eq!(doc.fingerprints.len(), 7);
        assert_eq!(doc.meta.fingerprint_version, FINGERPRINT_VERSION);
        assert_eq!(doc.meta.algorithm_name, FINGERPRINT_ALGORITHM);
        assert_eq!(doc.meta.config.kgram_len, 5);
    }

    #[test]
    fn short_text_yields_empty_sequence() {
        let fp = small();
        assert_eq!(fp.min_text_len(), 8);
        assert!(fp.generate("").is_empty());
        assert!(fp.generate("abc").is_empty());
        assert!(fp.generate("a-b-c-d-e-f-g").is_empty());
        assert_eq!(fp.generate("abcdefgh").len(), 1);
    }

    #[test]
    fn default_fingerprinter_needs_long_text() {
        let fp = Fingerprinter::default();
        assert!(fp.generate(NURSERY).is_empty());
        let long = "the quick brown fox jumps over the lazy dog ".repeat(10);
        assert!(!fp.generate(&long).is_empty());
    }

    #[test]
    fn allow_space_changes_hash_stream() {
        let text = "one two three four five six seven";
        let compact = small().fingerprint_document(text);
        let spaced = Fingerprinter::new(
            FingerprintConfig::new()
                .with_kgram_len(5)
                .with_window_len(4)
                .with_allow_space(true),
        )
        .unwrap()
        .fingerprint_document(text);
        assert_eq!(compact.sanitized_len, 27);
        assert_eq!(spaced.sanitized_len, 33);
        assert_ne!(compact.hashes, spaced.hashes);
    }

    #[test]
    fn batch_preserves_order() {
        let fp = small();
        let docs = [NURSERY, "", "completely different words here"];
        let batch = fp.generate_batch(&docs);
        assert_eq!(batch.len(), 3);
        for (doc, fps) in docs.iter().zip(&batch) {
            assert_eq!(&fp.generate(doc), fps);
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: FingerprintConfig = serde_json::from_str(r#"{"kgram_len": 7}"#).unwrap();
        assert_eq!(cfg, FingerprintConfig::new().with_kgram_len(7));
    }
}
