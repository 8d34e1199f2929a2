//! Winnowing document fingerprints.
//!
//! This crate stitches sanitization, k-gram hashing and winnowing together
//! behind a single [`Fingerprinter`]:
//!
//! ```text
//! raw text ─▶ sanitize ─▶ k-gram rolling hashes ─▶ winnow ─▶ [(hash, position)]
//! ```
//!
//! Two documents that share a run of at least `kgram_len + window_len - 1`
//! sanitized characters are guaranteed to share a fingerprint hash.
//! Comparing or scoring fingerprint sets is left to the caller.
//!
//! ```
//! use winnowfp::{FingerprintConfig, Fingerprinter};
//!
//! let fp = Fingerprinter::new(
//!     FingerprintConfig::new().with_kgram_len(5).with_window_len(4),
//! )?;
//! let prints = fp.generate("A do run run run, a do run run");
//!
//! assert_eq!(prints.len(), 7);
//! assert_eq!(prints[0].position, 0);
//! # Ok::<(), winnowfp::FingerprintError>(())
//! ```

pub use canonical::{SanitizeConfig, sanitize, strip_urls, word_lengths};
pub use perceptual::{
    Fingerprint, KgramHasher, PerceptualError, WinnowConfig, WinnowedText, fingerprint_text,
    kgrams, winnow, winnow_rescan,
};

mod config;
mod fingerprinter;
mod template;

pub use crate::config::{ConfigLoadError, WinnowfpConfig};
pub use crate::fingerprinter::{
    DocumentFingerprint, FINGERPRINT_ALGORITHM, FINGERPRINT_VERSION, FingerprintConfig,
    FingerprintMeta, Fingerprinter,
};
pub use crate::template::derive_window_len;

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Errors surfaced by the fingerprinting API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// A configuration parameter is out of range.
    Config(PerceptualError),
    /// A template had no words left after sanitization, so no average word
    /// length exists.
    EmptyTemplate,
}

impl fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FingerprintError::Config(err) => write!(f, "invalid fingerprint configuration: {err}"),
            FingerprintError::EmptyTemplate => {
                write!(f, "template contains no words after sanitization")
            }
        }
    }
}

impl Error for FingerprintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FingerprintError::Config(err) => Some(err),
            FingerprintError::EmptyTemplate => None,
        }
    }
}

impl From<PerceptualError> for FingerprintError {
    fn from(value: PerceptualError) -> Self {
        FingerprintError::Config(value)
    }
}

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    fn record_sanitize(&self, latency: Duration, input_bytes: usize, sanitized_len: usize);
    fn record_hash(&self, latency: Duration, kgram_count: usize);
    fn record_winnow(&self, latency: Duration, fingerprint_count: usize);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record_sanitize(self, input_bytes: usize, sanitized_len: usize) {
        self.recorder
            .record_sanitize(self.start.elapsed(), input_bytes, sanitized_len);
    }

    pub(crate) fn record_hash(self, kgram_count: usize) {
        self.recorder.record_hash(self.start.elapsed(), kgram_count);
    }

    pub(crate) fn record_winnow(self, fingerprint_count: usize) {
        self.recorder
            .record_winnow(self.start.elapsed(), fingerprint_count);
    }
}
