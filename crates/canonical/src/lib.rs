//! winnowfp sanitization layer.
//!
//! Reduces raw text to the alphabet the k-gram hasher works over. Downstream
//! stages rely on this output being pure ASCII.
//!
//! ## What we do
//!
//! - Strip `http://`, `https://` and `ftp://` URLs
//! - Drop every character outside `[A-Za-z0-9_]` (optionally keeping spaces),
//!   including `[` and `]`
//! - Lowercase
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale. The filter patterns are compiled once
//! per process and shared. Same text and config, same output.
//!
//! ```
//! use canonical::{sanitize, SanitizeConfig};
//!
//! let out = sanitize("A do run run run, a do run run", &SanitizeConfig::default());
//! assert_eq!(out, "adorunrunrunadorunrun");
//! ```

mod config;
mod patterns;
mod pipeline;

pub use crate::config::SanitizeConfig;
pub use crate::pipeline::{sanitize, strip_urls, word_lengths};
