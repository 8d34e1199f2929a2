//! K-gram slicing and Karp-Rabin rolling hashes.
//!
//! A k-gram is `kgram_len` consecutive characters of sanitized text. Each one
//! is read as the digits of a base-`base` number and reduced modulo
//! `modulo`:
//!
//! ```text
//! hash(g) = ( Σ charval(g[i]) * base^(k-1-i) ) mod modulo
//! charval(c) = c - 'a' + 1
//! ```
//!
//! `charval` is signed: digits, `_` and space map below 1. Every step is
//! reduced with floored modulo in `u128`, which is congruent to evaluating
//! the sum exactly and reducing once, so the result never depends on the
//! width of the intermediate integers.

use crate::config::{PerceptualError, WinnowConfig};

/// Digit value of a character in the polynomial hash.
///
/// `'a'` maps to 1 so that a leading `'a'` still contributes to the hash.
#[inline]
pub fn char_value(c: char) -> i64 {
    c as i64 - 'a' as i64 + 1
}

/// Overlapping `k`-character substrings of `text`, left to right.
///
/// Yields `len - k + 1` slices, or none when `k == 0` or the text is shorter
/// than `k` characters.
pub fn kgrams(text: &str, k: usize) -> Vec<&str> {
    if k == 0 {
        return Vec::new();
    }
    // Byte offset of every char boundary, including the end of the string.
    let mut bounds: Vec<usize> = Vec::with_capacity(text.len() + 1);
    bounds.extend(text.char_indices().map(|(idx, _)| idx));
    bounds.push(text.len());

    let char_count = bounds.len() - 1;
    if char_count < k {
        return Vec::new();
    }
    (0..=char_count - k)
        .map(|i| &text[bounds[i]..bounds[i + k]])
        .collect()
}

/// Rolling polynomial hasher for one k-gram length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KgramHasher {
    kgram_len: usize,
    modulo: u64,
    /// `base mod modulo`.
    base: u64,
    /// `base^(kgram_len - 1) mod modulo`, the weight of the leaving character.
    lead_weight: u64,
}

impl KgramHasher {
    pub fn new(cfg: &WinnowConfig) -> Result<Self, PerceptualError> {
        cfg.validate()?;
        Ok(Self::from_validated(cfg))
    }

    /// Caller guarantees `cfg.validate()` passes.
    fn from_validated(cfg: &WinnowConfig) -> Self {
        let base = cfg.base % cfg.modulo;
        Self {
            kgram_len: cfg.kgram_len,
            modulo: cfg.modulo,
            base,
            lead_weight: pow_mod(base, (cfg.kgram_len - 1) as u64, cfg.modulo),
        }
    }

    pub fn kgram_len(&self) -> usize {
        self.kgram_len
    }

    /// Hash a single k-gram from scratch.
    ///
    /// `kgram` is expected to hold exactly `kgram_len` characters; shorter
    /// input is hashed as if it were left-aligned in a k-gram.
    pub fn hash_kgram(&self, kgram: &str) -> u64 {
        let mut h = 0u64;
        let mut len = 0usize;
        for c in kgram.chars() {
            h = self.push(h, c);
            len += 1;
        }
        debug_assert!(len <= self.kgram_len, "k-gram longer than kgram_len");
        for _ in len..self.kgram_len {
            h = self.mul_mod(h, self.base);
        }
        h
    }

    /// Hash of the k-gram one position to the right of the one hashed as
    /// `prev`, given the character that leaves on the left and the one that
    /// enters on the right.
    #[inline]
    pub fn roll(&self, prev: u64, leaving: char, entering: char) -> u64 {
        let m = self.modulo as u128;
        let removed = self.mul_mod(self.residue(char_value(leaving)), self.lead_weight);
        let shifted = ((prev as u128 + m - removed as u128) % m) as u64;
        self.push(shifted, entering)
    }

    /// One hash per k-gram of `text`, in order. O(n) in the text length.
    pub fn hash_text(&self, text: &str) -> Vec<u64> {
        let chars: Vec<char> = text.chars().collect();
        let k = self.kgram_len;
        if chars.len() < k {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(chars.len() - k + 1);
        let mut h = chars[..k].iter().fold(0u64, |h, &c| self.push(h, c));
        out.push(h);
        for (&leaving, &entering) in chars.iter().zip(chars.iter().skip(k)) {
            h = self.roll(h, leaving, entering);
            out.push(h);
        }
        out
    }

    /// Hash a sequence of consecutive k-grams, as produced by [`kgrams`].
    ///
    /// Only the first k-gram is hashed from scratch; every later one is
    /// rolled from its predecessor.
    pub fn hash_kgrams<S: AsRef<str>>(&self, grams: &[S]) -> Vec<u64> {
        let Some((first, rest)) = grams.split_first() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(grams.len());
        let mut prev_gram = first.as_ref();
        let mut h = self.hash_kgram(prev_gram);
        out.push(h);
        for gram in rest {
            let gram = gram.as_ref();
            h = match (prev_gram.chars().next(), gram.chars().last()) {
                (Some(leaving), Some(entering)) => self.roll(h, leaving, entering),
                _ => self.hash_kgram(gram),
            };
            out.push(h);
            prev_gram = gram;
        }
        out
    }

    /// `(h * base + charval(c)) mod modulo`
    #[inline]
    fn push(&self, h: u64, c: char) -> u64 {
        let m = self.modulo as u128;
        ((h as u128 * self.base as u128 + self.residue(char_value(c)) as u128) % m) as u64
    }

    #[inline]
    fn residue(&self, value: i64) -> u64 {
        (value as i128).rem_euclid(self.modulo as i128) as u64
    }

    #[inline]
    fn mul_mod(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulo as u128) as u64
    }
}

impl Default for KgramHasher {
    fn default() -> Self {
        Self::from_validated(&WinnowConfig::default())
    }
}

/// Square-and-multiply `base^exp mod modulo`.
fn pow_mod(base: u64, mut exp: u64, modulo: u64) -> u64 {
    let m = modulo as u128;
    let mut acc = 1u128 % m;
    let mut b = base as u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    acc as u64
}
