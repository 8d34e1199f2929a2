//! Winnowing: one representative hash per window.
//!
//! Every window of `window_len` consecutive hashes elects its minimum; among
//! equal values the rightmost wins. The elected `(hash, position)` is emitted
//! only if it differs from the previously emitted fingerprint in **both**
//! hash and position. A candidate that shares either field with the last
//! emitted fingerprint is dropped, which is stricter than dropping repeated
//! positions only, and changes the output for hash sequences with repeated
//! values. Stored fingerprints depend on this rule.

use std::collections::VecDeque;

use crate::fingerprint::Fingerprint;

/// Winnowing via monotonic deque, O(n).
///
/// Returns an empty sequence when `window_len == 0` or there are fewer
/// hashes than `window_len`.
pub fn winnow(hashes: &[u64], window_len: usize) -> Vec<Fingerprint> {
    let n = hashes.len();
    if window_len == 0 || n < window_len {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut last: Option<Fingerprint> = None;
    // Positions in the current window whose hashes strictly increase from
    // front to back. The front is the rightmost minimum.
    let mut dq: VecDeque<usize> = VecDeque::with_capacity(window_len);

    for (i, &value) in hashes.iter().enumerate() {
        // `<=` evicts equal values so a newer equal hash takes over.
        while let Some(&j) = dq.back() {
            if value <= hashes[j] {
                dq.pop_back();
            } else {
                break;
            }
        }
        dq.push_back(i);

        if i + 1 < window_len {
            continue;
        }
        let start = i + 1 - window_len;
        while let Some(&j) = dq.front() {
            if j < start {
                dq.pop_front();
            } else {
                break;
            }
        }

        if let Some(&pos) = dq.front() {
            emit(&mut out, &mut last, Fingerprint::new(hashes[pos], pos));
        }
    }

    out
}

/// Reference winnowing that rescans every window from scratch.
///
/// O(n · window_len). Produces exactly the same sequence as [`winnow`]; kept
/// for cross-checking and benchmarks.
pub fn winnow_rescan(hashes: &[u64], window_len: usize) -> Vec<Fingerprint> {
    if window_len == 0 || hashes.len() < window_len {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut last: Option<Fingerprint> = None;
    for (start, window) in hashes.windows(window_len).enumerate() {
        let mut min_pos = 0;
        let mut min_val = u64::MAX;
        for (offset, &value) in window.iter().enumerate() {
            if value <= min_val {
                min_val = value;
                min_pos = offset;
            }
        }
        emit(&mut out, &mut last, Fingerprint::new(min_val, start + min_pos));
    }
    out
}

/// Append `candidate` unless it shares a field with the last emitted
/// fingerprint.
#[inline]
fn emit(out: &mut Vec<Fingerprint>, last: &mut Option<Fingerprint>, candidate: Fingerprint) {
    let fresh = match last {
        None => true,
        Some(prev) => prev.hash != candidate.hash && prev.position != candidate.position,
    };
    if fresh {
        out.push(candidate);
        *last = Some(candidate);
    }
}
