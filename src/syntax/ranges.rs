//! Removed-range resolution
//!
//! Given a line's original text and the text a tokenizer produced from it
//! after stripping characters (for example ANSI control sequences), this
//! module recovers which column ranges of the original were removed.
//!
//! The only edit allowed between the two strings is deletion: `edited` must
//! be a subsequence of `original`. This is not verified by reconstruction.
//! A single two-cursor scan assumes it, and the only violation it can
//! detect is characters of `edited` left over once `original` is
//! exhausted. Any other kind of edit produces ranges that do not describe
//! the change.

use crate::error::{HighlightError, Result};

/// A half-open column range `[start, end)` removed from the original string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedRange {
    /// First removed column (inclusive)
    pub start: usize,
    /// Column after the last removed one (exclusive)
    pub end: usize,
}

impl RemovedRange {
    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of removed columns
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the range removes nothing
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Compute the column ranges removed from `original` to obtain `edited`
///
/// Columns are `char` indices. The returned ranges are maximal, strictly
/// increasing and non-overlapping. Adjacent removed characters always end
/// up in the same range.
///
/// Fails with [`HighlightError::NotASubsequence`] when `edited` contains
/// characters that cannot be matched against the rest of `original`.
pub fn removed_ranges(original: &str, edited: &str) -> Result<Vec<RemovedRange>> {
    let original_chars: Vec<char> = original.chars().collect();
    let edited_chars: Vec<char> = edited.chars().collect();

    let mut ranges = Vec::new();
    let mut from: Option<usize> = None;
    let mut org_idx = 0;
    let mut edt_idx = 0;

    while org_idx < original_chars.len() && edt_idx < edited_chars.len() {
        if original_chars[org_idx] != edited_chars[edt_idx] {
            from.get_or_insert(org_idx);
            org_idx += 1;
        } else {
            if let Some(start) = from.take() {
                ranges.push(RemovedRange::new(start, org_idx));
            }
            org_idx += 1;
            edt_idx += 1;
        }
    }

    if edt_idx < edited_chars.len() {
        return Err(HighlightError::NotASubsequence {
            original: original.to_string(),
            edited: edited.to_string(),
        });
    }

    if org_idx < original_chars.len() || from.is_some() {
        let start = from.unwrap_or(org_idx);
        ranges.push(RemovedRange::new(start, original_chars.len()));
    }

    Ok(ranges)
}
