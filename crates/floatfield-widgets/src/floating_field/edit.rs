//! Buffer edits addressed in grapheme clusters.

use crate::textutil;

/// A span of the buffer to replace, in grapheme clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditRange {
    pub start: usize,
    pub len: usize,
}

/// Failure to apply an [`EditRange`] to a buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("edit range {start}..{end} is outside a buffer of {len} graphemes")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

impl EditRange {
    /// Replace `len` clusters starting at `start`.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Empty range: an insertion point.
    pub fn at(pos: usize) -> Self {
        Self { start: pos, len: 0 }
    }

    /// The range covering all of `text`.
    pub fn all(text: &str) -> Self {
        Self::new(0, textutil::grapheme_count(text))
    }

    /// One past the last replaced cluster.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Build the candidate buffer: `text` with this range replaced.
    pub fn apply(&self, text: &str, replacement: &str) -> Result<String, EditError> {
        let len = textutil::grapheme_count(text);
        let end = self.end();
        if self.start > len || end > len {
            return Err(EditError::OutOfBounds {
                start: self.start,
                end,
                len,
            });
        }

        let start_byte = textutil::byte_offset(text, self.start);
        let end_byte = textutil::byte_offset(text, end);
        let mut candidate =
            String::with_capacity(text.len() - (end_byte - start_byte) + replacement.len());
        candidate.push_str(&text[..start_byte]);
        candidate.push_str(replacement);
        candidate.push_str(&text[end_byte..]);
        Ok(candidate)
    }
}
