//! Unicode helpers for single-line terminal fields.
//!
//! Text is measured in extended grapheme clusters ([`unicode_segmentation`]):
//! a flag, a letter with combining accents or a ZWJ emoji sequence is one
//! unit for lengths, caret positions and edit ranges.  Widths come from
//! [`unicode_width`], so wide clusters (CJK, emoji) take two columns and
//! control characters none.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Keep only what belongs in a single-line field: control characters,
/// including newlines and tabs, are dropped.
pub fn single_line(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// The grapheme clusters of `s`, in order.
pub fn graphemes(s: &str) -> Vec<&str> {
    s.graphemes(true).collect()
}

/// Byte offset of the grapheme at `index`, or `s.len()` past the end.
pub fn byte_offset(s: &str, index: usize) -> usize {
    s.grapheme_indices(true)
        .nth(index)
        .map_or(s.len(), |(i, _)| i)
}

/// Display width of one grapheme cluster in terminal columns.
pub fn cluster_width(g: &str) -> usize {
    if g.chars().all(char::is_control) {
        0
    } else {
        g.width()
    }
}

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(cluster_width).sum()
}

/// Truncate a string to fit within `max_width` columns, appending `tail`
/// when anything was cut.
///
/// ```
/// use floatfield_widgets::textutil::truncate;
///
/// assert_eq!(truncate("Email address", 8, "…"), "Email a…");
/// assert_eq!(truncate("Email", 8, "…"), "Email");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let tail_width = display_width(tail);
    if tail_width >= max_width {
        return take_width(tail, max_width);
    }
    let mut result = take_width(s, max_width - tail_width);
    result.push_str(tail);
    result
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    s.graphemes(true)
        .take_while(|g| {
            width += cluster_width(g);
            width <= max_width
        })
        .collect()
}

/// First visible cluster index so that the caret at `cursor` stays on
/// screen in a window `width` columns wide.
///
/// The caret occupies one column past the last cluster when it sits at
/// the end of the text.
pub fn scroll_offset(clusters: &[&str], cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    let cursor = cursor.min(clusters.len());
    let caret_width = clusters.get(cursor).map_or(1, |g| cluster_width(g).max(1));
    let mut offset = cursor;
    let mut used = caret_width;
    while offset > 0 {
        let w = cluster_width(clusters[offset - 1]);
        if used + w > width {
            break;
        }
        used += w;
        offset -= 1;
    }
    offset
}
