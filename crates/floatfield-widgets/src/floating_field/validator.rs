//! Validation contract for a floating field.
//!
//! Two checks are kept apart: the length gate ([`ValidatorExt::has_valid_length`])
//! runs on every keystroke before the buffer may change, and full validity
//! ([`Validator::is_valid_text`]) runs only when editing ends.
//!
//! Lengths are counted in extended grapheme clusters, so a flag, an accented
//! letter in decomposed form or a ZWJ emoji sequence each count as one.

use std::fmt;

use crate::textutil;

/// Domain-specific validation for a field's text.
///
/// Implementations must be pure and total: `is_valid_text` is defined for
/// every string, including the empty one.
pub trait Validator: Send + Sync {
    /// Inclusive upper bound on the number of grapheme clusters, if any.
    fn max_length(&self) -> Option<usize> {
        None
    }

    /// Whether `text` is an acceptable committed value.
    fn is_valid_text(&self, text: &str) -> bool;
}

/// Checks derived from [`Validator`].  Implemented for every validator and
/// not meant to be overridden.
pub trait ValidatorExt {
    /// `true` if there is no bound, or `text` has at most `max_length`
    /// grapheme clusters.
    fn has_valid_length(&self, text: &str) -> bool;
}

impl<V: Validator + ?Sized> ValidatorExt for V {
    fn has_valid_length(&self, text: &str) -> bool {
        match self.max_length() {
            Some(max) => textutil::grapheme_count(text) <= max,
            None => true,
        }
    }
}

/// A validator built from a closure, with an optional length bound.
///
/// # Example
///
/// ```ignore
/// let email = FnValidator::new(|s| s.contains('@') && !s.ends_with('@'))
///     .with_max_length(64);
/// ```
pub struct FnValidator {
    max_length: Option<usize>,
    #[allow(clippy::type_complexity)]
    predicate: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl FnValidator {
    /// Create an unbounded validator from a predicate.
    pub fn new(predicate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            max_length: None,
            predicate: Box::new(predicate),
        }
    }

    /// Set the maximum number of grapheme clusters allowed.
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

impl Validator for FnValidator {
    fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    fn is_valid_text(&self, text: &str) -> bool {
        (self.predicate)(text)
    }
}

impl fmt::Debug for FnValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator")
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}

/// Length bound only: every committed value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimit(pub usize);

impl Validator for LengthLimit {
    fn max_length(&self) -> Option<usize> {
        Some(self.0)
    }

    fn is_valid_text(&self, _text: &str) -> bool {
        true
    }
}
