//! Field state and the phase derived from it.

/// Observable state of one floating field.
///
/// Owned by exactly one [`FloatingField`](super::FloatingField) and only
/// mutated by it in response to events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// Display label.  Fixed for the lifetime of the field.
    pub title: String,
    /// Current buffer.
    pub typed_text: String,
    /// Outcome of the last commit.  `None` means not yet evaluated.
    pub validity: Option<bool>,
    /// Whether the field currently holds input focus.
    pub is_active: bool,
}

impl FieldState {
    /// Empty, inactive, not yet validated.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Same state with a pre-filled buffer.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.typed_text = text.into();
        self
    }

    /// Which phase the field is in, as seen by the controller.
    pub fn phase(&self) -> Phase {
        if self.is_active {
            Phase::Editing
        } else if self.typed_text.is_empty() {
            Phase::IdleEmpty
        } else {
            Phase::IdleFilled
        }
    }
}

/// Controller-level phase of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Unfocused with no text.
    IdleEmpty,
    /// Unfocused with text.
    IdleFilled,
    /// Focused.
    Editing,
}
