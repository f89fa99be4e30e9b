//! The field controller: events in, state changes and repaints out.

use std::fmt;
use std::sync::Arc;

use super::appearance::Appearance;
use super::edit::EditRange;
use super::render::{render, RenderPlan};
use super::sink::{FocusControl, FocusRequest, ViewSink};
use super::state::{FieldState, Phase};
use super::validator::{Validator, ValidatorExt};
use crate::textutil;

/// Input delivered by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The field gained input focus.
    BeginEdit,
    /// A keystroke wants to replace `range` of the buffer with `text`.
    CharsChanged { range: EditRange, text: String },
    /// Editing ended.  `displayed_text` is what the platform shows, if it
    /// can tell.
    Commit { displayed_text: Option<String> },
    /// The clear affordance was tapped.
    ClearRequested,
    /// The user tapped the field; asks the platform for focus.
    TapToFocus,
    /// Return was pressed; asks the platform to release focus.
    Submit,
}

impl Event {
    /// Short name for logs; never carries the text itself.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::BeginEdit => "begin_edit",
            Event::CharsChanged { .. } => "chars_changed",
            Event::Commit { .. } => "commit",
            Event::ClearRequested => "clear",
            Event::TapToFocus => "tap_to_focus",
            Event::Submit => "submit",
        }
    }
}

/// Result of a [`Event::CharsChanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The buffer now holds the candidate text.
    Accepted,
    /// The candidate failed the length gate; the buffer is unchanged.
    Rejected,
    /// The range did not fit the buffer; nothing changed.
    OutOfRange,
}

/// What one event did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    /// Fresh plan when state changed, `None` otherwise.
    pub plan: Option<RenderPlan>,
    /// Focus command for the platform.
    pub focus: Option<FocusRequest>,
    /// Set for [`Event::CharsChanged`] only.
    pub edit: Option<EditOutcome>,
}

/// Controller for one floating-label text field.
///
/// Owns the [`FieldState`], runs the validator, and produces a
/// [`RenderPlan`] after every mutation.  Platform specifics stay behind
/// [`ViewSink`] and [`FocusControl`].
///
/// # Example
///
/// ```ignore
/// let mut field = FloatingField::new("Email")
///     .with_validator(Arc::new(FnValidator::new(|s| s.contains('@'))));
/// let mut sink = RecordingSink::new();
/// let mut focus = Vec::new();
///
/// field.sync(&mut sink);
/// field.handle(Event::BeginEdit, &mut sink, &mut focus);
/// field.handle(
///     Event::CharsChanged { range: EditRange::at(0), text: "a".into() },
///     &mut sink,
///     &mut focus,
/// );
/// ```
pub struct FloatingField {
    state: FieldState,
    appearance: Appearance,
    validator: Option<Arc<dyn Validator>>,
}

impl FloatingField {
    /// An empty, unfocused field with the default appearance and no
    /// validator.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            state: FieldState::new(title),
            appearance: Appearance::default(),
            validator: None,
        }
    }

    /// Pre-fill the buffer.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.state.typed_text = text.into();
        self
    }

    /// Attach a validator.  Validators may be shared between fields.
    pub fn with_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Set the appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn validator(&self) -> Option<&Arc<dyn Validator>> {
        self.validator.as_ref()
    }

    /// The plan for the current state.
    pub fn render(&self) -> RenderPlan {
        render(&self.state)
    }

    /// Paint palette and current plan; used for the first paint.
    pub fn sync<S: ViewSink + ?Sized>(&self, sink: &mut S) {
        sink.apply_appearance(&self.appearance);
        self.render().apply_to(sink);
    }

    /// Replace the appearance and re-render.
    pub fn set_appearance<S: ViewSink + ?Sized>(&mut self, appearance: Appearance, sink: &mut S) {
        self.appearance = appearance;
        self.sync(sink);
    }

    /// Replace the validator.  Only affects later events.
    ///
    /// The buffer is not re-checked.  If it already exceeds the new bound,
    /// every edit whose result is still over the bound is rejected,
    /// deletions included; [`Event::ClearRequested`], a commit, or an edit
    /// that brings the text within the bound in one step are the way out.
    pub fn set_validator(&mut self, validator: Arc<dyn Validator>) {
        self.validator = Some(validator);
    }

    /// Drop the validator: no length bound, neutral validity on commit.
    pub fn clear_validator(&mut self) {
        self.validator = None;
    }

    /// Replace the whole state and re-render.
    pub fn replace_state<S: ViewSink + ?Sized>(&mut self, state: FieldState, sink: &mut S) {
        self.state = state;
        self.render().apply_to(sink);
    }

    /// Apply `event` to the state and report what changed.
    ///
    /// Nothing is painted; see [`handle`](Self::handle) for the full cycle.
    pub fn apply_event(&mut self, event: Event) -> Transition {
        tracing::debug!(
            title = %self.state.title,
            event = event.kind(),
            len = textutil::grapheme_count(&self.state.typed_text),
            phase = ?self.phase(),
            "field event"
        );
        match event {
            Event::BeginEdit => {
                self.state.is_active = true;
                self.changed()
            }
            Event::CharsChanged { range, text } => self.change_chars(range, &text),
            Event::Commit { displayed_text } => {
                self.state.typed_text = displayed_text.unwrap_or_default();
                self.state.is_active = false;
                self.state.validity = self
                    .validator
                    .as_ref()
                    .map(|v| v.is_valid_text(&self.state.typed_text));
                tracing::debug!(
                    title = %self.state.title,
                    len = textutil::grapheme_count(&self.state.typed_text),
                    validity = ?self.state.validity,
                    "field committed"
                );
                self.changed()
            }
            Event::ClearRequested => {
                // Validity and focus carry over until the next commit.
                self.state.typed_text.clear();
                self.changed()
            }
            Event::TapToFocus => Transition {
                focus: Some(FocusRequest::Acquire),
                ..Transition::default()
            },
            Event::Submit => Transition {
                focus: Some(FocusRequest::Release),
                ..Transition::default()
            },
        }
    }

    /// Apply `event`, paint the resulting plan and forward any focus request.
    pub fn handle<S, F>(&mut self, event: Event, sink: &mut S, focus: &mut F) -> Transition
    where
        S: ViewSink + ?Sized,
        F: FocusControl + ?Sized,
    {
        let transition = self.apply_event(event);
        if let Some(plan) = &transition.plan {
            tracing::trace!(
                label_font = ?plan.label_font,
                field_visible = plan.field_visible,
                clear_visible = plan.clear_visible,
                underline = ?plan.underline,
                "field render"
            );
            plan.apply_to(sink);
        }
        if let Some(request) = transition.focus {
            request.apply_to(focus);
        }
        transition
    }

    fn change_chars(&mut self, range: EditRange, text: &str) -> Transition {
        let candidate = match range.apply(&self.state.typed_text, text) {
            Ok(candidate) => candidate,
            Err(err) => {
                tracing::warn!(title = %self.state.title, %err, "ignoring edit");
                return Transition {
                    edit: Some(EditOutcome::OutOfRange),
                    ..Transition::default()
                };
            }
        };

        let fits = self
            .validator
            .as_ref()
            .map_or(true, |v| v.has_valid_length(&candidate));
        if !fits {
            tracing::debug!(
                title = %self.state.title,
                candidate_len = textutil::grapheme_count(&candidate),
                "edit rejected by length gate"
            );
            return Transition {
                edit: Some(EditOutcome::Rejected),
                ..Transition::default()
            };
        }

        self.state.typed_text = candidate;
        Transition {
            edit: Some(EditOutcome::Accepted),
            ..self.changed()
        }
    }

    fn changed(&self) -> Transition {
        Transition {
            plan: Some(self.render()),
            ..Transition::default()
        }
    }
}

impl fmt::Debug for FloatingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingField")
            .field("state", &self.state)
            .field("appearance", &self.appearance)
            .field("validator", &self.validator.as_ref().map(|_| ".."))
            .finish()
    }
}
