//! Interfaces from the field controller to its host platform.

use super::appearance::Appearance;
use super::render::{LabelFont, RenderPlan, Underline};

/// Receives paint instructions from a [`FloatingField`](super::FloatingField).
///
/// Called once per re-render with every attribute of the
/// [`RenderPlan`]; `apply_appearance` runs on the first paint and whenever
/// the appearance is replaced.
pub trait ViewSink {
    fn apply_appearance(&mut self, appearance: &Appearance);
    fn set_label_text(&mut self, text: &str);
    fn set_label_font(&mut self, font: LabelFont);
    fn set_field_text(&mut self, text: &str);
    fn set_field_visible(&mut self, visible: bool);
    fn set_clear_visible(&mut self, visible: bool);
    fn set_underline(&mut self, underline: Underline);
}

/// Focus commands from the controller to the platform.
///
/// Both are requests: the platform answers a granted focus with a
/// `BeginEdit` event and a released focus with a `Commit`.
pub trait FocusControl {
    fn request_focus(&mut self);
    fn release_focus(&mut self);
}

/// A focus command as data, for callers that apply it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Acquire,
    Release,
}

impl FocusRequest {
    /// Forward this request to a focus controller.
    pub fn apply_to<F: FocusControl + ?Sized>(self, focus: &mut F) {
        match self {
            FocusRequest::Acquire => focus.request_focus(),
            FocusRequest::Release => focus.release_focus(),
        }
    }
}

/// Collects focus requests in order.
impl FocusControl for Vec<FocusRequest> {
    fn request_focus(&mut self) {
        self.push(FocusRequest::Acquire);
    }

    fn release_focus(&mut self) {
        self.push(FocusRequest::Release);
    }
}

/// A sink that remembers what it was told.  Useful for tests and for
/// platforms that diff before painting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    /// Palette from the last `apply_appearance`, if any.
    pub appearance: Option<Appearance>,
    /// Reassembled from the individual setters; `None` until the first paint.
    pub plan: Option<RenderPlan>,
    /// Number of complete re-renders seen (counted on `set_underline`, the
    /// last call of [`RenderPlan::apply_to`]).
    pub renders: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn plan_mut(&mut self) -> &mut RenderPlan {
        self.plan.get_or_insert_with(|| RenderPlan {
            label: String::new(),
            label_font: LabelFont::Large,
            field_text: String::new(),
            field_visible: false,
            clear_visible: false,
            underline: Underline::Normal,
        })
    }
}

impl ViewSink for RecordingSink {
    fn apply_appearance(&mut self, appearance: &Appearance) {
        self.appearance = Some(*appearance);
    }

    fn set_label_text(&mut self, text: &str) {
        self.plan_mut().label = text.to_owned();
    }

    fn set_label_font(&mut self, font: LabelFont) {
        self.plan_mut().label_font = font;
    }

    fn set_field_text(&mut self, text: &str) {
        self.plan_mut().field_text = text.to_owned();
    }

    fn set_field_visible(&mut self, visible: bool) {
        self.plan_mut().field_visible = visible;
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.plan_mut().clear_visible = visible;
    }

    fn set_underline(&mut self, underline: Underline) {
        self.plan_mut().underline = underline;
        self.renders += 1;
    }
}
