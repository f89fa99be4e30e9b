//! Floating-label text field.
//!
//! The label sits large in the text row while the field is idle and empty,
//! and floats small above the text once the field is focused or filled.  The
//! underline is colored by the outcome of the last commit, and a clear glyph
//! appears whenever there is text.
//!
//! The pieces, leaf first:
//!
//! | Module | Role |
//! |--------|------|
//! | [`validator`] | length gate and commit-time validity |
//! | [`state`] | the field's observable state |
//! | [`appearance`] | colors and fonts |
//! | [`render`] | pure state -> [`RenderPlan`] mapping |
//! | [`sink`] | [`ViewSink`] / [`FocusControl`] platform interfaces |
//! | [`controller`] | [`FloatingField`], the event-driven state machine |
//! | [`terminal`] | [`TerminalField`], a ratatui host implementing `Component` |

pub mod appearance;
pub mod controller;
pub mod edit;
pub mod render;
pub mod sink;
pub mod state;
pub mod terminal;
pub mod validator;

pub use appearance::Appearance;
pub use controller::{EditOutcome, Event, FloatingField, Transition};
pub use edit::{EditError, EditRange};
pub use render::{render, LabelFont, RenderPlan, Underline};
pub use sink::{FocusControl, FocusRequest, RecordingSink, ViewSink};
pub use state::{FieldState, Phase};
pub use terminal::{Hit, Message, TerminalField};
pub use validator::{FnValidator, LengthLimit, Validator, ValidatorExt};
