//! Terminal host for a [`FloatingField`].
//!
//! [`TerminalField`] plays the platform's part: it turns key presses and
//! mouse clicks into controller events, is the controller's view sink and focus control, and
//! draws the last applied plan into a three-row area:
//!
//! ```text
//! Email            <- small label (or blank while the label is large)
//! ada@exa▌       x <- text with caret and clear glyph (or the large label)
//! ──────────────── <- underline in the validity color
//! ```

use std::cell::Cell;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use floatfield_core::command::Command;
use floatfield_core::component::Component;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::appearance::Appearance;
use super::controller::{EditOutcome, Event, FloatingField, Transition};
use super::edit::EditRange;
use super::render::{label_style, underline_color, LabelFont, Underline};
use super::sink::{FocusControl, FocusRequest, ViewSink};
use super::state::FieldState;
use super::validator::Validator;
use crate::textutil;

/// Glyph drawn for the clear affordance.
pub const CLEAR_GLYPH: &str = "x";

/// Messages for the terminal field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A keyboard event to process.  Ignored while unfocused.
    KeyPress(KeyEvent),
    /// Paste text at the caret.  Ignored while unfocused.
    Paste(String),
    /// A mouse event; a left click selects the field or hits the clear
    /// glyph.
    Mouse(MouseEvent),
    /// The user selected the field (focus shortcut).
    Tap,
    /// The terminal granted focus to this field.
    FocusGained,
    /// Focus moved away; commits the displayed text.
    FocusLost,
    /// Emitted after the buffer changed.
    Changed(String),
    /// Emitted after a commit, with the validation outcome.
    Committed {
        text: String,
        validity: Option<bool>,
    },
}

/// Where a click landed, as of the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Anywhere on the field outside the clear glyph.
    Field,
    /// The clear glyph, while it is shown.
    Clear,
}

/// What the terminal currently shows, as last painted by the controller.
#[derive(Debug, Clone)]
struct NativeView {
    appearance: Appearance,
    label: String,
    label_font: LabelFont,
    text: String,
    field_visible: bool,
    clear_visible: bool,
    underline: Underline,
    has_focus: bool,
    cursor: usize,
}

impl NativeView {
    fn new() -> Self {
        Self {
            appearance: Appearance::default(),
            label: String::new(),
            label_font: LabelFont::Large,
            text: String::new(),
            field_visible: false,
            clear_visible: false,
            underline: Underline::Normal,
            has_focus: false,
            cursor: 0,
        }
    }

    fn text_len(&self) -> usize {
        textutil::grapheme_count(&self.text)
    }
}

impl ViewSink for NativeView {
    fn apply_appearance(&mut self, appearance: &Appearance) {
        self.appearance = *appearance;
    }

    fn set_label_text(&mut self, text: &str) {
        self.label = text.to_owned();
    }

    fn set_label_font(&mut self, font: LabelFont) {
        self.label_font = font;
    }

    fn set_field_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.cursor = self.cursor.min(self.text_len());
    }

    fn set_field_visible(&mut self, visible: bool) {
        self.field_visible = visible;
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible = visible;
    }

    fn set_underline(&mut self, underline: Underline) {
        self.underline = underline;
    }
}

/// Focus requests are answered on the next message, never inline.
#[derive(Debug, Default)]
struct PendingFocus(Option<FocusRequest>);

impl FocusControl for PendingFocus {
    fn request_focus(&mut self) {
        self.0 = Some(FocusRequest::Acquire);
    }

    fn release_focus(&mut self) {
        self.0 = Some(FocusRequest::Release);
    }
}

/// A floating-label text field hosted in a terminal.
///
/// # Keys while focused
///
/// | Key | Effect |
/// |-----|--------|
/// | printable | insert at caret |
/// | Backspace / Delete | delete one grapheme cluster |
/// | Left / Right / Home / End | move caret |
/// | Ctrl+U | clear (only while the clear glyph shows) |
/// | Enter / Esc | submit: release focus, which commits |
///
/// A left click on the field asks for focus; a left click on the clear
/// glyph clears, focused or not.  Clicks are resolved against the area of
/// the last draw, so hosts need mouse capture
/// ([`ProgramOptions::mouse_mode`](floatfield_core::ProgramOptions)).
///
/// # Example
///
/// ```ignore
/// let mut email = TerminalField::new(
///     FloatingField::new("Email").with_validator(Arc::new(LengthLimit(64))),
/// );
///
/// // Focus is asynchronous: Tap answers with Message::FocusGained.
/// let cmd = email.update(Message::Tap);
/// ```
pub struct TerminalField {
    field: FloatingField,
    view: NativeView,
    focus: PendingFocus,
    area: Cell<Rect>,
    clear_area: Cell<Option<Rect>>,
}

impl TerminalField {
    /// Host `field` and paint its initial state.
    pub fn new(field: FloatingField) -> Self {
        let mut view = NativeView::new();
        field.sync(&mut view);
        view.cursor = view.text_len();
        Self {
            field,
            view,
            focus: PendingFocus::default(),
            area: Cell::new(Rect::default()),
            clear_area: Cell::new(None),
        }
    }

    /// The hosted controller.
    pub fn field(&self) -> &FloatingField {
        &self.field
    }

    /// Shortcut for `self.field().state()`.
    pub fn state(&self) -> &FieldState {
        self.field.state()
    }

    /// The text the terminal shows.
    pub fn value(&self) -> &str {
        &self.view.text
    }

    /// Caret position in grapheme clusters.
    pub fn cursor_position(&self) -> usize {
        self.view.cursor
    }

    /// Replace the appearance and repaint.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.field.set_appearance(appearance, &mut self.view);
    }

    /// Replace the validator.  Affects later keystrokes and commits.
    ///
    /// The current text is kept even when it exceeds the new bound; from
    /// then on Backspace, Delete and Paste are refused until Ctrl+U (or the
    /// clear glyph) empties the field.
    pub fn set_validator(&mut self, validator: Arc<dyn Validator>) {
        self.field.set_validator(validator);
    }

    /// What a click at (`column`, `row`) lands on.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        let on_clear = self.clear_area.get().is_some_and(|r| r.contains(pos));
        if self.view.clear_visible && on_clear {
            return Some(Hit::Clear);
        }
        self.area.get().contains(pos).then_some(Hit::Field)
    }

    fn dispatch(&mut self, event: Event) -> Transition {
        self.field.handle(event, &mut self.view, &mut self.focus)
    }

    /// Run `event` and turn its focus request into a follow-up message.
    fn run(&mut self, event: Event) -> Command<Message> {
        self.dispatch(event);
        self.focus_command()
    }

    fn focus_command(&mut self) -> Command<Message> {
        match self.focus.0.take() {
            Some(FocusRequest::Acquire) if !self.view.has_focus => {
                Command::message(Message::FocusGained)
            }
            Some(FocusRequest::Release) if self.view.has_focus => {
                Command::message(Message::FocusLost)
            }
            _ => Command::none(),
        }
    }

    /// Replace `range` with `text`, moving the caret to the end of the
    /// inserted text when the controller accepts the edit.
    fn edit(&mut self, range: EditRange, text: String) -> Command<Message> {
        // A combining mark may merge into the cluster before it.
        let prefix = &self.view.text[..textutil::byte_offset(&self.view.text, range.start)];
        let caret = textutil::grapheme_count(&format!("{prefix}{text}"));
        let transition = self.dispatch(Event::CharsChanged { range, text });
        if transition.edit == Some(EditOutcome::Accepted) {
            self.view.cursor = caret.min(self.view.text_len());
            Command::message(Message::Changed(self.view.text.clone()))
        } else {
            Command::none()
        }
    }

    fn clear(&mut self) -> Command<Message> {
        if !self.view.clear_visible {
            return Command::none();
        }
        self.view.cursor = 0;
        let cmd = self.run(Event::ClearRequested);
        Command::batch([cmd, Command::message(Message::Changed(String::new()))])
    }

    fn click(&mut self, mouse: MouseEvent) -> Command<Message> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Command::none();
        }
        match self.hit(mouse.column, mouse.row) {
            Some(Hit::Clear) => self.clear(),
            Some(Hit::Field) => self.run(Event::TapToFocus),
            None => Command::none(),
        }
    }

    fn key(&mut self, key: KeyEvent) -> Command<Message> {
        let cursor = self.view.cursor;
        let len = self.view.text_len();
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => self.clear(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.edit(EditRange::at(cursor), c.to_string())
            }
            (KeyCode::Backspace, _) if cursor > 0 => {
                self.edit(EditRange::new(cursor - 1, 1), String::new())
            }
            (KeyCode::Delete, _) if cursor < len => {
                self.edit(EditRange::new(cursor, 1), String::new())
            }
            (KeyCode::Left, _) => {
                self.view.cursor = cursor.saturating_sub(1);
                Command::none()
            }
            (KeyCode::Right, _) => {
                self.view.cursor = (cursor + 1).min(len);
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.view.cursor = 0;
                Command::none()
            }
            (KeyCode::End, _) => {
                self.view.cursor = len;
                Command::none()
            }
            (KeyCode::Enter | KeyCode::Esc, _) => self.run(Event::Submit),
            _ => Command::none(),
        }
    }

    fn draw_text_row(&self, frame: &mut Frame, area: Rect) {
        let appearance = &self.view.appearance;
        let [text_area, clear_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(if self.view.clear_visible { 2 } else { 0 }),
        ])
        .areas(area);

        let clusters = textutil::graphemes(&self.view.text);
        let width = text_area.width as usize;
        let cursor = self.view.cursor.min(clusters.len());
        let offset = if self.view.has_focus {
            textutil::scroll_offset(&clusters, cursor, width)
        } else {
            0
        };

        let mut spans = Vec::new();
        if self.view.has_focus {
            let under = clusters.get(cursor).copied().unwrap_or(" ");
            let after = clusters.get(cursor + 1..).unwrap_or_default().concat();
            spans.push(Span::styled(clusters[offset..cursor].concat(), appearance.text_style()));
            spans.push(Span::styled(under.to_string(), appearance.caret_style()));
            spans.push(Span::styled(after, appearance.text_style()));
        } else {
            spans.push(Span::styled(
                textutil::truncate(&self.view.text, width, "…"),
                appearance.text_style(),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), text_area);

        if self.view.clear_visible {
            let glyph = Paragraph::new(format!(" {CLEAR_GLYPH}"))
                .style(Style::new().fg(appearance.label_color));
            frame.render_widget(glyph, clear_area);
            self.clear_area.set(Some(clear_area));
        }
    }
}

impl Component for TerminalField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.view.has_focus {
                    return Command::none();
                }
                self.key(key)
            }
            Message::Paste(text) => {
                if !self.view.has_focus {
                    return Command::none();
                }
                let text = textutil::single_line(&text);
                if text.is_empty() {
                    return Command::none();
                }
                self.edit(EditRange::at(self.view.cursor), text)
            }
            Message::Mouse(mouse) => self.click(mouse),
            Message::Tap => self.run(Event::TapToFocus),
            Message::FocusGained => {
                if self.view.has_focus {
                    return Command::none();
                }
                self.view.has_focus = true;
                self.view.cursor = self.view.text_len();
                self.run(Event::BeginEdit)
            }
            Message::FocusLost => {
                if !self.view.has_focus {
                    return Command::none();
                }
                self.view.has_focus = false;
                let displayed_text = Some(self.view.text.clone());
                self.dispatch(Event::Commit { displayed_text });
                let state = self.field.state();
                Command::message(Message::Committed {
                    text: state.typed_text.clone(),
                    validity: state.validity,
                })
            }
            Message::Changed(_) | Message::Committed { .. } => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let appearance = &self.view.appearance;
        let [label_row, text_row, line_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        self.area.set(area);
        self.clear_area.set(None);

        let label_style = label_style(self.view.label_font, appearance);
        let label = textutil::truncate(&self.view.label, area.width as usize, "…");
        if self.view.field_visible {
            frame.render_widget(Paragraph::new(label).style(label_style), label_row);
            self.draw_text_row(frame, text_row);
        } else {
            frame.render_widget(Paragraph::new(label).style(label_style), text_row);
        }

        let line = "─".repeat(line_row.width as usize);
        let color = underline_color(self.view.underline, appearance);
        frame.render_widget(Paragraph::new(line).style(Style::new().fg(color)), line_row);
    }

    fn focused(&self) -> bool {
        self.view.has_focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floating_field::validator::{FnValidator, LengthLimit};
    use crossterm::event::{KeyEventKind, KeyEventState};
    use pretty_assertions::assert_eq;
    use floatfield_core::testing::TestComponent;

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn ctrl(c: char) -> Message {
        Message::KeyPress(KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Message {
        Message::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Message {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn type_str(h: &mut TestComponent<TerminalField>, s: &str) {
        for c in s.chars() {
            h.send_and_drain(key(KeyCode::Char(c)));
        }
    }

    fn email_field() -> TestComponent<TerminalField> {
        let validator = FnValidator::new(|s| s.contains('@') && !s.ends_with('@'));
        TestComponent::new(TerminalField::new(
            FloatingField::new("Email").with_validator(Arc::new(validator)),
        ))
    }

    fn focused(h: &mut TestComponent<TerminalField>) {
        h.send_and_drain(Message::Tap);
        assert!(h.component().focused());
    }

    #[test]
    fn keys_are_ignored_until_focused() {
        let mut h = email_field();
        h.send_and_drain(key(KeyCode::Char('a')));
        assert_eq!(h.component().value(), "");
        assert_eq!(h.component().state().typed_text, "");
    }

    #[test]
    fn tap_gains_focus_asynchronously() {
        let mut h = email_field();
        h.send(Message::Tap);
        assert!(!h.component().focused());
        h.drain_messages();
        assert!(h.component().focused());
        assert!(h.component().state().is_active);
        assert!(h.seen().contains(&Message::FocusGained));
    }

    #[test]
    fn typing_updates_buffer_and_notifies() {
        let mut h = email_field();
        focused(&mut h);
        type_str(&mut h, "ab");
        assert_eq!(h.component().value(), "ab");
        assert_eq!(h.component().state().typed_text, "ab");
        assert_eq!(h.component().cursor_position(), 2);
        assert!(h.seen().contains(&Message::Changed("ab".into())));
    }

    #[test]
    fn caret_edits_in_the_middle() {
        let mut h = email_field();
        focused(&mut h);
        type_str(&mut h, "ac");
        h.send_and_drain(key(KeyCode::Left));
        type_str(&mut h, "b");
        assert_eq!(h.component().value(), "abc");
        h.send_and_drain(key(KeyCode::Home));
        h.send_and_drain(key(KeyCode::Delete));
        assert_eq!(h.component().value(), "bc");
        h.send_and_drain(key(KeyCode::End));
        h.send_and_drain(key(KeyCode::Backspace));
        assert_eq!(h.component().value(), "b");
    }

    #[test]
    fn length_gate_blocks_extra_keystrokes() {
        let mut h = TestComponent::new(TerminalField::new(
            FloatingField::new("PIN").with_validator(Arc::new(LengthLimit(4))),
        ));
        focused(&mut h);
        type_str(&mut h, "123456");
        assert_eq!(h.component().value(), "1234");
        assert_eq!(h.component().cursor_position(), 4);
    }

    #[test]
    fn paste_is_one_gated_edit() {
        let mut h = TestComponent::new(TerminalField::new(
            FloatingField::new("PIN").with_validator(Arc::new(LengthLimit(4))),
        ));
        focused(&mut h);
        h.send_and_drain(Message::Paste("12345".into()));
        assert_eq!(h.component().value(), "");
        h.send_and_drain(Message::Paste("12\n34".into()));
        assert_eq!(h.component().value(), "1234");
    }

    #[test]
    fn enter_submits_and_commits() {
        let mut h = email_field();
        focused(&mut h);
        type_str(&mut h, "bad@");
        h.send_and_drain(key(KeyCode::Enter));

        assert!(!h.component().focused());
        let state = h.component().state();
        assert!(!state.is_active);
        assert_eq!(state.validity, Some(false));
        assert!(h.seen().contains(&Message::Committed {
            text: "bad@".into(),
            validity: Some(false),
        }));
    }

    #[test]
    fn clear_shortcut_keeps_failed_validity() {
        let mut h = email_field();
        focused(&mut h);
        type_str(&mut h, "bad@");
        h.send_and_drain(key(KeyCode::Enter));
        focused(&mut h);
        h.send_and_drain(ctrl('u'));

        assert_eq!(h.component().value(), "");
        assert_eq!(h.component().state().validity, Some(false));
        assert!(h.component().state().is_active);
    }

    #[test]
    fn clear_shortcut_needs_visible_affordance() {
        let mut h = email_field();
        focused(&mut h);
        let seen_before = h.seen().len();
        h.send_and_drain(ctrl('u'));
        assert_eq!(h.seen().len(), seen_before + 1);
    }

    #[test]
    fn focus_lost_while_unfocused_is_ignored() {
        let mut h = email_field();
        h.send_and_drain(Message::FocusLost);
        assert_eq!(h.component().state().validity, None);
    }

    #[test]
    fn idle_empty_renders_large_label_in_text_row() {
        let h = email_field();
        let out = h.render_string(12, 3);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0].trim(), "");
        assert_eq!(rows[1].trim(), "Email");
        assert_eq!(rows[2], "─".repeat(12));
    }

    #[test]
    fn filled_field_floats_label_and_shows_clear_glyph() {
        let h = TestComponent::new(TerminalField::new(
            FloatingField::new("Name").with_text("Ada"),
        ));
        let out = h.render_string(12, 3);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0].trim_end(), "Name");
        assert!(rows[1].starts_with("Ada"));
        assert!(rows[1].trim_end().ends_with(CLEAR_GLYPH));
    }

    #[test]
    fn underline_color_tracks_validity() {
        let mut h = email_field();
        focused(&mut h);
        type_str(&mut h, "bad@");
        h.send_and_drain(key(KeyCode::Enter));

        let buf = h.render(10, 3);
        let expected = Appearance::default().error_underline;
        assert_eq!(buf[(0, 2)].fg, expected);
    }

    #[test]
    fn long_text_scrolls_to_keep_caret_visible() {
        let mut h = TestComponent::new(TerminalField::new(FloatingField::new("Note")));
        focused(&mut h);
        type_str(&mut h, "abcdefghijkl");
        let out = h.render_string(8, 3);
        let row = out.lines().nth(1).unwrap_or_default();
        assert!(row.contains("jkl"));
        assert!(!row.contains('a'));
    }

    #[test]
    fn backspace_removes_a_whole_cluster() {
        let mut h = TestComponent::new(TerminalField::new(FloatingField::new("Name")));
        focused(&mut h);
        h.send_and_drain(Message::Paste("ne\u{301}".into()));
        assert_eq!(h.component().cursor_position(), 2);
        h.send_and_drain(key(KeyCode::Backspace));
        assert_eq!(h.component().value(), "n");
    }

    #[test]
    fn caret_steps_over_clusters() {
        let mut h = TestComponent::new(TerminalField::new(FloatingField::new("Name")));
        focused(&mut h);
        h.send_and_drain(Message::Paste("a🇧🇷b".into()));
        h.send_and_drain(key(KeyCode::Left));
        h.send_and_drain(key(KeyCode::Left));
        assert_eq!(h.component().cursor_position(), 1);
        h.send_and_drain(key(KeyCode::Delete));
        assert_eq!(h.component().value(), "ab");
    }

    #[test]
    fn one_cluster_fits_a_bound_of_one() {
        for s in ["🇧🇷", "e\u{301}", "👩\u{200d}💻"] {
            let mut h = TestComponent::new(TerminalField::new(
                FloatingField::new("X").with_validator(Arc::new(LengthLimit(1))),
            ));
            focused(&mut h);
            h.send_and_drain(Message::Paste(s.into()));
            assert_eq!(h.component().value(), s);
            assert_eq!(h.component().cursor_position(), 1);
            type_str(&mut h, "a");
            assert_eq!(h.component().value(), s);
        }
    }

    #[test]
    fn typed_combining_mark_joins_its_letter() {
        let mut h = TestComponent::new(TerminalField::new(
            FloatingField::new("X").with_validator(Arc::new(LengthLimit(1))),
        ));
        focused(&mut h);
        type_str(&mut h, "e\u{301}");
        assert_eq!(h.component().value(), "e\u{301}");
        assert_eq!(h.component().cursor_position(), 1);
    }

    #[test]
    fn over_bound_prefill_refuses_deletions_until_cleared() {
        let mut h = TestComponent::new(TerminalField::new(
            FloatingField::new("Code")
                .with_text("abcdef")
                .with_validator(Arc::new(LengthLimit(3))),
        ));
        focused(&mut h);
        h.send_and_drain(key(KeyCode::Backspace));
        assert_eq!(h.component().value(), "abcdef");
        assert_eq!(h.component().cursor_position(), 6);
        h.send_and_drain(Message::Paste("x".into()));
        assert_eq!(h.component().value(), "abcdef");

        h.send_and_drain(ctrl('u'));
        type_str(&mut h, "abcd");
        assert_eq!(h.component().value(), "abc");
    }

    #[test]
    fn tighter_validator_keeps_text_and_refuses_deletions() {
        let mut h = TestComponent::new(TerminalField::new(
            FloatingField::new("Code").with_text("abcdef"),
        ));
        focused(&mut h);
        h.component_mut().set_validator(Arc::new(LengthLimit(3)));
        assert_eq!(h.component().value(), "abcdef");
        h.send_and_drain(key(KeyCode::Backspace));
        assert_eq!(h.component().state().typed_text, "abcdef");
    }

    #[test]
    fn click_on_field_asks_for_focus() {
        let mut h = email_field();
        h.render(20, 3);
        assert_eq!(h.component().hit(3, 1), Some(Hit::Field));
        h.send_and_drain(click(3, 1));
        assert!(h.component().focused());
        assert!(h.component().state().is_active);
        assert!(h.seen().contains(&Message::FocusGained));
    }

    #[test]
    fn clicks_outside_or_with_other_buttons_do_nothing() {
        let mut h = email_field();
        h.render(20, 3);
        assert_eq!(h.component().hit(3, 5), None);
        h.send_and_drain(click(3, 5));
        h.send_and_drain(mouse(MouseEventKind::Down(MouseButton::Right), 3, 1));
        h.send_and_drain(mouse(MouseEventKind::Up(MouseButton::Left), 3, 1));
        assert!(!h.component().focused());
    }

    #[test]
    fn click_before_first_draw_misses() {
        let h = email_field();
        assert_eq!(h.component().hit(0, 0), None);
    }

    #[test]
    fn click_on_clear_glyph_clears_without_focus() {
        let mut h = TestComponent::new(TerminalField::new(
            FloatingField::new("Name").with_text("Ada"),
        ));
        h.render(20, 3);
        assert_eq!(h.component().hit(19, 1), Some(Hit::Clear));
        h.send_and_drain(click(19, 1));

        assert_eq!(h.component().value(), "");
        assert_eq!(h.component().state().typed_text, "");
        assert!(!h.component().focused());
        assert!(h.seen().contains(&Message::Changed(String::new())));
    }

    #[test]
    fn clear_glyph_cell_is_plain_field_while_hidden() {
        let mut h = email_field();
        focused(&mut h);
        h.render(20, 3);
        assert_eq!(h.component().hit(19, 1), Some(Hit::Field));

        type_str(&mut h, "a");
        h.render(20, 3);
        assert_eq!(h.component().hit(19, 1), Some(Hit::Clear));
        h.send_and_drain(click(19, 1));
        assert_eq!(h.component().value(), "");
        assert_eq!(h.component().hit(19, 1), Some(Hit::Field));
    }
}
