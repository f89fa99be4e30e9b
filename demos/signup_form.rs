//! # Sign-up Form Demo
//!
//! Three independent floating-label fields hosted in a terminal:
//! - Tab / Shift+Tab or a click move terminal focus; the field losing focus
//!   commits
//! - Clicking a field's `x` clears it
//! - Enter or Esc inside a field submits it (the underline shows validity)
//! - Ctrl+U clears the focused field
//! - Ctrl+C quits
//!
//! Logs go to `signup_form.log`; set `RUST_LOG=floatfield_widgets=debug` to
//! watch every field event.
//!
//! Run with: `cargo run --example signup_form`

use std::sync::{Arc, Mutex};

use floatfield::crossterm::event::{
    KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use floatfield::ratatui::layout::{Constraint, Layout};
use floatfield::ratatui::style::{Color, Modifier, Style};
use floatfield::ratatui::text::{Line, Span};
use floatfield::ratatui::widgets::Paragraph;
use floatfield::ratatui::Frame;
use floatfield::widgets::chrome::{field_slots, focus_gutter};
use floatfield::widgets::floating_field::{
    self, Appearance, FloatingField, FnValidator, Hit, LengthLimit, TerminalField,
};
use floatfield::{
    log_to_file, Command, Component, Model, MouseMode, ProgramOptions, TerminalEvent,
};
use tracing_subscriber::EnvFilter;

const FIELDS: usize = 3;

struct SignupForm {
    fields: [TerminalField; FIELDS],
    focused: Option<usize>,
    last_commit: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Field(usize, floating_field::Message),
    FocusNext,
    FocusPrev,
    Click(MouseEvent),
    Quit,
}

impl SignupForm {
    /// Record `next` as focused and blur the previous field, if any.
    fn take_focus(&mut self, next: usize) -> Command<Msg> {
        let blur = match self.focused {
            Some(current) if current != next => Command::message(Msg::Field(
                current,
                floating_field::Message::FocusLost,
            )),
            _ => Command::none(),
        };
        self.focused = Some(next);
        blur
    }

    fn move_focus(&mut self, next: usize) -> Command<Msg> {
        let blur = self.take_focus(next);
        Command::batch([blur, Command::message(Msg::Field(next, floating_field::Message::Tap))])
    }

    fn click(&mut self, mouse: MouseEvent) -> Command<Msg> {
        let hit = self
            .fields
            .iter()
            .enumerate()
            .find_map(|(i, f)| f.hit(mouse.column, mouse.row).map(|hit| (i, hit)));
        let Some((i, hit)) = hit else {
            return Command::none();
        };
        // Clearing does not move focus.
        let blur = match hit {
            Hit::Field => self.take_focus(i),
            Hit::Clear => Command::none(),
        };
        let forward = Command::message(Msg::Field(i, floating_field::Message::Mouse(mouse)));
        Command::batch([blur, forward])
    }
}

impl Model for SignupForm {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let email = FnValidator::new(|s| {
            s.split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'))
        })
        .with_max_length(64);
        let phone = FnValidator::new(|s| s.len() >= 8 && s.chars().all(|c| c.is_ascii_digit()))
            .with_max_length(11);
        let accent = Appearance::default().with_caret_color(Color::Cyan);

        let fields = [
            TerminalField::new(FloatingField::new("Name").with_validator(Arc::new(LengthLimit(40)))),
            TerminalField::new(
                FloatingField::new("Email")
                    .with_validator(Arc::new(email))
                    .with_appearance(accent),
            ),
            TerminalField::new(
                FloatingField::new("Phone")
                    .with_validator(Arc::new(phone))
                    .with_appearance(accent),
            ),
        ];
        (
            SignupForm {
                fields,
                focused: None,
                last_commit: None,
            },
            Command::message(Msg::FocusNext),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Field(i, m) => {
                if let floating_field::Message::Committed { text, validity } = &m {
                    let title = &self.fields[i].state().title;
                    self.last_commit = Some(match validity {
                        Some(true) => format!("{title}: \"{text}\" looks good"),
                        Some(false) => format!("{title}: \"{text}\" is not valid"),
                        None => format!("{title}: \"{text}\" saved"),
                    });
                }
                self.fields[i]
                    .update(m)
                    .map(move |m| Msg::Field(i, m))
            }
            Msg::FocusNext => {
                let next = self.focused.map_or(0, |i| (i + 1) % FIELDS);
                self.move_focus(next)
            }
            Msg::FocusPrev => {
                let prev = self.focused.map_or(0, |i| (i + FIELDS - 1) % FIELDS);
                self.move_focus(prev)
            }
            Msg::Click(mouse) => self.click(mouse),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title_area, form_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new("Create your account")
                .style(Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );

        for (field, slot) in self.fields.iter().zip(field_slots(form_area, FIELDS, 1)) {
            let block = focus_gutter(field.focused());
            let inner = block.inner(slot);
            frame.render_widget(block, slot);
            field.view(frame, inner);
        }

        if let Some(ref status) = self.last_commit {
            frame.render_widget(
                Paragraph::new(status.as_str()).style(Style::default().fg(Color::Gray)),
                status_area,
            );
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next  "),
            Span::styled("click", Style::default().fg(Color::Cyan)),
            Span::raw(" focus / x clear  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" submit  "),
            Span::styled("Ctrl+U", Style::default().fg(Color::Cyan)),
            Span::raw(" clear  "),
            Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]));
        frame.render_widget(help, help_area);
    }

    fn event(&self, event: TerminalEvent) -> Option<Msg> {
        let focused = self.focused;
        match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Tab, KeyModifiers::NONE) => Some(Msg::FocusNext),
                (KeyCode::BackTab, _) => Some(Msg::FocusPrev),
                _ => focused.map(|i| Msg::Field(i, floating_field::Message::KeyPress(key))),
            },
            TerminalEvent::Mouse(mouse)
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                Some(Msg::Click(mouse))
            }
            TerminalEvent::Paste(text) => {
                focused.map(|i| Msg::Field(i, floating_field::Message::Paste(text)))
            }
            _ => None,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = log_to_file("signup_form.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log))
        .with_ansi(false)
        .init();

    let options = ProgramOptions {
        title: Some("floatfield sign-up".into()),
        mouse_mode: Some(MouseMode::CellMotion),
        ..ProgramOptions::default()
    };
    let form = floatfield::run_with::<SignupForm>((), options)?;
    for field in &form.fields {
        let state = field.state();
        tracing::info!(title = %state.title, text = %state.typed_text, validity = ?state.validity, "final");
    }
    Ok(())
}
