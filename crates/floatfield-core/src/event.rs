use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events read by the runtime's event loop.
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload
/// and is handed to [`Model::event`](crate::Model::event) for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

/// Mouse capture modes for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseMode {
    /// Click, release, wheel, drag.
    CellMotion,
    /// All of above + hover.
    AllMotion,
}

impl TerminalEvent {
    /// Key releases and repeats are reported by some terminals; widgets only
    /// act on presses.
    pub fn is_key_press(&self) -> bool {
        matches!(self, TerminalEvent::Key(k) if k.kind == KeyEventKind::Press)
    }
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}
