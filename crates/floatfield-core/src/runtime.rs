use crate::command::Command;
use crate::event::{MouseMode, TerminalEvent};
use crate::model::Model;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io::{stdout, Stdout};

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// Use struct update syntax to override only the options you need:
///
/// ```rust,ignore
/// use floatfield_core::{MouseMode, ProgramOptions};
///
/// let opts = ProgramOptions {
///     title: Some("Sign up".into()),
///     mouse_mode: Some(MouseMode::CellMotion),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Enable mouse capture mode (default: off).
    pub mouse_mode: Option<MouseMode>,
    /// Enable bracketed paste (default: true).
    pub bracketed_paste: bool,
    /// Set terminal title.
    pub title: Option<String>,
    /// Whether to catch panics and restore terminal (default: true).
    pub catch_panics: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            mouse_mode: None,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
        }
    }
}

/// The program runtime.  Manages terminal setup, the event loop, and the
/// full [`Model`] lifecycle.
///
/// The loop is single-threaded and blocking: it renders, reads one terminal
/// event, routes it through [`Model::event`], and then drains every message
/// produced by the resulting commands before reading the next event.  No two
/// updates ever overlap.
///
/// # Example
///
/// ```rust,ignore
/// use floatfield_core::{Program, ProgramError};
///
/// fn main() -> Result<(), ProgramError> {
///     let model = Program::<MyApp>::new(())?.run()?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    options: ProgramOptions,
    queue: VecDeque<M::Message>,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// Returns an error if terminal initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            options,
            queue: VecDeque::new(),
            should_quit: false,
        };
        tracing::debug!("program initialized");
        program.enqueue(init_cmd);
        Ok(program)
    }

    /// Run the program. Blocks until quit and returns the final model.
    pub fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop();
        tracing::debug!("shutting down");
        restore_terminal(&self.options)?;
        result.map(|()| self.model)
    }

    fn event_loop(&mut self) -> Result<(), ProgramError> {
        loop {
            self.drain();
            if self.should_quit {
                return Ok(());
            }
            self.render()?;

            let event = TerminalEvent::from(crossterm::event::read()?);
            if let TerminalEvent::Key(_) = event {
                if !event.is_key_press() {
                    continue;
                }
            }
            if let Some(msg) = self.model.event(event) {
                self.queue.push_back(msg);
            }
        }
    }

    fn drain(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            let cmd = self.model.update(msg);
            self.enqueue(cmd);
            if self.should_quit {
                self.queue.clear();
            }
        }
    }

    fn enqueue(&mut self, cmd: Command<M::Message>) {
        let (messages, quit) = cmd.into_messages();
        self.queue.extend(messages);
        if quit {
            self.should_quit = true;
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    // Install panic hook that restores terminal (only once to avoid stacking)
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if let Some(mode) = options.mouse_mode {
        tracing::debug!(?mode, "mouse capture on");
        execute!(writer, EnableMouseCapture)?;
    }
    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    let backend = CrosstermBackend::new(writer);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> Result<(), std::io::Error> {
    // Best effort: keep restoring even if individual steps fail.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableBracketedPaste).ok();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}

/// Open a log file for debugging TUI applications.
///
/// Stdout belongs to the UI while a [`Program`] runs, so diagnostics go to a
/// file instead.  The file is opened in append mode; wrap it in a
/// [`std::sync::Mutex`] to hand it to a `tracing-subscriber` writer.
///
/// # Example
///
/// ```rust,no_run
/// use floatfield_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("debug.log").unwrap();
/// writeln!(f, "debug message").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}
