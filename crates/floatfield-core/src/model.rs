use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait.
///
/// The runtime drives an **init -> view -> event -> update** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`].
/// 2. [`view`](Model::view) renders the current state to a [`Frame`].
/// 3. Each terminal event is offered to [`event`](Model::event), which maps
///    it to a message (or drops it).
/// 4. [`update`](Model::update) processes the message and returns a
///    [`Command`]; queued messages are processed before the next event.
///
/// # Example
///
/// ```rust,ignore
/// use floatfield_core::{Command, Model, TerminalEvent};
/// use ratatui::Frame;
/// use ratatui::widgets::Paragraph;
///
/// struct Counter { count: i32 }
///
/// enum Msg { Increment, Quit }
///
/// impl Model for Counter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Counter { count: 0 }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Increment => self.count += 1,
///             Msg::Quit => return Command::quit(),
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new(format!("{}", self.count)), frame.area());
///     }
///
///     fn event(&self, event: TerminalEvent) -> Option<Msg> {
///         match event {
///             TerminalEvent::Key(_) => Some(Msg::Increment),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Model: Sized {
    /// The application's message type.
    type Message;

    /// Initialization data passed to [`Model::init`].
    type Flags;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This should be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Map a terminal event to a message.
    ///
    /// Routing decisions (which child is focused, global shortcuts) belong
    /// here.  The default implementation drops every event.
    fn event(&self, event: TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }
}
