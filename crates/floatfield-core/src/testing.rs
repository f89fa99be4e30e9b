use crate::command::Command;
use crate::component::Component;
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Messages produced by commands are collected and can be flushed with
/// [`drain_messages`](TestProgram::drain_messages), exactly as the runtime
/// would process them before reading the next terminal event.
///
/// # Example
///
/// ```rust,ignore
/// use floatfield_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<SignupForm>::new(());
/// prog.send_event(TerminalEvent::Key(key(KeyCode::Char('a'))));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 6).contains("Email"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Route a terminal event through [`Model::event`] and update with the
    /// resulting message, if any.
    pub fn send_event(&mut self, event: TerminalEvent) {
        if let Some(msg) = self.model.event(event) {
            self.send(msg);
        }
    }

    /// Process all pending messages until no new ones are generated.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Whether any command so far requested a quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        draw(width, height, |frame| self.model.view(frame))
    }

    /// Render the model and return the visible content as a plain string.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        let (messages, quit) = cmd.into_messages();
        self.pending_messages.extend(messages);
        self.quit_requested |= quit;
    }
}

/// A headless harness for a single [`Component`].
///
/// Commands returned from [`Component::update`] are fed back into the
/// component when [`drain_messages`](TestComponent::drain_messages) runs,
/// and every message the component saw is recorded so tests can assert on
/// outbound notifications.
pub struct TestComponent<C: Component> {
    component: C,
    pending_messages: Vec<C::Message>,
    seen: Vec<C::Message>,
}

impl<C: Component> TestComponent<C>
where
    C::Message: Clone,
{
    /// Wrap an already-constructed component.
    pub fn new(component: C) -> Self {
        Self {
            component,
            pending_messages: Vec::new(),
            seen: Vec::new(),
        }
    }

    /// Send a message and queue whatever the component answers with.
    pub fn send(&mut self, msg: C::Message) {
        self.seen.push(msg.clone());
        let cmd = self.component.update(msg);
        let (messages, _) = cmd.into_messages();
        self.pending_messages.extend(messages);
    }

    /// Send a message and then flush every follow-up message.
    pub fn send_and_drain(&mut self, msg: C::Message) {
        self.send(msg);
        self.drain_messages();
    }

    /// Process all pending messages until no new ones are generated.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Every message delivered to the component so far, in order.
    pub fn seen(&self) -> &[C::Message] {
        &self.seen
    }

    /// Get a shared reference to the component for assertions.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Get a mutable reference to the component for direct test setup.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component into a buffer of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        draw(width, height, |frame| {
            let area = frame.area();
            self.component.view(frame, area);
        })
    }

    /// Render the component and return the visible content as a plain string.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }
}

fn draw(width: u16, height: u16, f: impl FnOnce(&mut ratatui::Frame)) -> Buffer {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => panic!("test backend failed to initialize: {e}"),
    };
    if let Err(e) = terminal.draw(f) {
        panic!("test backend failed to draw: {e}");
    }
    terminal.backend().buffer().clone()
}

/// Concatenate each row of the buffer; rows are separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    struct Counter {
        count: i64,
    }

    #[derive(Debug, Clone)]
    enum CounterMsg {
        Increment,
        Decrement,
        Twice,
        Quit,
    }

    impl Model for Counter {
        type Message = CounterMsg;
        type Flags = i64;

        fn init(initial: i64) -> (Self, Command<CounterMsg>) {
            (Counter { count: initial }, Command::none())
        }

        fn update(&mut self, msg: CounterMsg) -> Command<CounterMsg> {
            match msg {
                CounterMsg::Increment => self.count += 1,
                CounterMsg::Decrement => self.count -= 1,
                CounterMsg::Twice => {
                    return Command::batch([
                        Command::message(CounterMsg::Increment),
                        Command::message(CounterMsg::Increment),
                    ])
                }
                CounterMsg::Quit => return Command::quit(),
            }
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = format!("Count: {}", self.count);
            frame.render_widget(Paragraph::new(text), frame.area());
        }

        fn event(&self, event: TerminalEvent) -> Option<CounterMsg> {
            match event {
                TerminalEvent::FocusGained => Some(CounterMsg::Increment),
                TerminalEvent::FocusLost => Some(CounterMsg::Decrement),
                _ => None,
            }
        }
    }

    impl Component for Counter {
        type Message = CounterMsg;

        fn update(&mut self, msg: CounterMsg) -> Command<CounterMsg> {
            Model::update(self, msg)
        }

        fn view(&self, frame: &mut ratatui::Frame, area: Rect) {
            frame.render_widget(Paragraph::new(format!("Count: {}", self.count)), area);
        }
    }

    #[test]
    fn test_program_init_with_flags() {
        let prog = TestProgram::<Counter>::new(42);
        assert_eq!(prog.model().count, 42);
    }

    #[test]
    fn test_program_routes_events() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send_event(TerminalEvent::FocusGained);
        prog.send_event(TerminalEvent::FocusGained);
        prog.send_event(TerminalEvent::Resize(80, 24));
        prog.send_event(TerminalEvent::FocusLost);
        assert_eq!(prog.model().count, 1);
    }

    #[test]
    fn test_program_drains_batched_messages() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send(CounterMsg::Twice);
        assert_eq!(prog.model().count, 0);
        prog.drain_messages();
        assert_eq!(prog.model().count, 2);
    }

    #[test]
    fn test_program_records_quit() {
        let mut prog = TestProgram::<Counter>::new(0);
        assert!(!prog.quit_requested());
        prog.send(CounterMsg::Quit);
        assert!(prog.quit_requested());
    }

    #[test]
    fn test_program_render_after_update() {
        let mut prog = TestProgram::<Counter>::new(0);
        prog.send(CounterMsg::Increment);
        prog.send(CounterMsg::Increment);
        prog.send(CounterMsg::Increment);
        let content = prog.render_string(40, 1);
        assert!(content.contains("Count: 3"));
    }

    #[test]
    fn test_component_records_follow_ups() {
        let mut harness = TestComponent::new(Counter { count: 0 });
        harness.send_and_drain(CounterMsg::Twice);
        assert_eq!(harness.component().count, 2);
        assert_eq!(harness.seen().len(), 3);
        assert!(harness.render_string(20, 1).starts_with("Count: 2"));
    }
}
