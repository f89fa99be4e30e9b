use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that its
/// [`view`](Component::view) receives an `area: Rect`, so a parent decides
/// where each child draws.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// use [`Command::map`] to lift the commands it returns:
///
/// ```rust,ignore
/// use floatfield_core::{Command, Component, Model};
/// use floatfield_widgets::floating_field::{self, TerminalField};
///
/// struct App { email: TerminalField }
///
/// enum AppMsg { Email(floating_field::Message) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Email(m) => self.email.update(m).map(AppMsg::Email),
///         }
///     }
/// }
/// ```
pub trait Component {
    /// The component's internal message type.
    type Message;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent can query this to decide which child receives keyboard
    /// events.  The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
