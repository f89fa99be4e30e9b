/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Component::update`](crate::Component::update).
///
/// The floatfield runtime is synchronous, so every command resolves on the
/// UI thread: immediate messages are queued and delivered before the next
/// terminal event is read, and a quit request ends the loop.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Deliver a follow-up message after this update:
/// let cmd = Command::message(Msg::FocusGained);
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg> {
    None,
    Action(Action<Msg>),
    Batch(Vec<Command<Msg>>),
}

/// Actions handled synchronously by the runtime.
pub enum Action<Msg> {
    /// Send a message immediately (queued behind the current update).
    Message(Msg),
    /// Quit the program.
    Quit,
}

impl<Msg> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Action(Action::Message(msg)),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Action(Action::Quit),
        }
    }

    /// Run multiple commands in order.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds
            .into_iter()
            .filter(|cmd| !cmd.is_none())
            .collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.swap_remove(0),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Whether this command does nothing.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Action(Action::Message(msg)) => Command::message(f(msg)),
            CommandInner::Action(Action::Quit) => Command::quit(),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(cmds.into_iter().map(|cmd| cmd.map_with(f)).collect()),
            },
        }
    }

    /// Flatten the command into its queued messages, in order.
    ///
    /// Returns `true` as the second element if any part of the command
    /// requested a quit.
    pub fn into_messages(self) -> (Vec<Msg>, bool) {
        let mut messages = Vec::new();
        let quit = self.collect(&mut messages);
        (messages, quit)
    }

    fn collect(self, out: &mut Vec<Msg>) -> bool {
        match self.inner {
            CommandInner::None => false,
            CommandInner::Action(Action::Message(msg)) => {
                out.push(msg);
                false
            }
            CommandInner::Action(Action::Quit) => true,
            CommandInner::Batch(cmds) => cmds
                .into_iter()
                .fold(false, |quit, cmd| cmd.collect(out) || quit),
        }
    }
}

impl<Msg> Default for Command<Msg> {
    fn default() -> Self {
        Command::none()
    }
}

impl<Msg> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            CommandInner::None => write!(f, "Command::None"),
            CommandInner::Action(Action::Message(_)) => write!(f, "Command::Message(..)"),
            CommandInner::Action(Action::Quit) => write!(f, "Command::Quit"),
            CommandInner::Batch(cmds) => write!(f, "Command::Batch({})", cmds.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_of_nothing_is_none() {
        let cmd: Command<u8> = Command::batch([Command::none(), Command::none()]);
        assert!(cmd.is_none());
    }

    #[test]
    fn batch_preserves_message_order() {
        let cmd = Command::batch([Command::message(1), Command::none(), Command::message(2)]);
        let (messages, quit) = cmd.into_messages();
        assert_eq!(messages, vec![1, 2]);
        assert!(!quit);
    }

    #[test]
    fn map_lifts_nested_messages() {
        let cmd = Command::batch([Command::message(1u8), Command::message(2u8)]);
        let (messages, _) = cmd.map(|n| u32::from(n) * 10).into_messages();
        assert_eq!(messages, vec![10, 20]);
    }

    #[test]
    fn messages_need_not_be_send() {
        use std::rc::Rc;
        let shared = Rc::new(7u8);
        let cmd = Command::message(Rc::clone(&shared)).map(|n| *n + 1);
        let (messages, _) = cmd.into_messages();
        assert_eq!(messages, vec![8]);
    }

    #[test]
    fn quit_survives_map_and_batch() {
        let cmd = Command::batch([Command::message(1u8), Command::quit()]).map(|n| n + 1);
        let (messages, quit) = cmd.into_messages();
        assert_eq!(messages, vec![2]);
        assert!(quit);
    }
}
