//! Core runtime for **floatfield**.
//!
//! `floatfield-core` provides the traits, types, and the small synchronous
//! runtime that host floatfield widgets in a terminal.  Programs follow the
//! Elm-style **init -> update -> view** cycle, with side effects returned as
//! [`Command`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view / event) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Follow-up messages and quit requests |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for a [`Model`] |
//! | [`TestComponent`](testing::TestComponent) | Headless harness for a [`Component`] |
//!
//! Everything runs on one thread: an event is fully processed, including
//! every message it queues, before the next one is read.

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::{MouseMode, TerminalEvent};
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};

/// Run a floatfield application with default options.
pub fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run()
}

/// Run with custom options.
pub fn run_with<M: Model>(flags: M::Flags, options: ProgramOptions) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run()
}
