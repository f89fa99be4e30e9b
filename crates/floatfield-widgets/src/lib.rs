//! Widgets for **floatfield**.
//!
//! The main export is the [`floating_field`] module: a floating-label text
//! field whose presentation logic is a pure state machine, plus
//! [`TerminalField`](floating_field::TerminalField), which hosts it as a
//! [`floatfield_core::Component`] in any ratatui layout.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`floating_field`] | Controller, renderer, validators and terminal host |
//! | [`chrome`] | Focus-aware frame helpers |
//! | [`textutil`] | Unicode width, truncation and scrolling helpers |

pub mod chrome;
pub mod floating_field;
pub mod textutil;
