//! **floatfield** -- a floating-label text field for [`ratatui`].
//!
//! Umbrella crate re-exporting everything needed from a single dependency:
//!
//! * All public items from [`floatfield_core`] at the crate root ([`Model`],
//!   [`Component`], [`Command`], [`Program`], [`run`], etc.).
//! * The [`widgets`] module re-exports [`floatfield_widgets`].
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use floatfield::widgets::floating_field::{FloatingField, FnValidator, TerminalField};
//!
//! let email = TerminalField::new(
//!     FloatingField::new("Email")
//!         .with_validator(Arc::new(FnValidator::new(|s| s.contains('@')))),
//! );
//! ```

pub use floatfield_core::*;
pub mod widgets {
    pub use floatfield_widgets::*;
}

pub use crossterm;
pub use ratatui;
