// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`:
//!
//! - [`http`]: [`Transport`] over `reqwest`
//! - [`clipboard`]: [`SystemClipboard`] over `arboard` and a [`LegacyCopy`]
//!   that pipes the holder into a platform copy command
//! - [`terminal`]: confirmation prompt and toast printer for terminal hosts
//!
//! [`Transport`]: crate::application::port::Transport
//! [`SystemClipboard`]: crate::application::port::SystemClipboard
//! [`LegacyCopy`]: crate::application::port::LegacyCopy

pub mod clipboard;
pub mod http;
pub mod terminal;

pub use clipboard::{ArboardClipboard, CommandCopy};
pub use http::HttpTransport;
pub use terminal::{print_toast_events, TerminalConfirm};
