// SPDX-License-Identifier: MPL-2.0
//! `hiredesk` provides the user-feedback layer of the HireDesk hiring
//! platform: transient toasts, confirmed async actions with a busy control,
//! a polled unread-notification badge and a copy-to-clipboard helper.
//!
//! The components talk to the outside world through the ports in
//! [`application::port`]; [`infrastructure`] provides the HTTP, clipboard
//! and terminal adapters, and [`app::App`] wires everything together.

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
