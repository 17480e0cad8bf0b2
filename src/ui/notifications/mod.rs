// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to report the result of an action (sent,
//! copied, failed) without blocking the page.
//!
//! # Components
//!
//! - [`notification`] - Core `Toast` struct, `ToastKind` and lifecycle `Phase`
//! - [`manager`] - `Manager`, the ordered container list with a capacity bound
//! - [`host`] - `ToastHost`, the shared handle that schedules removals
//! - [`toast`] - View model and terminal rendering
//!
//! # Usage
//!
//! ```ignore
//! use hiredesk::ui::notifications::{ToastHost, ToastKind};
//!
//! let host = ToastHost::new(capacity, ToastTiming::default(), diagnostics);
//! host.show_toast("Link copied to clipboard!", ToastKind::Success);
//! ```
//!
//! # Lifecycle
//!
//! - Visible for 4000 ms, then a 300 ms exit transition, then detached
//! - Container holds at most `capacity` toasts; overflow drops the oldest
//! - Container order is creation order

mod host;
mod manager;
mod notification;
pub mod toast;

pub use host::ToastHost;
pub use manager::{Manager, ToastEvent, ToastTiming};
pub use notification::{Phase, Toast, ToastId, ToastKind};
