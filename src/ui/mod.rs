// SPDX-License-Identifier: MPL-2.0
//! User feedback components.
//!
//! Everything a page needs to report on user actions without blocking:
//!
//! - [`notifications`] - Toast container, lifecycle and rendering
//! - [`action`] - Confirmed async actions with a busy control
//! - [`badge`] - Unread-count badge driven by polling
//! - [`clipboard`] - Copy helper with a legacy fallback
//! - [`csrf`] - CSRF token lookup for state-changing requests
//! - [`control`] - In-memory buttons and table cells
//! - [`feedback`] - Services shared by the components above

pub mod action;
pub mod badge;
pub mod clipboard;
pub mod control;
pub mod csrf;
pub mod feedback;
pub mod notifications;
