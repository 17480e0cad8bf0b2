// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core feedback types with no I/O.
//!
//! This module contains pure value objects shared by the toast, action,
//! badge and clipboard components. Nothing in here touches the network,
//! the clipboard or a timer runtime.
//!
//! # Modules
//!
//! - [`feedback`]: Bounded values ([`ToastCapacity`](feedback::ToastCapacity),
//!   [`PollInterval`](feedback::PollInterval), [`BufferCapacity`](feedback::BufferCapacity))
//!   and identifiers ([`ApplicationId`](feedback::ApplicationId))

pub mod feedback;
