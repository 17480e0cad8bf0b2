// SPDX-License-Identifier: MPL-2.0
//! Feedback domain types.

mod newtypes;

pub use newtypes::{
    buffer_capacity_bounds, poll_interval_bounds, toast_capacity_bounds, ApplicationId,
    BufferCapacity, PollInterval, ToastCapacity,
};
