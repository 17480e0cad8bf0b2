// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the feedback components and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The `ui` feedback components only talk to ports, never to `reqwest` or
//!   `arboard` directly
//!
//! # Example
//!
//! ```ignore
//! use hiredesk::application::port::{RequestDescriptor, Transport};
//! use hiredesk::infrastructure::http::HttpTransport;
//!
//! let transport = HttpTransport::new("http://127.0.0.1:8000", timeout, None)?;
//! let body = transport.execute(&RequestDescriptor::unread_count()).await?;
//! ```

pub mod port;
