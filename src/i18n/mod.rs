// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for user-facing feedback.
//!
//! Toast texts, busy labels and confirmation prompts are resolved through
//! the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to `en-US` when the requested locale is unavailable

pub mod fluent;
