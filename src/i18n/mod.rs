// SPDX-License-Identifier: MPL-2.0
//! Localization using the Fluent system.
//!
//! Translation bundles are embedded from `assets/i18n/*.ftl` at build time.
//! The active locale is picked from the CLI flag, then the config file, then
//! the OS locale, falling back to `en-US`.

pub mod fluent;
