// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - Controller, tile grid, and detail overlay
//! - [`navbar`] - Paging controls and theme toggle
//! - [`notifications`] - Toast notifications for recoverable problems
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Colors, spacing, and sizing constants
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
