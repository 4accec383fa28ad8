// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a paginated photo gallery built with the Iced GUI
//! framework.
//!
//! It browses the Lorem Picsum catalogue six images at a time, keeps a
//! locally persisted set of favorites, and shows per-image metadata on demand.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;

pub use app::config;
