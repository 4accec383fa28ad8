// SPDX-License-Identifier: MPL-2.0
//! The photo gallery: controller, tile grid, and detail overlay.

pub mod component;
pub mod detail;
pub mod grid;

pub use component::{Effect, Message, State};
