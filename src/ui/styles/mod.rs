// SPDX-License-Identifier: MPL-2.0
//! Style functions for gallery widgets.

pub mod button;
pub mod container;
