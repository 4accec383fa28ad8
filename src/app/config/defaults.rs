// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// API Defaults
// ==========================================================================

/// Public Lorem Picsum endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://picsum.photos";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Tiles per row.
pub const DEFAULT_COLUMNS: u16 = 3;

pub const MIN_COLUMNS: u16 = 1;

pub const MAX_COLUMNS: u16 = 6;

/// Edge length in pixels of the square thumbnails requested for tiles.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 400;

pub const MIN_THUMBNAIL_SIZE: u32 = 64;

pub const MAX_THUMBNAIL_SIZE: u32 = 1200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_defaults_are_in_range() {
        assert!((MIN_COLUMNS..=MAX_COLUMNS).contains(&DEFAULT_COLUMNS));
    }

    #[test]
    fn thumbnail_defaults_are_in_range() {
        assert!((MIN_THUMBNAIL_SIZE..=MAX_THUMBNAIL_SIZE).contains(&DEFAULT_THUMBNAIL_SIZE));
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(DEFAULT_USER_AGENT.starts_with("IcedGallery/"));
        assert!(DEFAULT_USER_AGENT.len() > "IcedGallery/".len());
    }
}
