// SPDX-License-Identifier: MPL-2.0
//! Favorite image ids and their on-disk JSON mirror.
//!
//! The file holds a plain JSON array of integer ids in ascending order
//! (`[7, 103]`). It is read once at startup and rewritten after every toggle,
//! so it stays the single source of truth across sessions.
//!
//! # Path Resolution
//!
//! 1. Use [`FavoritesStore::with_base_dir`] with an explicit directory
//! 2. Set `ICED_GALLERY_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// File name within the app data directory.
const FAVORITES_FILE: &str = "favorites.json";

/// Set of favorite image ids.
///
/// Ids are kept sorted so that the persisted array depends only on
/// membership, never on toggle history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<u32>,
}

impl FromIterator<u32> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl FavoriteSet {
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Favorite ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Reads and writes the favorites file.
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    base_dir: Option<PathBuf>,
}

impl FavoritesStore {
    /// Store using the standard data directory resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rooted at an explicit directory.
    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }

    /// Full path of the favorites file, if a data directory is available.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(self.base_dir.clone()).map(|mut path| {
            path.push(FAVORITES_FILE);
            path
        })
    }

    /// Loads the favorite set.
    ///
    /// Returns a tuple of (set, optional_warning). A missing file is a fresh
    /// start and yields no warning; unreadable or corrupted files yield an
    /// empty set and a notification key.
    pub fn load(&self) -> (FavoriteSet, Option<String>) {
        let Some(path) = self.path() else {
            return (FavoriteSet::default(), None);
        };

        if !path.exists() {
            return (FavoriteSet::default(), None);
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<FavoriteSet>(&content) {
                Ok(set) => {
                    tracing::info!("Loaded {} favorites from {}", set.len(), path.display());
                    (set, None)
                }
                Err(err) => {
                    tracing::warn!("Corrupted favorites file {}: {}", path.display(), err);
                    (
                        FavoriteSet::default(),
                        Some("notification-favorites-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!("Cannot read favorites file {}: {}", path.display(), err);
                (
                    FavoriteSet::default(),
                    Some("notification-favorites-read-error".to_string()),
                )
            }
        }
    }

    /// Overwrites the favorites file with `set`.
    ///
    /// Creates the parent directory if needed. Returns an optional warning
    /// key if the write failed.
    pub fn save(&self, set: &FavoriteSet) -> Option<String> {
        let Some(path) = self.path() else {
            return Some("notification-favorites-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-favorites-dir-error".to_string());
            }
        }

        let content = match serde_json::to_string(set) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Cannot encode favorites: {}", err);
                return Some("notification-favorites-write-error".to_string());
            }
        };

        if let Err(err) = fs::write(&path, content) {
            tracing::warn!("Cannot write favorites file {}: {}", path.display(), err);
            return Some("notification-favorites-write-error".to_string());
        }

        tracing::debug!("Saved {} favorites", set.len());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = FavoriteSet::default();
        assert!(set.toggle(103));
        assert!(set.contains(103));
        assert!(!set.toggle(103));
        assert!(!set.contains(103));
        assert!(set.is_empty());
    }

    #[test]
    fn on_off_on_leaves_id_favorited() {
        let mut set = FavoriteSet::default();
        set.toggle(5);
        set.toggle(5);
        set.toggle(5);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn ids_are_sorted_regardless_of_toggle_order() {
        let mut set = FavoriteSet::default();
        set.toggle(9);
        set.toggle(2);
        set.toggle(7);
        set.toggle(2);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![7, 9]);
    }

    #[test]
    fn json_is_a_plain_array() {
        let set: FavoriteSet = [103, 7].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[7,103]");
    }

    #[test]
    fn duplicate_ids_in_file_are_collapsed() {
        let set: FavoriteSet = serde_json::from_str("[4,4,1,4]").unwrap();
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FavoritesStore::with_base_dir(temp_dir.path().to_path_buf());

        let set = [103].into_iter().collect::<FavoriteSet>();
        assert!(store.save(&set).is_none(), "save should succeed");

        let written = fs::read_to_string(temp_dir.path().join(FAVORITES_FILE)).unwrap();
        assert_eq!(written, "[103]");

        let (loaded, warning) = store.load();
        assert!(warning.is_none());
        assert_eq!(loaded, set);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FavoritesStore::with_base_dir(temp_dir.path().to_path_buf());

        let (set, warning) = store.load();
        assert!(warning.is_none(), "should not warn for missing file");
        assert!(set.is_empty());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(FAVORITES_FILE), "{not json").expect("write file");
        let store = FavoritesStore::with_base_dir(temp_dir.path().to_path_buf());

        let (set, warning) = store.load();
        assert!(set.is_empty());
        assert_eq!(
            warning.as_deref(),
            Some("notification-favorites-parse-error")
        );
    }

    #[test]
    fn negative_ids_are_rejected_as_corrupted() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(FAVORITES_FILE), "[-1]").expect("write file");
        let store = FavoritesStore::with_base_dir(temp_dir.path().to_path_buf());

        let (_, warning) = store.load();
        assert!(warning.is_some());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");
        let store = FavoritesStore::with_base_dir(nested.clone());

        assert!(store.save(&[1].into_iter().collect()).is_none());
        assert!(nested.join(FAVORITES_FILE).exists());
    }

    #[test]
    fn double_toggle_restores_persisted_representation() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FavoritesStore::with_base_dir(temp_dir.path().to_path_buf());
        let file = temp_dir.path().join(FAVORITES_FILE);

        let mut set: FavoriteSet = [1, 2].into_iter().collect();
        store.save(&set);
        let before = fs::read_to_string(&file).unwrap();

        // Removing and re-adding an existing favorite must not reorder the file.
        set.toggle(1);
        store.save(&set);
        set.toggle(1);
        store.save(&set);

        assert_eq!(fs::read_to_string(&file).unwrap(), before);
    }
}
