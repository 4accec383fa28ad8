// SPDX-License-Identifier: MPL-2.0
use iced_gallery::api::{self, ImageSummary, PhotoClient};
use iced_gallery::app::favorites::FavoritesStore;
use iced_gallery::config::{self, Config};
use iced_gallery::error::ApiError;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::ui::gallery::{self, grid};
use std::fs;
use tempfile::tempdir;

fn listing_body(ids: std::ops::RangeInclusive<u32>) -> Vec<u8> {
    let items: Vec<String> = ids
        .map(|id| {
            format!(
                r#"{{"id":"{id}","author":"Author {id}","width":800,"height":600,"url":"https://unsplash.com/photos/{id}","download_url":"https://picsum.photos/id/{id}/800/600"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(",")).into_bytes()
}

fn page_message(page: u32, ids: std::ops::RangeInclusive<u32>) -> gallery::Message {
    gallery::Message::PageLoaded {
        page,
        result: api::decode_page(&listing_body(ids)),
    }
}

fn offline_client() -> PhotoClient {
    PhotoClient::new("http://127.0.0.1:9", "integration-tests", 64)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-loading"), "Loading...");

    settings.general.language = Some("pt-BR".to_string());
    config::save_to_path(&settings, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_pt = I18n::new(None, &loaded);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");
    assert_eq!(i18n_pt.tr("gallery-loading"), "Carregando...");
}

#[test]
fn decoded_page_renders_one_tile_per_summary() {
    let images: Vec<ImageSummary> = api::decode_page(&listing_body(101..=106)).expect("decode");
    assert_eq!(images.len(), api::PAGE_SIZE as usize);

    let layout = grid::layout(&images, false, 3);
    assert_eq!(layout.tile_count(), 6);
}

#[test]
fn malformed_id_fails_the_whole_page() {
    let body = br#"[{"id":"12","author":"a","download_url":"x"},{"id":"abc","author":"b","download_url":"y"}]"#;
    assert!(matches!(
        api::decode_page(body),
        Err(ApiError::InvalidId(id)) if id == "abc"
    ));
}

#[test]
fn favorites_scenario_across_pages() {
    let data_dir = tempdir().expect("data dir");
    let store = FavoritesStore::with_base_dir(data_dir.path().to_path_buf());
    let (mut state, warning) = gallery::State::new(offline_client(), store);
    assert!(warning.is_none());

    let _ = state.load_page(1);
    let _ = state.handle_message(page_message(1, 101..=106));
    let ids: Vec<u32> = state.images().iter().map(|image| image.id).collect();
    assert_eq!(ids, vec![101, 102, 103, 104, 105, 106]);

    let _ = state.handle_message(gallery::Message::ToggleFavorite(103));
    let persisted = fs::read_to_string(data_dir.path().join("favorites.json")).unwrap();
    assert_eq!(persisted, "[103]");

    let _ = state.handle_message(gallery::Message::NextPage);
    let _ = state.handle_message(page_message(2, 107..=112));
    assert_eq!(state.page(), 2);
    assert!(state.favorites().contains(103));

    let _ = state.handle_message(gallery::Message::PreviousPage);
    assert!(state.is_loading());
    let _ = state.handle_message(page_message(1, 101..=106));
    assert!(state.favorites().contains(103));

    // A fresh session reads the same favorites back.
    let store = FavoritesStore::with_base_dir(data_dir.path().to_path_buf());
    let (restarted, warning) = gallery::State::new(offline_client(), store);
    assert!(warning.is_none());
    assert!(restarted.favorites().contains(103));
    assert_eq!(restarted.favorites().len(), 1);
}

#[test]
fn failed_page_preserves_list() {
    let data_dir = tempdir().expect("data dir");
    let store = FavoritesStore::with_base_dir(data_dir.path().to_path_buf());
    let (mut state, _) = gallery::State::new(offline_client(), store);

    let _ = state.load_page(1);
    let _ = state.handle_message(page_message(1, 1..=6));
    let _ = state.handle_message(gallery::Message::NextPage);
    let (effect, _) = state.handle_message(gallery::Message::PageLoaded {
        page: 2,
        result: api::decode_page(b"<html>bad gateway</html>"),
    });

    assert!(matches!(effect, gallery::Effect::ShowWarning(_)));
    assert_eq!(state.images().len(), 6);
    assert!(!state.is_loading());
    assert!(state.load_failed());
}

#[test]
fn settings_directory_override_round_trip() {
    let config_dir = tempdir().expect("config dir");
    let mut settings = Config::default();
    settings.display.columns = Some(2);
    settings.api.base_url = "http://localhost:8080/".to_string();

    config::save_with_override(&settings, Some(config_dir.path().to_path_buf())).expect("save");
    let (loaded, warning) = config::load_with_override(Some(config_dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.display.columns(), 2);
    let client = PhotoClient::new(&loaded.api.base_url, &loaded.api.user_agent, 64);
    assert_eq!(client.endpoints().list(3), "http://localhost:8080/v2/list?page=3&limit=6");
}
