// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: paging, the current page of images, favorites, and
//! the selected image detail.
//!
//! All network work is returned as [`Task`]s whose results come back as
//! [`Message`]s, so every state transition happens inside
//! [`State::handle_message`] and can be driven directly in tests.

use crate::api::{ImageDetail, ImageSummary, PhotoClient};
use crate::app::favorites::{FavoriteSet, FavoritesStore};
use crate::error::ApiError;
use iced::widget::image;
use iced::Task;
use std::collections::HashMap;

/// i18n key of the toast raised when a page cannot be fetched.
pub const PAGE_LOAD_ERROR_KEY: &str = "notification-page-load-error";

#[derive(Debug, Clone)]
pub enum Message {
    NextPage,
    PreviousPage,
    PageLoaded {
        page: u32,
        result: Result<Vec<ImageSummary>, ApiError>,
    },
    ThumbnailLoaded {
        id: u32,
        result: Result<Vec<u8>, ApiError>,
    },
    ToggleFavorite(u32),
    ImageClicked(u32),
    DetailLoaded {
        request: u64,
        id: u32,
        result: Result<ImageDetail, ApiError>,
    },
    DismissDetail,
    OpenDetailLink,
}

/// Side effects the application performs after a gallery message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Raise a warning toast with this i18n key.
    ShowWarning(String),
    /// A page arrived; an earlier page-load warning no longer applies.
    PageRecovered,
    /// Open this address in the system browser.
    OpenUrl(String),
}

#[derive(Debug)]
pub struct State {
    client: PhotoClient,
    favorites_store: FavoritesStore,
    favorites: FavoriteSet,
    /// Always >= 1.
    page: u32,
    images: Vec<ImageSummary>,
    loading: bool,
    /// Error of the most recent page request, cleared by the next success.
    last_error: Option<ApiError>,
    selected: Option<ImageDetail>,
    /// Bumped on every selection and dismissal; only a detail response
    /// carrying the current value is applied.
    detail_request: u64,
    /// Decoded thumbnails for the ids on the current page.
    thumbnails: HashMap<u32, image::Handle>,
}

impl State {
    /// Creates the controller and reads the favorites file.
    ///
    /// Returns the state and an optional warning key from loading favorites.
    /// No page is requested yet; call [`State::load_page`] to start.
    pub fn new(client: PhotoClient, favorites_store: FavoritesStore) -> (Self, Option<String>) {
        let (favorites, warning) = favorites_store.load();

        let state = Self {
            client,
            favorites_store,
            favorites,
            page: 1,
            images: Vec::new(),
            loading: false,
            last_error: None,
            selected: None,
            detail_request: 0,
            thumbnails: HashMap::new(),
        };
        (state, warning)
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn images(&self) -> &[ImageSummary] {
        &self.images
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the most recent page request failed.
    #[must_use]
    pub fn load_failed(&self) -> bool {
        self.last_error.is_some()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub fn selected_detail(&self) -> Option<&ImageDetail> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &HashMap<u32, image::Handle> {
        &self.thumbnails
    }

    /// Requests page `page` (clamped to 1) and marks the gallery as loading.
    ///
    /// A request already in flight is not cancelled; whichever response
    /// arrives last decides the displayed images.
    pub fn load_page(&mut self, page: u32) -> Task<Message> {
        let page = page.max(1);
        self.page = page;
        self.loading = true;
        tracing::debug!("Requesting page {}", page);

        let client = self.client.clone();
        Task::perform(
            async move { client.list_page(page).await },
            move |result| Message::PageLoaded { page, result },
        )
    }

    pub fn next_page(&mut self) -> Task<Message> {
        self.load_page(self.page.saturating_add(1))
    }

    /// Steps back one page. On page 1 nothing is requested.
    pub fn prev_page(&mut self) -> Task<Message> {
        if self.page <= 1 {
            return Task::none();
        }
        self.load_page(self.page - 1)
    }

    /// Flips `id` in the favorite set and rewrites the favorites file.
    ///
    /// Returns a warning key if the file could not be written; the in-memory
    /// set keeps the new membership either way.
    pub fn toggle_favorite(&mut self, id: u32) -> Option<String> {
        let now_favorite = self.favorites.toggle(id);
        tracing::debug!("Image {} favorite: {}", id, now_favorite);
        self.favorites_store.save(&self.favorites)
    }

    /// Requests the detail of `id`; the previous selection stays visible
    /// until the response arrives.
    pub fn select_image(&mut self, id: u32) -> Task<Message> {
        self.detail_request += 1;
        let request = self.detail_request;
        tracing::debug!("Requesting detail for image {}", id);

        let client = self.client.clone();
        Task::perform(
            async move { client.image_detail(id).await },
            move |result| Message::DetailLoaded {
                request,
                id,
                result,
            },
        )
    }

    /// Clears the selection and discards any detail response still in flight.
    pub fn dismiss_detail(&mut self) {
        self.detail_request += 1;
        self.selected = None;
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            // No paging under the detail card.
            Message::NextPage | Message::PreviousPage if self.selected.is_some() => {
                (Effect::None, Task::none())
            }
            Message::NextPage => (Effect::None, self.next_page()),
            Message::PreviousPage => (Effect::None, self.prev_page()),
            Message::PageLoaded { page, result } => {
                self.loading = false;
                match result {
                    Ok(images) => {
                        tracing::debug!("Page {} loaded with {} images", page, images.len());
                        self.last_error = None;
                        self.images = images;
                        let task = self.fetch_thumbnails();
                        (Effect::PageRecovered, task)
                    }
                    Err(err) => {
                        tracing::warn!("Failed to load page {}: {}", page, err);
                        self.last_error = Some(err);
                        (
                            Effect::ShowWarning(PAGE_LOAD_ERROR_KEY.to_string()),
                            Task::none(),
                        )
                    }
                }
            }
            Message::ThumbnailLoaded { id, result } => {
                match result {
                    Ok(bytes) if self.images.iter().any(|image| image.id == id) => {
                        self.thumbnails
                            .insert(id, image::Handle::from_bytes(bytes));
                    }
                    Ok(_) => {}
                    Err(err) => {
                        tracing::debug!("Thumbnail for image {} unavailable: {}", id, err);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::ToggleFavorite(id) => {
                let effect = self
                    .toggle_favorite(id)
                    .map_or(Effect::None, Effect::ShowWarning);
                (effect, Task::none())
            }
            Message::ImageClicked(id) => (Effect::None, self.select_image(id)),
            Message::DetailLoaded {
                request,
                id,
                result,
            } => {
                if request != self.detail_request {
                    tracing::debug!("Discarding stale detail for image {}", id);
                    return (Effect::None, Task::none());
                }
                match result {
                    Ok(detail) => self.selected = Some(detail),
                    Err(err) => {
                        tracing::error!("Failed to load detail for image {}: {}", id, err);
                    }
                }
                (Effect::None, Task::none())
            }
            Message::DismissDetail => {
                self.dismiss_detail();
                (Effect::None, Task::none())
            }
            Message::OpenDetailLink => {
                let effect = self
                    .selected
                    .as_ref()
                    .map_or(Effect::None, |detail| Effect::OpenUrl(detail.url.clone()));
                (effect, Task::none())
            }
        }
    }

    /// Drops thumbnails of images no longer shown and requests the missing ones.
    fn fetch_thumbnails(&mut self) -> Task<Message> {
        let images = &self.images;
        self.thumbnails
            .retain(|id, _| images.iter().any(|image| image.id == *id));

        let tasks: Vec<Task<Message>> = self
            .images
            .iter()
            .map(|image| image.id)
            .filter(|id| !self.thumbnails.contains_key(id))
            .map(|id| {
                let client = self.client.clone();
                Task::perform(
                    async move { client.thumbnail(id).await },
                    move |result| Message::ThumbnailLoaded { id, result },
                )
            })
            .collect();

        Task::batch(tasks)
    }
}
