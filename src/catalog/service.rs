//! Request-level validation and translation to store queries.
//!
//! This is the boundary where malformed input becomes a classified error;
//! nothing past this point inspects client input, and the store signals
//! absence with `Option` rather than an error.

use super::song::{Song, RATING_RANGE};
use super::store::SongStore;
use std::sync::{Arc, RwLock};
use thiserror::Error;

pub type GuardedSongStore = Arc<RwLock<SongStore>>;

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    /// Client input violated a constraint; surfaces as 400.
    #[error("{0}")]
    Validation(String),
    /// No song matched the requested title; surfaces as 404.
    #[error("Song with title '{title}' not found")]
    NotFound { title: String },
}

pub struct SongQueryService {
    store: GuardedSongStore,
    max_page_size: usize,
}

impl SongQueryService {
    pub fn new(store: GuardedSongStore, max_page_size: usize) -> Self {
        SongQueryService {
            store,
            max_page_size,
        }
    }

    /// Validates the page window and returns `(items, total)`.
    ///
    /// Reads take the shared lock, so listings proceed concurrently with each
    /// other and only serialize against rating updates.
    pub fn list_songs(&self, page: usize, size: usize) -> Result<(Vec<Song>, usize), QueryError> {
        if page < 1 {
            return Err(QueryError::Validation(
                "Page number must be greater than 0".to_owned(),
            ));
        }
        if size < 1 {
            return Err(QueryError::Validation(
                "Page size must be greater than 0".to_owned(),
            ));
        }
        if size > self.max_page_size {
            return Err(QueryError::Validation(format!(
                "Page size cannot exceed {}",
                self.max_page_size
            )));
        }

        Ok(self.store.read().unwrap().get_paged(page, size))
    }

    pub fn get_song(&self, title: &str) -> Result<Song, QueryError> {
        self.store
            .read()
            .unwrap()
            .get_by_title(title)
            .cloned()
            .ok_or_else(|| QueryError::NotFound {
                title: title.to_owned(),
            })
    }

    /// Validates the rating range before taking the write lock; an update on
    /// an unknown title never mutates anything.
    pub fn update_rating(&self, title: &str, rating: u8) -> Result<Song, QueryError> {
        if !RATING_RANGE.contains(&rating) {
            return Err(QueryError::Validation(
                "Rating must be between 1 and 5".to_owned(),
            ));
        }

        self.store
            .write()
            .unwrap()
            .set_rating(title, rating)
            .cloned()
            .ok_or_else(|| QueryError::NotFound {
                title: title.to_owned(),
            })
    }
}
