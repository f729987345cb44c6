//! In-memory song store.

use super::song::{Song, RATING_RANGE};

/// Owns the full song collection for the life of the process.
///
/// Songs stay in load order (`index` ascending) and nothing is added or
/// removed after construction; `rating` is the only field ever mutated.
pub struct SongStore {
    songs: Vec<Song>,
}

impl SongStore {
    pub fn new(songs: Vec<Song>) -> Self {
        SongStore { songs }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Returns the sub-sequence overlapping `[(page-1)*size, (page-1)*size + size)`
    /// plus the total collection count. A page past the end of the collection
    /// is an empty list, not an error.
    ///
    /// Callers guarantee `page >= 1` and `size >= 1`.
    pub fn get_paged(&self, page: usize, size: usize) -> (Vec<Song>, usize) {
        let total = self.songs.len();
        let start = (page - 1).saturating_mul(size);
        if start >= total {
            return (Vec::new(), total);
        }
        let end = start.saturating_add(size).min(total);
        (self.songs[start..end].to_vec(), total)
    }

    /// Case-insensitive exact title match; with duplicate titles the first
    /// occurrence in load order wins.
    pub fn get_by_title(&self, title: &str) -> Option<&Song> {
        let needle = title.to_lowercase();
        self.songs.iter().find(|song| song.title.to_lowercase() == needle)
    }

    /// Sets the rating of the first song matching `title`, returning the
    /// updated record, or `None` when no song matches. The caller validates
    /// the range; the store only debug-asserts it.
    pub fn set_rating(&mut self, title: &str, rating: u8) -> Option<&Song> {
        debug_assert!(RATING_RANGE.contains(&rating));
        let needle = title.to_lowercase();
        let song = self
            .songs
            .iter_mut()
            .find(|song| song.title.to_lowercase() == needle)?;
        song.rating = Some(rating);
        Some(song)
    }
}
