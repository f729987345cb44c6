mod load;
mod service;
mod song;
mod store;

pub use load::load_songs;
pub use service::{GuardedSongStore, QueryError, SongQueryService};
pub use song::{Song, SongValidationError, RATING_RANGE};
pub use store::SongStore;
