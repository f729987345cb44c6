//! Song Analytics Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{load_songs, QueryError, Song, SongQueryService, SongStore};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
