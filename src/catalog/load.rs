//! Dataset loading.
//!
//! The source file is a single column-oriented JSON document: an object
//! mapping each field name to an object that maps string row indices ("0",
//! "1", ...) to that field's value for the row. Loading reassembles rows from
//! the columns and is all-or-nothing: any unreadable file, schema
//! inconsistency or out-of-range value aborts startup.

use super::Song;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

#[derive(Deserialize)]
struct RawColumns {
    id: HashMap<String, String>,
    title: HashMap<String, String>,
    danceability: HashMap<String, f64>,
    energy: HashMap<String, f64>,
    key: HashMap<String, i64>,
    loudness: HashMap<String, f64>,
    mode: HashMap<String, i64>,
    acousticness: HashMap<String, f64>,
    instrumentalness: HashMap<String, f64>,
    liveness: HashMap<String, f64>,
    valence: HashMap<String, f64>,
    tempo: HashMap<String, f64>,
    duration_ms: HashMap<String, i64>,
    time_signature: HashMap<String, i64>,
    num_bars: HashMap<String, i64>,
    num_sections: HashMap<String, i64>,
    num_segments: HashMap<String, i64>,
}

fn cell<'a, T>(
    column: &'a HashMap<String, T>,
    row_key: &str,
    field: &'static str,
) -> Result<&'a T> {
    column
        .get(row_key)
        .with_context(|| format!("Column '{}' has no value for row {}", field, row_key))
}

impl RawColumns {
    fn row(&self, index: usize) -> Result<Song> {
        let row_key = index.to_string();
        Ok(Song {
            index,
            id: cell(&self.id, &row_key, "id")?.clone(),
            title: cell(&self.title, &row_key, "title")?.clone(),
            danceability: *cell(&self.danceability, &row_key, "danceability")?,
            energy: *cell(&self.energy, &row_key, "energy")?,
            key: *cell(&self.key, &row_key, "key")?,
            loudness: *cell(&self.loudness, &row_key, "loudness")?,
            mode: *cell(&self.mode, &row_key, "mode")?,
            acousticness: *cell(&self.acousticness, &row_key, "acousticness")?,
            instrumentalness: *cell(&self.instrumentalness, &row_key, "instrumentalness")?,
            liveness: *cell(&self.liveness, &row_key, "liveness")?,
            valence: *cell(&self.valence, &row_key, "valence")?,
            tempo: *cell(&self.tempo, &row_key, "tempo")?,
            duration_ms: *cell(&self.duration_ms, &row_key, "duration_ms")?,
            time_signature: *cell(&self.time_signature, &row_key, "time_signature")?,
            num_bars: *cell(&self.num_bars, &row_key, "num_bars")?,
            num_sections: *cell(&self.num_sections, &row_key, "num_sections")?,
            num_segments: *cell(&self.num_segments, &row_key, "num_segments")?,
            rating: None,
        })
    }
}

pub fn load_songs<P: AsRef<Path>>(path: P) -> Result<Vec<Song>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {:?}", path))?;
    let columns: RawColumns = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse column-oriented dataset: {:?}", path))?;

    // Row keys are string-encoded integers; iterate 0..N in ascending integer
    // order instead of relying on map iteration order.
    let row_count = columns.id.len();
    let mut songs = Vec::with_capacity(row_count);
    for index in 0..row_count {
        let song = columns.row(index)?;
        song.validate()
            .with_context(|| format!("Invalid field value in row {}", index))?;
        songs.push(song);
    }

    info!("Loaded {} songs from {:?}", songs.len(), path);
    Ok(songs)
}
