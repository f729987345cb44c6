//! Test fixture creation for the song dataset
//!
//! Produces a column-oriented JSON file in the same shape as the production
//! dataset: each field maps string row indices to values.

use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary two-song dataset file.
/// Returns (temp_dir, dataset_path); the file lives until the dir is dropped.
pub fn create_test_dataset() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let dataset_path = dir.path().join("playlist.json");

    let dataset = json!({
        "id": {"0": "test_id_1", "1": "test_id_2"},
        "title": {"0": "Test Song 1", "1": "Test Song 2"},
        "danceability": {"0": 0.5, "1": 0.7},
        "energy": {"0": 0.6, "1": 0.8},
        "key": {"0": 1, "1": 2},
        "loudness": {"0": -5.0, "1": -4.0},
        "mode": {"0": 1, "1": 0},
        "acousticness": {"0": 0.3, "1": 0.4},
        "instrumentalness": {"0": 0.1, "1": 0.2},
        "liveness": {"0": 0.2, "1": 0.3},
        "valence": {"0": 0.4, "1": 0.5},
        "tempo": {"0": 120.0, "1": 130.0},
        "duration_ms": {"0": 200000, "1": 210000},
        "time_signature": {"0": 4, "1": 4},
        "num_bars": {"0": 100, "1": 110},
        "num_sections": {"0": 5, "1": 6},
        "num_segments": {"0": 500, "1": 550}
    });

    fs::write(&dataset_path, serde_json::to_string_pretty(&dataset)?)?;

    Ok((dir, dataset_path))
}
