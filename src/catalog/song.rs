//! The song record and its field-range validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid range for user ratings, inclusive.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Error, PartialEq)]
pub enum SongValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// A single song with its audio-feature attributes.
///
/// `index` is the zero-based position in the dataset's load order and is never
/// reassigned. `rating` is the only field mutated after load; it serializes as
/// `null` until a client sets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub index: usize,
    pub danceability: f64,
    pub energy: f64,
    pub key: i64,
    pub loudness: f64,
    pub mode: i64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub duration_ms: i64,
    pub time_signature: i64,
    pub num_bars: i64,
    pub num_sections: i64,
    pub num_segments: i64,
    pub rating: Option<u8>,
}

impl Song {
    /// Checks every range-constrained field. `loudness`, `tempo` and the
    /// count-like integer fields are unconstrained by the source schema.
    pub fn validate(&self) -> Result<(), SongValidationError> {
        check_unit_interval("danceability", self.danceability)?;
        check_unit_interval("energy", self.energy)?;
        check_unit_interval("acousticness", self.acousticness)?;
        check_unit_interval("instrumentalness", self.instrumentalness)?;
        check_unit_interval("liveness", self.liveness)?;
        check_unit_interval("valence", self.valence)?;
        check_int_range("key", self.key, 0, 11)?;
        check_int_range("mode", self.mode, 0, 1)?;
        if let Some(rating) = self.rating {
            if !RATING_RANGE.contains(&rating) {
                return Err(SongValidationError::RatingOutOfRange(rating));
            }
        }
        Ok(())
    }
}

fn check_unit_interval(field: &'static str, value: f64) -> Result<(), SongValidationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SongValidationError::OutOfRange {
            field,
            min: 0.0,
            max: 1.0,
            value,
        });
    }
    Ok(())
}

fn check_int_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), SongValidationError> {
    if value < min || value > max {
        return Err(SongValidationError::OutOfRange {
            field,
            min: min as f64,
            max: max as f64,
            value: value as f64,
        });
    }
    Ok(())
}
