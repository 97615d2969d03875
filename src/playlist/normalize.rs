use serde_json::Value;

use crate::models::{RawSong, Song};

/// Song normalization using static helper functions
pub struct SongNormalizer;

impl SongNormalizer {
    /// Trim a JSON string value, optionally lowercasing it. Any
    /// non-string value normalizes to the empty string.
    pub fn normalize_string(value: &Value, lowercase: bool) -> String {
        let Some(text) = value.as_str() else {
            return String::new();
        };
        let trimmed = text.trim();
        if lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        }
    }

    /// Normalize a song title for comparisons.
    pub fn normalize_title(title: &Value) -> String {
        Self::normalize_string(title, false)
    }

    /// Normalize an artist name for comparisons.
    pub fn normalize_artist(artist: &Value) -> String {
        Self::normalize_string(artist, true)
    }

    /// Normalize a genre name for comparisons.
    pub fn normalize_genre(genre: &Value) -> String {
        Self::normalize_string(genre, true)
    }

    /// Coerce an energy value to an integer. Textual input is parsed
    /// (0 when unparseable), numeric input truncates toward zero, and
    /// anything else is 0.
    pub fn normalize_energy(energy: &Value) -> i64 {
        match energy {
            Value::String(text) => text.trim().parse().unwrap_or(0),
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// A single string wraps into a one-element list; arrays keep their
    /// string elements; any other value carries no usable tags.
    pub fn normalize_tags(tags: &Value) -> Vec<String> {
        match tags {
            Value::String(tag) => vec![tag.clone()],
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Produce the canonical song shape. The mood slot stays empty until
    /// the builder classifies the song. Idempotent: feeding the result
    /// back through changes nothing.
    pub fn normalize_song(raw: &RawSong) -> Song {
        Song {
            title: Self::normalize_title(&raw.title),
            artist: Self::normalize_artist(&raw.artist),
            genre: Self::normalize_genre(&raw.genre),
            energy: Self::normalize_energy(&raw.energy),
            tags: Self::normalize_tags(&raw.tags),
            mood: None,
        }
    }
}
