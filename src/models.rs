use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A song record as it arrives from the library file. Every field may be
/// absent or hold an unexpected JSON type; the normalizer coerces them
/// into a [`Song`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSong {
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub artist: Value,
    #[serde(default)]
    pub genre: Value,
    #[serde(default)]
    pub energy: Value,
    #[serde(default)]
    pub tags: Value,
}

/// Mood label assigned to a classified song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Hype,
    Chill,
    Mixed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Hype => "Hype",
            Mood::Chill => "Chill",
            Mood::Mixed => "Mixed",
        }
    }

    /// Parse a canonical mood label. Anything else is `None`; call sites
    /// that coerce unknown labels (history summaries) fall back to
    /// [`Mood::Mixed`] themselves.
    pub fn from_label(label: &str) -> Option<Mood> {
        match label {
            "Hype" => Some(Mood::Hype),
            "Chill" => Some(Mood::Chill),
            "Mixed" => Some(Mood::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical song shape produced by normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub energy: i64,
    pub tags: Vec<String>,
    /// Set once by the builder after classification.
    #[serde(default)]
    pub mood: Option<Mood>,
}

/// Songs grouped by mood label. Keyed by label strings rather than
/// [`Mood`] so merged maps can carry arbitrary keys; `BTreeMap` keeps
/// iteration order deterministic.
pub type PlaylistMap = BTreeMap<String, Vec<Song>>;
