use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Mood, PlaylistMap, Song};

/// Aggregate statistics across all playlists
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistStats {
    pub total_songs: usize,
    pub hype_count: usize,
    pub chill_count: usize,
    pub mixed_count: usize,
    pub hype_ratio: f64,
    pub avg_energy: f64,
    pub top_artist: String,
    pub top_artist_count: usize,
}

/// Merge and statistics operations over playlist maps
pub struct PlaylistAggregator;

impl PlaylistAggregator {
    /// Merge two playlist maps into a new one. The key set is the union
    /// of both inputs; for each key, all of `a`'s songs precede all of
    /// `b`'s. Neither input is touched.
    pub fn merge(a: &PlaylistMap, b: &PlaylistMap) -> PlaylistMap {
        let mut merged = PlaylistMap::new();
        for (key, songs) in a.iter().chain(b.iter()) {
            merged
                .entry(key.clone())
                .or_insert_with(Vec::new)
                .extend(songs.iter().cloned());
        }
        merged
    }

    /// Most frequent non-empty artist and its count, `("", 0)` when no
    /// song has an artist. Ties break to the artist encountered first in
    /// input order.
    pub fn most_common_artist(songs: &[Song]) -> (String, usize) {
        let artists: Vec<&str> = songs
            .iter()
            .map(|song| song.artist.trim())
            .filter(|artist| !artist.is_empty())
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for &artist in &artists {
            *counts.entry(artist).or_insert(0) += 1;
        }

        let mut top_artist = "";
        let mut top_count = 0;
        for &artist in &artists {
            let count = counts[artist];
            if count > top_count {
                top_artist = artist;
                top_count = count;
            }
        }

        (top_artist.to_string(), top_count)
    }

    /// Compute statistics across every bucket of the map. An empty map
    /// yields zeroed results rather than dividing by zero.
    pub fn compute_stats(playlists: &PlaylistMap) -> PlaylistStats {
        let all_songs: Vec<Song> = playlists.values().flatten().cloned().collect();

        let bucket_len = |mood: Mood| playlists.get(mood.as_str()).map_or(0, Vec::len);
        let hype_count = bucket_len(Mood::Hype);
        let chill_count = bucket_len(Mood::Chill);
        let mixed_count = bucket_len(Mood::Mixed);

        let total_songs = all_songs.len();
        let hype_ratio = if total_songs > 0 {
            hype_count as f64 / total_songs as f64
        } else {
            0.0
        };

        let avg_energy = if all_songs.is_empty() {
            0.0
        } else {
            let total_energy: i64 = all_songs.iter().map(|song| song.energy).sum();
            total_energy as f64 / all_songs.len() as f64
        };

        let (top_artist, top_artist_count) = Self::most_common_artist(&all_songs);

        PlaylistStats {
            total_songs,
            hype_count,
            chill_count,
            mixed_count,
            hype_ratio,
            avg_energy,
            top_artist,
            top_artist_count,
        }
    }
}
