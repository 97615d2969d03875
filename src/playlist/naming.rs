use std::collections::HashMap;

use chrono::Local;
use rand::seq::SliceRandom;

use crate::models::Song;

/// Helper trait for string formatting
pub trait ToTitleCase {
    fn to_title_case(&self) -> String;
}

impl ToTitleCase for str {
    fn to_title_case(&self) -> String {
        self.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Fallback suffixes when no genre dominates a bucket.
const FALLBACK_SUFFIXES: &[&str] = &["tunes", "vibes", "jams", "grooves", "beats", "tracks"];

/// Display-name generation for built playlists
pub struct PlaylistNaming;

impl PlaylistNaming {
    /// Suggest a display name for a playlist bucket. Includes the
    /// dominant genre when one covers at least 40% of the songs,
    /// otherwise a random suffix from the fallback list. Cosmetic only;
    /// never fed back into classification.
    pub fn display_name(label: &str, songs: &[Song]) -> String {
        let weekday = Local::now().format("%A").to_string();

        let mut genre_counts: HashMap<&str, usize> = HashMap::new();
        for song in songs {
            if !song.genre.is_empty() {
                *genre_counts.entry(song.genre.as_str()).or_insert(0) += 1;
            }
        }

        if let Some((genre, &count)) = genre_counts.iter().max_by_key(|(_, count)| **count) {
            if !songs.is_empty() && count as f32 / songs.len() as f32 >= 0.4 {
                return format!("{} {} {}", label, weekday, genre.to_title_case()).to_lowercase();
            }
        }

        let mut rng = rand::thread_rng();
        let suffix = FALLBACK_SUFFIXES.choose(&mut rng).unwrap_or(&"tunes");
        format!("{} {} {}", label, weekday, suffix).to_lowercase()
    }
}
