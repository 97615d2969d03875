use super::config::Profile;
use crate::models::{Mood, Song};

/// Genre substrings that push a song into the Hype bucket.
const HYPE_KEYWORDS: &[&str] = &["rock", "punk", "party"];

/// Genre substrings that mark a song as Chill.
const CHILL_KEYWORDS: &[&str] = &["lofi", "ambient", "sleep"];

/// Mood classification using static helper functions
pub struct MoodClassifier;

impl MoodClassifier {
    /// Check if a song qualifies as Hype under the profile: favorite
    /// genre (exact match), energy at or above the hype threshold, or a
    /// hype keyword anywhere in the genre.
    pub fn is_hype(song: &Song, profile: &Profile) -> bool {
        let keyword_hit = HYPE_KEYWORDS
            .iter()
            .any(|keyword| song.genre.contains(keyword));
        song.genre == profile.favorite_genre
            || song.energy >= profile.hype_min_energy
            || keyword_hit
    }

    /// Check if a song qualifies as Chill under the profile: energy at or
    /// below the chill threshold, or a chill keyword in the genre.
    pub fn is_chill(song: &Song, profile: &Profile) -> bool {
        let keyword_hit = CHILL_KEYWORDS
            .iter()
            .any(|keyword| song.genre.contains(keyword));
        song.energy <= profile.chill_max_energy || keyword_hit
    }

    /// Return the mood label for a song. Hype wins when a song satisfies
    /// both predicates; that precedence is part of the contract.
    pub fn classify(song: &Song, profile: &Profile) -> Mood {
        if Self::is_hype(song, profile) {
            Mood::Hype
        } else if Self::is_chill(song, profile) {
            Mood::Chill
        } else {
            Mood::Mixed
        }
    }
}
