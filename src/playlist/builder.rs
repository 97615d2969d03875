use super::classify::MoodClassifier;
use super::config::Profile;
use super::normalize::SongNormalizer;
use crate::models::{Mood, PlaylistMap, RawSong};

/// Groups a raw song collection into mood playlists
pub struct PlaylistBuilder {
    profile: Profile,
}

impl PlaylistBuilder {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Normalize and classify every song, appending it to its mood's
    /// bucket. Input order is preserved within each bucket; nothing is
    /// reordered or deduplicated, and malformed fields degrade to
    /// defaults instead of erroring.
    pub fn build(&self, songs: &[RawSong]) -> PlaylistMap {
        let mut playlists = PlaylistMap::new();
        for mood in [Mood::Hype, Mood::Chill, Mood::Mixed] {
            playlists.insert(mood.as_str().to_string(), Vec::new());
        }

        for raw in songs {
            let mut song = SongNormalizer::normalize_song(raw);
            let mood = MoodClassifier::classify(&song, &self.profile);
            song.mood = Some(mood);
            playlists
                .entry(mood.as_str().to_string())
                .or_default()
                .push(song);
        }

        playlists
    }
}
