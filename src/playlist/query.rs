use rand::Rng;
use rand::rngs::ThreadRng;
use serde::Serialize;
use serde_json::Value;

use crate::models::{Mood, PlaylistMap, Song};

/// Song field targeted by a search query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    Title,
    #[default]
    Artist,
    Genre,
    Energy,
    Tags,
    Mood,
}

impl SearchField {
    /// Parse a field name from user input. Unknown names are `None` so
    /// the caller can report them.
    pub fn from_name(name: &str) -> Option<SearchField> {
        match name.trim().to_lowercase().as_str() {
            "title" => Some(SearchField::Title),
            "artist" => Some(SearchField::Artist),
            "genre" => Some(SearchField::Genre),
            "energy" => Some(SearchField::Energy),
            "tags" => Some(SearchField::Tags),
            "mood" => Some(SearchField::Mood),
            _ => None,
        }
    }

    /// Stringified view of the field used for substring matching. An
    /// unclassified song has an empty mood view.
    fn value_of(&self, song: &Song) -> String {
        match self {
            SearchField::Title => song.title.clone(),
            SearchField::Artist => song.artist.clone(),
            SearchField::Genre => song.genre.clone(),
            SearchField::Energy => song.energy.to_string(),
            SearchField::Tags => song.tags.join(" "),
            SearchField::Mood => song
                .mood
                .map(|mood| mood.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Filter songs by a case-insensitive substring match on one field,
/// preserving input order. An empty query matches every song; songs whose
/// field value is empty never match.
pub fn search_songs<'a>(songs: &'a [Song], query: &str, field: SearchField) -> Vec<&'a Song> {
    if query.is_empty() {
        return songs.iter().collect();
    }

    let query = query.trim().to_lowercase();
    songs
        .iter()
        .filter(|song| {
            let value = field.value_of(song).to_lowercase();
            !value.is_empty() && value.contains(&query)
        })
        .collect()
}

/// Bucket selection for [`lucky_pick`]. Any string that is not a
/// recognized mood name draws from every bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickMode {
    Hype,
    Chill,
    Mixed,
    #[default]
    Any,
}

impl PickMode {
    pub fn from_mode(mode: &str) -> PickMode {
        match mode {
            "hype" => PickMode::Hype,
            "chill" => PickMode::Chill,
            "mixed" => PickMode::Mixed,
            _ => PickMode::Any,
        }
    }
}

/// Uniform random selection capability injected into [`lucky_pick`] so
/// callers control the entropy source.
pub trait Chooser {
    /// Pick an index in `0..len`. Only called with `len > 0`.
    fn choose(&mut self, len: usize) -> usize;
}

/// [`Chooser`] backed by any `rand` generator.
pub struct RngChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<ThreadRng> {
    /// Chooser drawing from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Pick a uniformly random song from the bucket the mode names, or from
/// the concatenation of every bucket in map order for [`PickMode::Any`].
/// `None` when the selected sequence is empty.
pub fn lucky_pick<'a>(
    playlists: &'a PlaylistMap,
    mode: PickMode,
    chooser: &mut dyn Chooser,
) -> Option<&'a Song> {
    let songs: Vec<&Song> = match mode {
        PickMode::Hype => bucket(playlists, Mood::Hype),
        PickMode::Chill => bucket(playlists, Mood::Chill),
        PickMode::Mixed => bucket(playlists, Mood::Mixed),
        PickMode::Any => playlists.values().flatten().collect(),
    };

    if songs.is_empty() {
        return None;
    }
    Some(songs[chooser.choose(songs.len())])
}

fn bucket(playlists: &PlaylistMap, mood: Mood) -> Vec<&Song> {
    playlists
        .get(mood.as_str())
        .map(|songs| songs.iter().collect())
        .unwrap_or_default()
}

/// Mood counts across a listening history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoodSummary {
    #[serde(rename = "Hype")]
    pub hype: usize,
    #[serde(rename = "Chill")]
    pub chill: usize,
    #[serde(rename = "Mixed")]
    pub mixed: usize,
}

/// Tally the moods seen in a history. Entries whose `mood` field is
/// missing, non-string, or not a canonical label count as Mixed.
pub fn history_summary(history: &[Value]) -> MoodSummary {
    let mut summary = MoodSummary::default();
    for entry in history {
        let mood = entry
            .get("mood")
            .and_then(Value::as_str)
            .and_then(Mood::from_label)
            .unwrap_or(Mood::Mixed);
        match mood {
            Mood::Hype => summary.hype += 1,
            Mood::Chill => summary.chill += 1,
            Mood::Mixed => summary.mixed += 1,
        }
    }
    summary
}
