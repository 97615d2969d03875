use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Per-user configuration for mood classification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String, // Display label, no effect on classification
    /// Songs at or above this energy are Hype.
    pub hype_min_energy: i64,
    /// Songs at or below this energy are Chill.
    pub chill_max_energy: i64,
    /// Compared verbatim against the normalized (lowercased) genre, so the
    /// value must be supplied in lowercase to ever match.
    pub favorite_genre: String,
    /// Recognized for forward compatibility; classification ignores it.
    pub include_mixed: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            hype_min_energy: 7,
            chill_max_energy: 3,
            favorite_genre: "rock".to_string(),
            include_mixed: true,
        }
    }
}

impl Profile {
    /// Load a profile from a JSON file. Missing fields take the defaults
    /// above, so a partial profile is valid.
    pub fn load_from_file(path: &str) -> Result<Profile> {
        let content = std::fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&content)?;
        Ok(profile)
    }
}
