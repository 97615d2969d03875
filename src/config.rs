use anyhow::Result;

/// CLI defaults loaded from the environment
#[derive(Debug)]
pub struct Config {
    pub library_file: String,
    pub profile_file: Option<String>,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    let library_file =
        std::env::var("MOODLIST_LIBRARY").unwrap_or_else(|_| "songs.json".to_string());
    let profile_file = std::env::var("MOODLIST_PROFILE").ok();
    Ok(Config {
        library_file,
        profile_file,
    })
}
