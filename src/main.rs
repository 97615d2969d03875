use anyhow::Result;
use clap::Parser;

mod config;
mod models;
mod playlist;


use crate::config::load_config;
use crate::models::{RawSong, Song};
use crate::playlist::naming::PlaylistNaming;
use crate::playlist::query::{self, PickMode, RngChooser, SearchField};
use crate::playlist::stats::PlaylistAggregator;
use crate::playlist::{PlaylistBuilder, Profile};

#[derive(Parser)]
#[command(name = "moodlist")]
#[command(about = "Mood playlist builder for song libraries")]
#[command(version)]
struct Args {
    /// Path to the song library JSON file (an array of song objects)
    #[arg(short = 'l', long = "library")]
    library_file: Option<String>,

    /// Path to a profile JSON file; missing fields take defaults
    #[arg(short = 'p', long = "profile")]
    profile_file: Option<String>,

    /// Merge a second library file after the first
    #[arg(long = "merge")]
    merge_file: Option<String>,

    /// Search the classified songs for this query
    #[arg(short = 's', long = "search")]
    search: Option<String>,

    /// Field to search: title, artist, genre, energy, tags, or mood
    #[arg(long = "field", default_value = "artist")]
    field: String,

    /// Draw a random song: hype, chill, mixed, or any
    #[arg(long = "pick")]
    pick: Option<String>,

    /// Summarize the moods in a history JSON file
    #[arg(long = "history")]
    history_file: Option<String>,

    /// Quiet mode - skip per-song listings
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Read a library file as a list of raw song records
fn load_songs(path: &str) -> Result<Vec<RawSong>> {
    let content = std::fs::read_to_string(path)?;
    let songs: Vec<RawSong> = serde_json::from_str(&content)?;
    Ok(songs)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Environment defaults; explicit flags win
    let config = load_config()?;
    let library_file = args.library_file.unwrap_or(config.library_file);

    if !std::path::Path::new(&library_file).exists() {
        eprintln!("Error: song library '{library_file}' not found.");
        eprintln!("Provide one with --library or set MOODLIST_LIBRARY.");
        return Err(anyhow::anyhow!("Library file '{}' not found", library_file));
    }

    let profile = match args.profile_file.or(config.profile_file) {
        Some(path) => match Profile::load_from_file(&path) {
            Ok(profile) => {
                println!("Using profile '{}'", profile.name);
                profile
            }
            Err(e) => {
                eprintln!("Failed to load profile from '{path}': {e}");
                return Err(anyhow::anyhow!("Failed to load profile: {}", e));
            }
        },
        None => Profile::default(),
    };

    let raw_songs = load_songs(&library_file)?;
    println!("Loaded {} songs from {}", raw_songs.len(), library_file);

    let builder = PlaylistBuilder::new(profile);
    let mut playlists = builder.build(&raw_songs);

    if let Some(merge_path) = &args.merge_file {
        let more_songs = load_songs(merge_path)?;
        println!("Merging {} songs from {}", more_songs.len(), merge_path);
        let other = builder.build(&more_songs);
        playlists = PlaylistAggregator::merge(&playlists, &other);
    }

    println!("\n=== PLAYLISTS ===");
    for (label, songs) in &playlists {
        println!("\n{} ({} songs)", label, songs.len());
        println!(
            "Suggested name: {}",
            PlaylistNaming::display_name(label, songs)
        );

        if !args.quiet {
            for (i, song) in songs.iter().enumerate() {
                println!(
                    "  {}. \"{}\" by {} [{}] energy {}",
                    i + 1,
                    song.title,
                    song.artist,
                    song.genre,
                    song.energy
                );
            }
        }
    }

    let stats = PlaylistAggregator::compute_stats(&playlists);
    println!("\n=== LIBRARY STATS ===");
    println!("Total songs: {}", stats.total_songs);
    println!(
        "Hype: {} | Chill: {} | Mixed: {}",
        stats.hype_count, stats.chill_count, stats.mixed_count
    );
    println!(
        "Hype ratio: {:.2} | Avg energy: {:.1}",
        stats.hype_ratio, stats.avg_energy
    );
    if stats.top_artist_count > 0 {
        println!(
            "Top artist: {} ({} songs)",
            stats.top_artist, stats.top_artist_count
        );
    }

    if let Some(search_query) = &args.search {
        let Some(field) = SearchField::from_name(&args.field) else {
            eprintln!("Unknown search field '{}'.", args.field);
            eprintln!("Valid fields: title, artist, genre, energy, tags, mood.");
            return Err(anyhow::anyhow!("Unknown search field '{}'", args.field));
        };

        let all_songs: Vec<Song> = playlists.values().flatten().cloned().collect();
        let matches = query::search_songs(&all_songs, search_query, field);
        println!(
            "\n=== SEARCH: '{}' in {:?} ===",
            search_query, field
        );
        if matches.is_empty() {
            println!("No matches.");
        }
        for song in matches {
            println!(
                "  \"{}\" by {} [{}]",
                song.title,
                song.artist,
                song.mood.map(|m| m.as_str()).unwrap_or("-")
            );
        }
    }

    if let Some(mode) = &args.pick {
        let mode = PickMode::from_mode(mode);
        let mut chooser = RngChooser::from_entropy();
        println!("\n=== LUCKY PICK ({mode:?}) ===");
        match query::lucky_pick(&playlists, mode, &mut chooser) {
            Some(song) => println!("\"{}\" by {}", song.title, song.artist),
            None => println!("No songs available for that mode."),
        }
    }

    if let Some(history_path) = &args.history_file {
        let content = std::fs::read_to_string(history_path)?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;
        let summary = query::history_summary(&entries);
        println!("\n=== MOOD HISTORY ===");
        println!(
            "Hype: {} | Chill: {} | Mixed: {}",
            summary.hype, summary.chill, summary.mixed
        );
    }

    Ok(())
}
