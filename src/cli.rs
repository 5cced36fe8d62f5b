use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tidy-tunes", version)]
#[command(about = "Rename music files to 'Artist - Title (Mix).ext' and drop duplicates", long_about = None)]
pub struct Cli {
    /// Folder holding the mp3/wav/flac files
    #[arg(default_value = "./music")]
    pub folder: PathBuf,

    /// Perform the renames and deletions instead of only listing them
    #[arg(long)]
    pub change: bool,

    /// Glob pattern of file names to leave alone (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore_patterns: Vec<String>,
}
