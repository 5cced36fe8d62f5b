use crate::error::Error;
use glob::Pattern;
use std::io;
use std::path::Path;
use tracing::{error, warn};
use walkdir::WalkDir;

/// Extensions (without the dot) the scanner picks up, compared case-insensitively.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac"];

pub fn is_audio_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|audio| ext.eq_ignore_ascii_case(audio))
        })
}

/// Lists the audio files directly inside `folder`, sorted by file name.
///
/// Only names are returned, not paths. Symlinks to files are listed,
/// subdirectories are not visited and names matching any of the
/// `ignore_globs` are left out.
pub fn list_music_files(folder: &Path, ignore_globs: &[&str]) -> Result<Vec<String>, Error> {
    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // broken links and unreadable entries are skipped, the folder itself must be readable
            Err(err) if err.depth() > 0 => {
                warn!("Skipping entry in {}: {}", folder.display(), err);
                continue;
            }
            Err(err) => {
                if err.io_error().map(|e| e.kind()) == Some(io::ErrorKind::PermissionDenied) {
                    error!("Access denied reading {}: {}", folder.display(), err);
                }
                return Err(err.into());
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };

        if !is_audio_file(file_name) {
            continue;
        }

        if ignore_patterns.iter().any(|pattern| pattern.matches(file_name)) {
            continue;
        }

        files.push(file_name.to_string());
    }

    Ok(files)
}
