use crate::error::Error;
use crate::normalize::normalize_file_name;
use crate::report::ChangeReporter;
use crate::scanner;
use ahash::AHashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Whether changes are only reported or performed on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Report,
    Apply,
}

/// Two files with the same key are considered duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    pub file_name: String,
    pub file_size: u64,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub total_files: usize,
    pub correct: usize,
    pub skipped: usize,
    pub failed: usize,
    /// (old name, new name), proposed or performed depending on the mode.
    pub renames: Vec<(String, String)>,
    /// Duplicates proposed for deletion or deleted, in listing order.
    pub duplicates: Vec<String>,
}

impl RunSummary {
    pub fn has_changes(&self) -> bool {
        !self.renames.is_empty() || !self.duplicates.is_empty()
    }
}

pub struct RenameEngine {
    folder: PathBuf,
    mode: Mode,
    ignore_patterns: Vec<String>,
}

/// Per-run state shared by every file of a single pass.
#[derive(Default)]
struct PassState {
    seen: AHashSet<DuplicateKey>,
    claimed_names: AHashSet<String>,
    summary: RunSummary,
}

impl RenameEngine {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            mode: Mode::Report,
            ignore_patterns: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Scan the folder and process every audio file in listing order:
    /// 1. Normalize the name (files that can't be normalized are skipped)
    /// 2. Delete/report the file if its (name, size) key was already seen
    /// 3. Otherwise report it as correct or rename it
    pub fn run(&self, reporter: &dyn ChangeReporter) -> Result<RunSummary, Error> {
        if !self.folder.is_dir() {
            return Err(Error::NotADirectory(self.folder.clone()));
        }

        let ignore_slices: Vec<&str> = self.ignore_patterns.iter().map(|s| s.as_str()).collect();
        let files = scanner::list_music_files(&self.folder, &ignore_slices)?;
        debug!("Found {} music files in {}", files.len(), self.folder.display());
        reporter.on_scan_complete(&self.folder, files.len());

        Ok(self.process_files(&files, reporter))
    }

    /// Processes already listed file names, strictly in the given order.
    /// Per-file failures are reported and do not stop the pass.
    pub fn process_files(&self, files: &[String], reporter: &dyn ChangeReporter) -> RunSummary {
        let mut state = PassState::default();
        state.summary.total_files = files.len();

        for file in files {
            if let Err(err) = self.process_file(file, &mut state, reporter) {
                error!("Error processing '{}': {}", file, err);
                state.summary.failed += 1;
                reporter.on_failure(file, &err);
            }
        }

        let summary = state.summary;
        info!(
            "{} files: {} correct, {} renames, {} duplicates, {} skipped, {} failed",
            summary.total_files,
            summary.correct,
            summary.renames.len(),
            summary.duplicates.len(),
            summary.skipped,
            summary.failed,
        );
        reporter.on_complete(&summary);
        summary
    }

    fn process_file(
        &self,
        file: &str,
        state: &mut PassState,
        reporter: &dyn ChangeReporter,
    ) -> Result<(), Error> {
        let apply = self.mode == Mode::Apply;

        let Some(new_name) = normalize_file_name(file) else {
            state.summary.skipped += 1;
            reporter.on_skipped(file);
            return Ok(());
        };

        let old_path = self.folder.join(file);
        let file_size = fs::metadata(&old_path)?.len();
        let key = DuplicateKey {
            file_name: new_name.clone(),
            file_size,
        };

        if state.seen.contains(&key) {
            return self.remove_duplicate(file, &old_path, state, reporter);
        }

        if new_name == file {
            state.seen.insert(key);
            state.claimed_names.insert(new_name);
            state.summary.correct += 1;
            reporter.on_correct(file);
            return Ok(());
        }

        let new_path = self.folder.join(&new_name);
        if state.claimed_names.contains(&new_name) {
            return Err(Error::TargetExists(new_path));
        }
        if target_is_taken(&self.folder, file, &new_name)? {
            // a correctly named copy of the same size is already on disk
            if fs::metadata(&new_path)?.len() == file_size {
                return self.remove_duplicate(file, &old_path, state, reporter);
            }
            return Err(Error::TargetExists(new_path));
        }

        if apply {
            fs::rename(&old_path, &new_path)?;
            debug!("Renamed {} -> {}", old_path.display(), new_path.display());
        }
        state.seen.insert(key);
        state.claimed_names.insert(new_name.clone());
        reporter.on_rename(file, &new_name, apply);
        state.summary.renames.push((file.to_string(), new_name));

        Ok(())
    }

    fn remove_duplicate(
        &self,
        file: &str,
        path: &Path,
        state: &mut PassState,
        reporter: &dyn ChangeReporter,
    ) -> Result<(), Error> {
        let apply = self.mode == Mode::Apply;
        if apply {
            fs::remove_file(path)?;
            debug!("Deleted duplicate {}", path.display());
        }
        state.summary.duplicates.push(file.to_string());
        reporter.on_duplicate(file, apply);
        Ok(())
    }
}

/// True when renaming `old` to `new` inside `folder` would replace another file.
///
/// A case-only rename on a case-insensitive filesystem finds the file itself
/// under the new name, so it only counts as taken when the folder holds an
/// entry spelled exactly like `new`.
fn target_is_taken(folder: &Path, old: &str, new: &str) -> io::Result<bool> {
    if !folder.join(new).try_exists()? {
        return Ok(false);
    }

    if old.to_lowercase() != new.to_lowercase() {
        return Ok(true);
    }

    for entry in fs::read_dir(folder)? {
        if entry?.file_name().as_os_str() == OsStr::new(new) {
            return Ok(true);
        }
    }
    Ok(false)
}
