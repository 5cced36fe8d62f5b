use crate::engine::RunSummary;
use crate::error::Error;
use colored::{Color, ColoredString, Colorize};
use std::path::Path;

/// Semantic category of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

impl Level {
    pub fn color(self) -> Color {
        match self {
            Level::Info => Color::White,
            Level::Success => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

pub fn paint(message: &str, level: Level) -> ColoredString {
    message.color(level.color())
}

/// Trait for observing a rename run.
///
/// The CLI prints colored lines, tests record events. All methods have
/// default no-op implementations. `applied` is true when the change was
/// performed on disk rather than only proposed.
pub trait ChangeReporter {
    fn on_scan_complete(&self, _folder: &Path, _total_files: usize) {}
    fn on_correct(&self, _file: &str) {}
    fn on_rename(&self, _old: &str, _new: &str, _applied: bool) {}
    fn on_duplicate(&self, _file: &str, _applied: bool) {}
    fn on_skipped(&self, _file: &str) {}
    fn on_failure(&self, _file: &str, _err: &Error) {}
    fn on_complete(&self, _summary: &RunSummary) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl ChangeReporter for SilentReporter {}
