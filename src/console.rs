use tidy_tunes::report::{paint, ChangeReporter, Level};
use tidy_tunes::{Error, Mode, RunSummary};

/// Prints one colored line per decision on stdout.
pub struct ConsoleReporter {
    mode: Mode,
}

impl ConsoleReporter {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }
}

pub fn print_status(message: &str, level: Level) {
    println!("{}", paint(message, level));
}

fn correct_line(file: &str) -> (String, Level) {
    (format!("CORRECT:     {}", file), Level::Success)
}

fn rename_line(old: &str, new: &str, applied: bool) -> (String, Level) {
    let line = if applied {
        format!("Renamed: {} -> {}", old, new)
    } else {
        format!("RENAME :     {} -> {}", old, new)
    };
    (line, Level::Warn)
}

fn duplicate_line(file: &str, applied: bool) -> (String, Level) {
    let line = if applied {
        format!("Deleted duplicate: {}", file)
    } else {
        format!("Proposed duplicate for deletion: {}", file)
    };
    (line, Level::Error)
}

fn skipped_line(file: &str) -> (String, Level) {
    (format!("SKIPPED:     {}", file), Level::Info)
}

fn failure_line(file: &str, err: &Error) -> (String, Level) {
    (format!("FAILED:      {} ({})", file, err), Level::Error)
}

fn completion_line(mode: Mode, summary: &RunSummary) -> Option<(String, Level)> {
    (mode == Mode::Report && !summary.has_changes())
        .then(|| ("No proposed changes.".to_string(), Level::Info))
}

fn print_line((message, level): (String, Level)) {
    print_status(&message, level);
}

impl ChangeReporter for ConsoleReporter {
    fn on_correct(&self, file: &str) {
        print_line(correct_line(file));
    }

    fn on_rename(&self, old: &str, new: &str, applied: bool) {
        print_line(rename_line(old, new, applied));
    }

    fn on_duplicate(&self, file: &str, applied: bool) {
        print_line(duplicate_line(file, applied));
    }

    fn on_skipped(&self, file: &str) {
        print_line(skipped_line(file));
    }

    fn on_failure(&self, file: &str, err: &Error) {
        print_line(failure_line(file, err));
    }

    fn on_complete(&self, summary: &RunSummary) {
        if let Some(line) = completion_line(self.mode, summary) {
            print_line(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_correct_line() {
        assert_eq!(
            correct_line("A - B.mp3"),
            ("CORRECT:     A - B.mp3".to_string(), Level::Success)
        );
    }

    #[test]
    fn test_rename_lines() {
        assert_eq!(
            rename_line("a - b.mp3", "A - B.mp3", false),
            ("RENAME :     a - b.mp3 -> A - B.mp3".to_string(), Level::Warn)
        );
        assert_eq!(
            rename_line("a - b.mp3", "A - B.mp3", true),
            ("Renamed: a - b.mp3 -> A - B.mp3".to_string(), Level::Warn)
        );
    }

    #[test]
    fn test_duplicate_lines() {
        assert_eq!(
            duplicate_line("a_-_b.mp3", false),
            ("Proposed duplicate for deletion: a_-_b.mp3".to_string(), Level::Error)
        );
        assert_eq!(
            duplicate_line("a_-_b.mp3", true),
            ("Deleted duplicate: a_-_b.mp3".to_string(), Level::Error)
        );
    }

    #[test]
    fn test_skipped_and_failure_lines() {
        assert_eq!(
            skipped_line("intro.wav"),
            ("SKIPPED:     intro.wav".to_string(), Level::Info)
        );

        let err = Error::TargetExists(PathBuf::from("A - B.mp3"));
        let (line, level) = failure_line("a_-_b.mp3", &err);
        assert!(line.starts_with("FAILED:      a_-_b.mp3 ("));
        assert!(line.contains("A - B.mp3"));
        assert_eq!(level, Level::Error);
    }

    #[test]
    fn test_no_changes_only_in_report_mode() {
        let empty = RunSummary::default();
        assert_eq!(
            completion_line(Mode::Report, &empty),
            Some(("No proposed changes.".to_string(), Level::Info))
        );
        assert_eq!(completion_line(Mode::Apply, &empty), None);

        let mut renamed = RunSummary::default();
        renamed
            .renames
            .push(("a - b.mp3".to_string(), "A - B.mp3".to_string()));
        assert_eq!(completion_line(Mode::Report, &renamed), None);

        let mut duplicated = RunSummary::default();
        duplicated.duplicates.push("a_-_b.mp3".to_string());
        assert_eq!(completion_line(Mode::Report, &duplicated), None);
    }
}
