//! Filename normalization rules.
//!
//! Raw file names are matched against two named rules, tried in order:
//!
//! - `FULL_INFO`: optional leading index, `artist - title`, optional
//!   parenthesized mix tag and an audio extension.
//! - `TITLE_OR_ARTIST_ONLY`: anything else that still looks like an audio
//!   file. It carries no usable artist/title split and never yields a new name.
//!
//! A successful `FULL_INFO` match produces `Artist - Title (Mix).ext`.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

/// Characters that are stripped from every generated file name.
pub const DISALLOWED_CHARS: &[char] = &['/', ':', '*', '?', '"', '<', '>', '|'];

lazy_static! {
    // 01. Artist - Title (Mix).mp3
    static ref FULL_INFO: Regex = Regex::new(
        r"(?i)^(?P<index>[0-9]+\.?\s?-?\s?)?(?P<artist>.*)-(?P<title>.*?)(?P<mix> \(.*?\))?(?P<ext>\.mp3|\.wav|\.flac)$"
    ).unwrap();

    // 01 Title.mp3, Artist.flac
    static ref TITLE_OR_ARTIST_ONLY: Regex = Regex::new(
        r"(?i)^(?P<index>[0-9]+\.?\s?)?\w*-?\w*(?P<rest>.*?)(?P<mix> \(.*?\))?(?P<ext>\.mp3|\.wav|\.flac)$"
    ).unwrap();

    static ref SPACE_RUNS: Regex = Regex::new(r" +").unwrap();
}

/// The pieces captured by the full-info rule, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackName {
    /// Leading track number/prefix such as `01. `. Never part of the output.
    pub index: Option<String>,
    pub artist: String,
    pub title: String,
    /// Mix tag including its leading space, e.g. ` (Extended Mix)`.
    pub mix: Option<String>,
    /// Lowercased extension including the dot.
    pub extension: String,
}

impl TrackName {
    fn from_captures(caps: &Captures) -> Self {
        TrackName {
            index: caps.name("index").map(|m| m.as_str().to_string()),
            artist: capitalize_words(capture(caps, "artist").trim()),
            title: capitalize_words(capture(caps, "title").trim()),
            mix: caps.name("mix").map(|m| m.as_str().to_string()),
            extension: capture(caps, "ext").to_lowercase(),
        }
    }

    /// Joins the pieces into a sanitized file name.
    ///
    /// Returns `None` when nothing but the extension would be left.
    pub fn file_name(&self) -> Option<String> {
        let mix = self.mix.as_deref().unwrap_or_default();
        let joined = match (self.artist.is_empty(), self.title.is_empty()) {
            (false, false) => format!("{} - {}{}{}", self.artist, self.title, mix, self.extension),
            (false, true) => format!("{}{}{}", self.artist, mix, self.extension),
            _ => format!("{}{}{}", self.title, mix, self.extension),
        };

        let name = sanitize_file_name(&joined);
        match name.strip_suffix(self.extension.as_str()) {
            Some(stem) if !stem.trim().is_empty() => Some(name),
            _ => None,
        }
    }
}

fn capture<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Which rule a raw file name matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedName {
    Full(TrackName),
    TitleOrArtistOnly,
    Unrecognized,
}

pub fn parse_file_name(raw: &str) -> ParsedName {
    let file_name = raw.replace('_', " ");

    if let Some(caps) = FULL_INFO.captures(&file_name) {
        return ParsedName::Full(TrackName::from_captures(&caps));
    }

    if TITLE_OR_ARTIST_ONLY.is_match(&file_name) {
        return ParsedName::TitleOrArtistOnly;
    }

    ParsedName::Unrecognized
}

/// Derives the canonical `Artist - Title (Mix).ext` name for a raw file name.
///
/// `None` means the name could not be normalized and should be left alone.
pub fn normalize_file_name(raw: &str) -> Option<String> {
    match parse_file_name(raw) {
        ParsedName::Full(track) => track.file_name(),
        ParsedName::TitleOrArtistOnly => {
            debug!("No artist/title separator in '{}', leaving unchanged", raw);
            None
        }
        ParsedName::Unrecognized => {
            debug!("'{}' matched no naming rule", raw);
            None
        }
    }
}

/// Strips disallowed characters, collapses runs of spaces and trims.
pub fn sanitize_file_name(name: &str) -> String {
    let stripped: String = name
        .chars()
        .filter(|c| !DISALLOWED_CHARS.contains(c))
        .collect();
    SPACE_RUNS.replace_all(&stripped, " ").trim().to_string()
}

/// Uppercases the first letter of every word. Other letters are kept as is.
///
/// An apostrophe continues a word, so `don't` becomes `Don't`.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for c in text.chars() {
        let continues_word =
            prev.is_some_and(|p| p.is_alphanumeric() || p == '\'' || p == '\u{2019}');
        if c.is_alphanumeric() && !continues_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}
