use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead},
    mem::{swap, take},
    num::ParseFloatError,
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{Playlist, Track, directives};

#[derive(Debug)]
pub enum ParseError {
    /// An `#EXTINF:` line without the comma separating duration and title
    MalformedMetadataLine { line: usize, content: String },
    /// The duration of an `#EXTINF:` line is not a number
    InvalidDuration {
        line: usize,
        value: String,
        source: ParseFloatError,
    },
    /// An `#EXTINF:` line was the last line of the stream
    TruncatedEntry { line: usize },
    IoError(io::Error),
}

impl ParseError {
    /// 1-based line the error was detected on, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedMetadataLine { line, .. }
            | Self::InvalidDuration { line, .. }
            | Self::TruncatedEntry { line } => Some(*line),
            Self::IoError(_) => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::MalformedMetadataLine { line, content } => {
                write!(f, "Unexpected line {}: {:?}", line, content)
            }
            Self::InvalidDuration {
                line,
                value,
                source,
            } => write!(f, "Invalid duration {:?} on line {}: {}", value, line, source),
            Self::TruncatedEntry { line } => {
                write!(f, "Unexpected EOF, no path follows line {}", line)
            }
            Self::IoError(e) => e.fmt(f),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDuration { source, .. } => Some(source),
            Self::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

lazy_static! {
    /// `#EXTINF:<duration>,<title>`, split on the first comma
    static ref EXTINF_REGEX: Regex =
        Regex::new("^#EXTINF:([^,]*),(.*)$").expect("Regular expression error");
}

/// A single line of input, classified.
#[derive(Debug, PartialEq)]
pub enum Line<'a> {
    Blank,
    Path(&'a str),
    Metadata { duration: i64, title: &'a str },
    Comment,
}

/// Classifies one line (without its terminator). `line` is only used to
/// label errors.
pub fn classify(line: usize, content: &str) -> Result<Line<'_>, ParseError> {
    if content.is_empty() {
        return Ok(Line::Blank);
    }

    if !content.starts_with(directives::COMMENT) {
        return Ok(Line::Path(content));
    }

    if !content.starts_with(directives::EXTINF_PREFIX) {
        return Ok(Line::Comment);
    }

    let (_, [duration, title]) = EXTINF_REGEX
        .captures(content)
        .map(|x| x.extract())
        .ok_or_else(|| ParseError::MalformedMetadataLine {
            line,
            content: content.to_owned(),
        })?;

    let duration = duration
        .parse::<f64>()
        .map_err(|source| ParseError::InvalidDuration {
            line,
            value: duration.to_owned(),
            source,
        })?;

    // truncates toward zero
    Ok(Line::Metadata {
        duration: duration as i64,
        title,
    })
}

/// Where the parser is between two lines.
#[derive(Debug, PartialEq)]
pub enum State {
    AwaitLine,
    AwaitPathFor {
        title: SmolStr,
        duration: i64,
        line: usize,
    },
}

pub struct Parser<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
    line: usize,
    playlist: Playlist,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line: 0,
            playlist: Playlist::default(),
        }
    }

    /// Reads up to the end of the stream or the first error. Tracks decoded
    /// before an error stay available through [`Parser::get_result`].
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let mut state = State::AwaitLine;
        loop {
            let line = self.next_line()?;
            match self.step(state, line)? {
                Some(next) => state = next,
                None => return Ok(()),
            }
        }
    }

    /// Takes the tracks decoded so far.
    pub fn get_result(&mut self) -> Playlist {
        let mut result = Playlist::default();
        swap(&mut self.playlist, &mut result);
        result
    }

    /// Feeds one numbered line (`None` at end of stream) into the state
    /// machine. Returns the next state, or `None` once the stream is done.
    pub fn step(
        &mut self,
        state: State,
        line: Option<(usize, String)>,
    ) -> Result<Option<State>, ParseError> {
        let next = match (state, line) {
            (State::AwaitLine, None) => return Ok(None),
            (State::AwaitPathFor { line, .. }, None) => {
                return Err(ParseError::TruncatedEntry { line });
            }
            (State::AwaitLine, Some((line, content))) => match classify(line, &content)? {
                Line::Path(path) => {
                    self.playlist.push(Track::simple(path));
                    State::AwaitLine
                }
                Line::Metadata { duration, title } => State::AwaitPathFor {
                    title: title.into(),
                    duration,
                    line,
                },
                Line::Blank | Line::Comment => State::AwaitLine,
            },
            (State::AwaitPathFor { title, duration, .. }, Some((_, path))) => {
                self.playlist.push(Track::new(path, title, duration));
                State::AwaitLine
            }
        };

        Ok(Some(next))
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, io::Error> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        // only the terminator goes, a '\r' stays part of the line
        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
        }

        // non UTF-8 bytes (Latin-1 playlists) become U+FFFD
        let content = match String::from_utf8(take(&mut self.buffer)) {
            Ok(content) => content,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };

        Ok(Some((self.line, content)))
    }
}

/// Parses a simple or extended m3u stream into a fresh playlist.
pub fn parse(reader: impl BufRead) -> Result<Playlist, ParseError> {
    let mut parser = Parser::new(reader);
    parser.parse()?;
    Ok(parser.get_result())
}

impl FromStr for Playlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes())
    }
}
