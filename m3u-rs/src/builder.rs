use std::{
    error::Error,
    fmt::Display,
    io::{self, Write},
};

use crate::format::{Playlist, Track, directives};

/// On-disk representation to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Extended,
    Simple,
}

/// A failed write, with the number of bytes that made it to the sink
/// before the failing line.
#[derive(Debug)]
pub struct WriteError {
    pub written: u64,
    pub source: io::Error,
}

impl Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Write failed after {} bytes: {}", self.written, self.source)
    }
}

impl Error for WriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Issues each line as one `write_all` and counts what got through.
struct LineSink<W: Write> {
    sink: W,
    buffer: String,
    written: u64,
}

impl<W: Write> LineSink<W> {
    fn new(sink: W) -> Self {
        Self {
            sink,
            buffer: String::new(),
            written: 0,
        }
    }

    fn line(&mut self, parts: &[&str]) -> Result<(), WriteError> {
        self.buffer.clear();
        for part in parts {
            self.buffer.push_str(part);
        }
        self.buffer.push('\n');

        match self.sink.write_all(self.buffer.as_bytes()) {
            Ok(()) => {
                self.written += self.buffer.len() as u64;
                Ok(())
            }
            Err(source) => Err(WriteError {
                written: self.written,
                source,
            }),
        }
    }
}

impl Playlist {
    /// Writes `#EXTM3U` followed by an `#EXTINF` line and a path line per
    /// track. Returns the number of bytes written.
    pub fn write_extended(&self, sink: impl Write) -> Result<u64, WriteError> {
        let mut sink = LineSink::new(sink);
        sink.line(&[directives::EXTM3U])?;

        for it in self.tracks.iter() {
            let duration = it.written_duration().to_string();
            sink.line(&[
                directives::EXTINF_PREFIX,
                duration.as_str(),
                ",",
                it.title.as_str(),
            ])?;
            sink.line(&[it.path.as_str()])?;
        }

        Ok(sink.written)
    }

    /// Writes one path per line, nothing else.
    pub fn write_simple(&self, sink: impl Write) -> Result<u64, WriteError> {
        let mut sink = LineSink::new(sink);
        for it in self.tracks.iter() {
            sink.line(&[it.path.as_str()])?;
        }

        Ok(sink.written)
    }

    pub fn write_as(&self, format: Format, sink: impl Write) -> Result<u64, WriteError> {
        match format {
            Format::Extended => self.write_extended(sink),
            Format::Simple => self.write_simple(sink),
        }
    }
}

impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", directives::EXTM3U)?;
        for it in self.tracks.iter() {
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // #EXTINF:duration,title
        writeln!(
            f,
            "{}{},{}",
            directives::EXTINF_PREFIX,
            self.written_duration(),
            self.title
        )?;
        writeln!(f, "{}", self.path)
    }
}
