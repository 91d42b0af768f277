use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::{info, warn};
use m3u_rs::{Format, Parser, format::Playlist};

/// Reads a playlist file. Tracks decoded before a parse error are reported
/// but not returned.
pub fn read_playlist(path: impl AsRef<Path>) -> Result<Playlist> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Open {}", path.display()))?;

    let mut parser = Parser::new(BufReader::new(file));
    let parsed = parser.parse();
    let playlist = parser.get_result();

    if let Err(e) = parsed {
        warn!(
            "{}: {} tracks decoded before the error",
            path.display(),
            playlist.len()
        );
        return Err(e).with_context(|| format!("Parse {}", path.display()));
    }

    info!("Read {} tracks from {}", playlist.len(), path.display());
    Ok(playlist)
}

pub fn list(playlist: &Playlist, show_duration: bool, mut out: impl Write) -> Result<()> {
    for (index, track) in playlist.iter().enumerate() {
        let name = if track.title.is_empty() {
            track.path.as_str()
        } else {
            track.title.as_str()
        };

        if show_duration {
            let duration = if track.has_known_duration() {
                format!("{}:{:02}", track.duration / 60, track.duration % 60)
            } else {
                "-".to_owned()
            };
            writeln!(out, "{}\t{}\t{}", index + 1, duration, name)?;
        } else {
            writeln!(out, "{}\t{}", index + 1, name)?;
        }
    }

    Ok(())
}

/// Re-encodes `playlist` into `output`, or stdout without one.
pub fn convert(playlist: &Playlist, format: Format, output: Option<&Path>) -> Result<u64> {
    let written = match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let written = playlist.write_as(format, &mut writer)?;
            writer.flush()?;
            info!("Wrote {} bytes to {}", written, path.display());
            written
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            let written = playlist.write_as(format, &mut stdout)?;
            stdout.flush()?;
            written
        }
    };

    Ok(written)
}
