use std::slice;

use crate::format::Track;

/// Tracks in playback order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl From<Vec<Track>> for Playlist {
    fn from(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl FromIterator<Track> for Playlist {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Playlist {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
