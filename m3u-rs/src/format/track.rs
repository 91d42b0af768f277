use smol_str::SmolStr;

use crate::format::directives;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    /// Local path or URI, kept exactly as read
    pub path: SmolStr,
    /// Display title, empty when unknown
    pub title: SmolStr,
    /// Length in seconds, `-1` when unknown
    pub duration: i64,
}

impl Track {
    pub fn new(path: impl Into<SmolStr>, title: impl Into<SmolStr>, duration: i64) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            duration,
        }
    }

    /// A track as the simple format describes it: a path and nothing else.
    pub fn simple(path: impl Into<SmolStr>) -> Self {
        Self::new(path, SmolStr::default(), directives::UNKNOWN_DURATION)
    }

    pub fn has_known_duration(&self) -> bool {
        self.duration >= 1
    }

    /// Duration as it appears in an `#EXTINF` line. Anything below one
    /// second collapses to the unknown sentinel.
    pub fn written_duration(&self) -> i64 {
        if self.has_known_duration() {
            self.duration
        } else {
            directives::UNKNOWN_DURATION
        }
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::simple("")
    }
}
