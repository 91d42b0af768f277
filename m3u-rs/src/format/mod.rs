mod playlist;
mod track;
pub use playlist::*;
pub use track::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF_PREFIX: &str = "#EXTINF:";
    pub const COMMENT: char = '#';

    /// Duration written for tracks whose length is not known
    pub const UNKNOWN_DURATION: i64 = -1;
}
