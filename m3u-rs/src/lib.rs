//! # m3u-rs
//! A library for parsing and generating simple and extended m3u files
//!
//! # Example
//! ```rust
//! use m3u_rs::{Parser, format::Track};
//! use std::io::Cursor;
//!
//! // 1. Parse
//! let mut parser = Parser::new(Cursor::new(
//!     "#EXTM3U\n#EXTINF:233,Artist - Title\nsong.mp3\nAlternative\\other.mp3\n",
//! ));
//! parser.parse().unwrap();
//! let result = parser.get_result();
//! assert_eq!(result.tracks[0], Track::new("song.mp3", "Artist - Title", 233));
//! assert_eq!(result.tracks[1], Track::simple("Alternative\\other.mp3"));
//!
//! // 2. Generate
//! let mut simple = Vec::new();
//! result.write_simple(&mut simple).unwrap();
//! assert_eq!(simple, b"song.mp3\nAlternative\\other.mp3\n");
//! println!("{}", result.to_string());
//! ```

mod builder;
pub mod format;
mod parser;
pub use builder::*;
pub use parser::*;
