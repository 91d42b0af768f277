mod commands;
mod config;
pub use commands::*;
pub use config::*;
