use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use m3u_tool::{OutputFormat, convert, list, load_config_or_default, read_playlist};

#[derive(Parser)]
#[command(version, about = "Inspect and convert m3u playlists")]
struct Cli {
    /// YAML config file
    #[arg(long, env = "M3U_TOOL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tracks of a playlist
    List {
        file: PathBuf,
        /// Show durations next to titles
        #[arg(short, long)]
        duration: bool,
    },
    /// Re-encode a playlist as extended or simple m3u
    Convert {
        input: PathBuf,
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn app_entry(cli: Cli) -> Result<()> {
    let config = load_config_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::List { file, duration } => {
            let playlist = read_playlist(&file)?;
            let show_duration = duration || config.show_duration.unwrap_or(false);
            list(&playlist, show_duration, std::io::stdout().lock())?;
        }
        Command::Convert {
            input,
            output,
            format,
        } => {
            let playlist = read_playlist(&input)?;
            let format = format
                .or(config.default_format)
                .unwrap_or(OutputFormat::Extended);
            convert(&playlist, format.into(), output.as_deref())?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = app_entry(Cli::parse()) {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}
