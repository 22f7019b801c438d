//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate
//! command handlers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::logging;

/// Batch speech-to-text transcription for audio and video files
#[derive(Parser)]
#[command(name = "batchscribe")]
#[command(version)]
#[command(about = "Batch speech-to-text transcription for audio and video files")]
#[command(
    long_about = "Transcribes audio and video files using the AssemblyAI API and saves\n\
        each transcript as a JSON file next to the source media.\n\n\
        EXAMPLES:\n    \
        # Transcribe one file\n    \
        $ batchscribe batch talk.mp3\n\n    \
        # Transcribe every media file in a directory tree, in German\n    \
        $ batchscribe batch ./recordings --recursive --language de\n\n    \
        # Print a saved transcript\n    \
        $ batchscribe read ./recordings/transcript.json"
)]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/batchscribe/batchscribe.toml\n    API key:            ASSEMBLYAI_API_KEY env var or .env file\n    Logs:               ~/.local/state/batchscribe/batchscribe.log.*"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe a media file or every media file in a directory
    ///
    /// Results are printed to stdout as a JSON object with per-file outcomes.
    /// Each successful transcript is saved as transcript.json next to its
    /// source file.
    #[command(visible_alias = "b")]
    Batch {
        /// Media file or directory to transcribe
        #[arg(value_name = "PATH")]
        input_path: PathBuf,

        /// Language code (en, es, fr, de, it, pt, nl, ja, ko, zh, ru)
        #[arg(short, long, value_name = "CODE")]
        language: Option<String>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,
    },

    /// Load and print a previously saved transcript JSON file
    Read {
        /// Path to a transcript.json file
        #[arg(value_name = "FILE")]
        transcript: PathBuf,
    },

    /// Show supported languages and media formats
    Info,
}

/// Parses arguments, initializes logging and routes to the command handlers.
pub async fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Info needs no logging setup and must not touch the filesystem.
    if let Commands::Info = cli.command {
        commands::handle_info();
        return Ok(());
    }

    logging::init_logging()?;

    match cli.command {
        Commands::Batch {
            input_path,
            language,
            recursive,
        } => {
            commands::handle_batch(input_path, language, recursive).await?;
        }
        Commands::Read { transcript } => {
            commands::handle_read(transcript)?;
        }
        Commands::Info => unreachable!("handled earlier"),
    }

    Ok(())
}
