mod chart;
mod config;
mod consts;
mod draft;
mod engine;
mod error;
mod events;
mod logging;
mod managers;
mod modal;
mod notifications;
mod records;
mod session;
mod surface;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::DRAFT_STORAGE_KEY;
use crate::draft::{DraftStorage, FileDraftStorage, get_drafts_path};
use crate::error::ScriptError;
use crate::records::Period;
use crate::session::messages::SessionMessage;
use crate::session::script::{load_script, parse_script};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{ArgGroup, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive dashboard
    Start {
        /// JSON dataset to load instead of the built-in reference data
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,

        /// Paint the dashboard background
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Chart period shown at startup (week, month or year)
        #[arg(long, value_name = "PERIOD")]
        period: Option<Period>,
    },
    /// Replay dashboard commands without a terminal UI and print a transcript
    #[command(group(ArgGroup::new("commands").required(true).args(["script", "step"])))]
    Headless {
        /// JSON dataset to load instead of the built-in reference data
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,

        /// File with one dashboard command per line
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,

        /// A single dashboard command; may be repeated
        #[arg(long = "step", value_name = "COMMAND")]
        step: Vec<String>,
    },
    /// Remove the saved edit-listing draft
    ClearDraft,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path)?;

    let args = Args::parse();
    match args.command {
        Command::Start {
            seed,
            with_background,
            period,
        } => {
            let mut config = config;
            if let Some(period) = period {
                config.default_period = period;
            }
            let session = setup_session(seed.as_deref(), config)?;
            run_tui_mode(session, with_background).await
        }
        Command::Headless { seed, script, step } => {
            // Parse before setup so a bad script fails without side effects
            let commands = match script {
                Some(path) => load_script(&path),
                None => parse_script(step.iter().map(String::as_str)),
            }
            .inspect_err(|e: &ScriptError| {
                SessionMessage::warn(format!("Invalid headless script: {}", e)).print();
            })?;
            let session = setup_session(seed.as_deref(), config)?;
            run_headless_mode(session, commands).await
        }
        Command::ClearDraft => {
            let mut drafts = FileDraftStorage::new(get_drafts_path()?);
            drafts.clear(DRAFT_STORAGE_KEY)?;
            SessionMessage::success("Saved listing draft cleared").print();
            Ok(())
        }
    }
}
