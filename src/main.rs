//! Application entry point.
//!
//! # Startup sequence (`serve`)
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default when missing).
//! 3. Load the lesson catalog.
//! 4. Build the STT provider from config and wrap it in a [`SpeechEvaluator`].
//! 5. Serve the HTTP API until Ctrl-C.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use speech_tutor::{
    config::AppConfig,
    lessons::LessonCatalog,
    pipeline::SpeechEvaluator,
    scoring::score_transcript,
    server::{self, AppState},
    stt,
};

#[derive(Debug, Parser)]
#[command(name = "speech-tutor", version, about = "Score spoken English practice")]
struct Cli {
    /// Path to settings.toml (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve {
        /// Lesson catalog JSON, overriding `[lessons] catalog_file`.
        #[arg(long)]
        lessons: Option<PathBuf>,
        /// Port, overriding `[server] port`.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Transcribe and score one recording.
    Evaluate {
        /// Recorded attempt (WAV, as configured under `[stt]`).
        #[arg(long)]
        audio: PathBuf,
        /// The sentence the learner was asked to say.
        #[arg(long)]
        expected: String,
    },
    /// Score a transcript directly, without speech-to-text.
    Score {
        #[arg(long)]
        recognized: String,
        #[arg(long)]
        expected: String,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load_from(p)
            .with_context(|| format!("failed to load config from {}", p.display())),
        None => AppConfig::load().context("failed to load config"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Serve { lessons, port } => {
            if let Some(path) = lessons {
                config.lessons.catalog_file = Some(path);
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let catalog_path = config.lessons.catalog_path();
            let catalog = LessonCatalog::load_from(&catalog_path)
                .with_context(|| format!("failed to load lessons from {}", catalog_path.display()))?;
            let evaluator = SpeechEvaluator::new(stt::from_config(&config.stt));

            server::serve(&config.server, AppState::new(catalog, evaluator)).await?;
        }

        Command::Evaluate { audio, expected } => {
            let evaluator = SpeechEvaluator::new(stt::from_config(&config.stt));
            let result = evaluator.evaluate_file(&audio, &expected).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Command::Score {
            recognized,
            expected,
        } => {
            let result = score_transcript(&recognized, &expected);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
