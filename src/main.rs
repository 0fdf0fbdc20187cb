use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::Level;

use vibe::config::Settings;
use vibe::error::VibeError;
use vibe::pipeline::{AnalysisResult, PipelineConfig, VibePipeline};

#[derive(Parser)]
#[command(name = "vibe", about = "Upload a photo, get a song that matches your vibe")]
struct Cli {
    /// Photo to analyze
    photo: Option<PathBuf>,

    /// Settings file (default: vibe.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Skip the pause before analysis
    #[arg(long)]
    no_delay: bool,
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn read_photo(path: Option<PathBuf>) -> Result<Option<Vec<u8>>, VibeError> {
    match path {
        Some(path) => tokio::fs::read(&path)
            .await
            .map(Some)
            .map_err(|e| VibeError::ReadError(e, path)),
        None => Ok(None),
    }
}

async fn run(cli: Cli, settings: &Settings) -> Result<AnalysisResult, VibeError> {
    let mut config = PipelineConfig::from(settings);
    if cli.no_delay {
        config.analysis_delay = Duration::ZERO;
    }

    let mut pipeline = VibePipeline::new(config);
    tracing::debug!("Pipeline config: {:?}", pipeline.config());

    let photo = read_photo(cli.photo).await?;
    pipeline.analyze_photo(photo).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            let error = VibeError::from(e);
            eprintln!("{error}");
            eprintln!("{}", error.user_message());
            return ExitCode::FAILURE;
        }
    };
    // validate() has already checked the level.
    init_logging(settings.log_level().unwrap_or(Level::INFO));

    let json = cli.json;
    match run(cli, &settings).await {
        Ok(result) if json => match serde_json::to_string_pretty(&result) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to serialize result: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Analysis failed: {}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
