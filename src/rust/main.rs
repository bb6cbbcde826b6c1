use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use serde::Serialize;
use symptom_predictor::{ArtifactConfig, Predictor, PredictorError, RequestError};

const LIST_COMMAND: &str = "symptoms";

/// Predicts a disease from symptoms read as JSON on standard input.
///
/// Prints one JSON object to standard output and exits with status 1 on any
/// handled failure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pass `symptoms` to list the known symptoms; anything else predicts
    command: Option<String>,

    /// Directory holding naive_bayes.json and symptoms.json
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Path to the model artifact, overriding the models directory
    #[arg(long)]
    model: Option<PathBuf>,

    /// Path to the vocabulary artifact, overriding the models directory
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

impl Args {
    fn artifact_config(&self) -> ArtifactConfig {
        let mut config = match &self.models_dir {
            Some(dir) => ArtifactConfig::from_dir(dir),
            None => ArtifactConfig::default(),
        };
        if let Some(path) = &self.model {
            config = config.with_model_path(path);
        }
        if let Some(path) = &self.vocabulary {
            config = config.with_vocabulary_path(path);
        }
        config
    }
}

fn read_stdin() -> Result<Vec<u8>, PredictorError> {
    let mut raw = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut raw)
        .map_err(RequestError::from)?;
    Ok(raw)
}

/// Writes `value` as a single JSON line to standard output
fn emit<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let line = serde_json::to_string(value).context("Failed to serialize output")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line).context("Failed to write to standard output")?;
    stdout.flush().context("Failed to flush standard output")?;
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let config = args.artifact_config();
    info!("Model path: {:?}", config.model_path);
    info!("Vocabulary path: {:?}", config.vocabulary_path);
    let predictor = Predictor::new(config);

    let outcome = match args.command.as_deref() {
        Some(LIST_COMMAND) => predictor.list_symptoms().map(|response| emit(&response)),
        _ => read_stdin()
            .and_then(|raw| predictor.predict(&raw))
            .map(|response| emit(&response)),
    };

    match outcome {
        Ok(written) => {
            written?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            emit(&e.to_response())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    symptom_predictor::init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
