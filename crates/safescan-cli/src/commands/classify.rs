use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use safescan_core::client::{Classifier, HttpClassifier};
use safescan_core::config::ClientConfig;
use safescan_core::consts::{ANALYSIS_FAILED_MESSAGE, INVALID_FILE_MESSAGE};
use safescan_core::controller::{Completion, UploadAnalyzeController};
use safescan_core::display::ResultView;
use safescan_core::error::ScanError;
use safescan_core::media::PickedFile;
use tracing::debug;

use crate::summary::print_result;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Image file to classify
    pub file: PathBuf,

    /// Client config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Classification endpoint URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ClassifyArgs) -> Result<()> {
    let mut config = match args.config {
        Some(ref path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(ref endpoint) = args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if args.timeout.is_some() {
        config.timeout_secs = args.timeout;
    }

    debug!(endpoint = %config.endpoint, timeout = ?config.timeout_secs, "Client configured");
    let classifier = HttpClassifier::new(&config)?;
    let mut controller = UploadAnalyzeController::new();

    let file = PickedFile::from_path(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    match controller.select_file(file) {
        Ok(_) => {}
        Err(err @ ScanError::InvalidFileType { .. }) => {
            bail!("{INVALID_FILE_MESSAGE} {err}")
        }
        Err(err) => return Err(err.into()),
    }

    let Some(request) = controller.analyze() else {
        bail!("Nothing to analyze");
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Analyzing {}", request.image.name()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = classifier.classify(&request.image);
    pb.finish_and_clear();

    match controller.complete(request.selection(), outcome) {
        Completion::Shown => {}
        Completion::Failed(err) => {
            return Err(anyhow::Error::new(err).context(ANALYSIS_FAILED_MESSAGE));
        }
        Completion::Stale | Completion::Ignored => {
            bail!("Response did not match the current selection")
        }
    }

    let result = controller
        .result()
        .context("Analysis finished without a result")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let name = controller
            .selected()
            .map(|image| image.name().to_string())
            .unwrap_or_default();
        print_result(&name, &ResultView::new(result));
    }

    Ok(())
}
