use std::sync::mpsc;

use safescan_core::client::{Classifier, HttpClassifier};
use safescan_core::config::ClientConfig;
use safescan_core::controller::AnalysisRequest;
use safescan_core::error::{Result, ScanError};

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
///
/// The worker handles one command at a time, so at most one request is on
/// the wire even if commands queue up.
pub fn spawn_worker(
    config: ClientConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("safescan-worker".into())
        .spawn(move || {
            worker_loop(config, cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn build_classifier(config: &ClientConfig) -> Result<Box<dyn Classifier>> {
    Ok(Box::new(HttpClassifier::new(config)?))
}

fn worker_loop(
    config: ClientConfig,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut classifier = match build_classifier(&config) {
        Ok(c) => Some(c),
        Err(e) => {
            send_error(&tx, &ctx, format!("Failed to create HTTP client: {e}"));
            None
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Classify { request } => {
                handle_classify(classifier.as_deref(), request, &tx, &ctx);
            }
            WorkerCommand::Configure { config } => match build_classifier(&config) {
                Ok(c) => {
                    classifier = Some(c);
                    send_log(&tx, &ctx, format!("Endpoint: {}", config.endpoint));
                }
                Err(e) => send_error(&tx, &ctx, format!("Failed to apply config: {e}")),
            },
        }
    }
}

fn handle_classify(
    classifier: Option<&dyn Classifier>,
    request: AnalysisRequest,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let outcome = match classifier {
        Some(c) => c.classify(&request.image),
        None => Err(ScanError::NetworkFailure("HTTP client unavailable".into())),
    };
    send(
        tx,
        ctx,
        WorkerResult::AnalysisComplete {
            selection: request.selection(),
            outcome,
        },
    );
}
