use std::sync::mpsc;

use safescan_core::config::ClientConfig;
use safescan_core::controller::{Completion, UploadAnalyzeController};
use safescan_core::error::ScanError;
use safescan_core::media::{decode_preview, media_type_for_path, PickedFile, SelectionId};
use safescan_core::response::AnalysisResult;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{BarReveal, Notice, PreviewState, UIState};
use crate::worker;

pub struct SafeScanApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub controller: UploadAnalyzeController,
    pub ui_state: UIState,
    pub preview: PreviewState,
    pub reveal: BarReveal,
    pub config: ClientConfig,
    pub show_about: bool,
}

impl SafeScanApp {
    pub fn new(ctx: &egui::Context, config: ClientConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(config.clone(), result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            controller: UploadAnalyzeController::new(),
            ui_state: UIState::default(),
            preview: PreviewState::default(),
            reveal: BarReveal::default(),
            config,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::AnalysisComplete { selection, outcome } => {
                    self.apply_completion(ctx, selection, outcome);
                }
                WorkerResult::FilePicked { file } => {
                    self.select_file(ctx, file);
                }
                WorkerResult::ConfigImported { config } => {
                    self.ui_state
                        .add_log(format!("Config imported (endpoint: {})", config.endpoint));
                    self.config = config.clone();
                    self.send_command(WorkerCommand::Configure { config });
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Forward a picked or dropped file to the controller.
    pub fn select_file(&mut self, ctx: &egui::Context, file: PickedFile) {
        let name = file.name.clone();
        match self.controller.select_file(file) {
            Ok(_) => {
                self.reveal.reset();
                self.load_preview(ctx);
                let size = self.controller.selected().map(|s| s.len()).unwrap_or(0);
                self.ui_state
                    .add_log(format!("Selected: {name} ({})", format_size(size)));
            }
            Err(e) => {
                self.ui_state.add_log(format!("Rejected {name}: {e}"));
                self.ui_state.notify(Notice::invalid_file());
            }
        }
    }

    fn load_preview(&mut self, ctx: &egui::Context) {
        self.preview.clear();
        let Some(image) = self.controller.selected() else {
            return;
        };
        match decode_preview(image.bytes()) {
            Ok(img) => self.preview.set(ctx, &img),
            Err(e) => {
                tracing::debug!(error = %e, "Preview unavailable");
                self.ui_state
                    .add_log(format!("Preview unavailable for {}", image.name()));
            }
        }
    }

    pub fn remove_image(&mut self) {
        if self.controller.remove_image() {
            self.preview.clear();
            self.reveal.reset();
            self.ui_state.add_log("Image removed".into());
        }
    }

    pub fn analyze(&mut self) {
        if let Some(request) = self.controller.analyze() {
            self.reveal.reset();
            self.ui_state
                .add_log(format!("Analyzing {}...", request.image.name()));
            self.send_command(WorkerCommand::Classify { request });
        }
    }

    fn apply_completion(
        &mut self,
        ctx: &egui::Context,
        selection: SelectionId,
        outcome: Result<AnalysisResult, ScanError>,
    ) {
        match self.controller.complete(selection, outcome) {
            Completion::Shown => {
                let delay = self.config.reveal_delay();
                self.reveal.schedule(delay);
                ctx.request_repaint_after(delay);
                if let Some(result) = self.controller.result() {
                    self.ui_state.add_log(format!(
                        "Verdict: {} ({:.1}%)",
                        result.category,
                        result.confidence * 100.0
                    ));
                }
            }
            Completion::Failed(err) => {
                self.ui_state.add_log(format!("ERROR: {err}"));
                self.ui_state.notify(Notice::analysis_failed());
            }
            Completion::Stale => {
                self.ui_state
                    .add_log("Discarded result for a replaced image".into());
            }
            Completion::Ignored => {}
        }
    }

    /// Pick up files dropped anywhere on the window.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.first().cloned(),
            )
        });
        self.ui_state.drag_hover = hovering;

        if let Some(dropped) = dropped {
            match picked_from_dropped(&dropped) {
                Ok(file) => self.select_file(ctx, file),
                Err(e) => self
                    .ui_state
                    .add_log(format!("ERROR: Failed to read dropped file: {e}")),
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

/// Build a [`PickedFile`] from a drop event. The declared MIME type wins;
/// otherwise the type is inferred from the file name.
fn picked_from_dropped(dropped: &egui::DroppedFile) -> Result<PickedFile, ScanError> {
    let mut file = match (&dropped.bytes, &dropped.path) {
        (Some(bytes), _) => PickedFile::new(
            dropped.name.clone(),
            media_type_for_path(std::path::Path::new(&dropped.name)),
            bytes.clone(),
        ),
        (None, Some(path)) => PickedFile::from_path(path)?,
        (None, None) => {
            return Err(ScanError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "drop event carried no data",
            )))
        }
    };
    if !dropped.mime.is_empty() {
        file.media_type = dropped.mime.clone();
    }
    if file.name.is_empty() {
        file.name = dropped.name.clone();
    }
    Ok(file)
}

impl eframe::App for SafeScanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::upload::show(ctx, self);
        panels::results::show(ctx, self);

        if let Some(notice) = &self.ui_state.notice {
            let mut dismissed = false;
            egui::Window::new(notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(&notice.message);
                        ui.add_space(8.0);
                        if ui.button("OK").clicked() {
                            dismissed = true;
                        }
                    });
                });
            if dismissed {
                self.ui_state.notice = None;
            }
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About SafeScan")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("SafeScan");
                        ui.label("Image content classification");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

pub(crate) fn format_size(bytes: usize) -> String {
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        format!("{kb:.1} KB")
    } else {
        format!("{:.1} MB", kb / 1024.0)
    }
}
