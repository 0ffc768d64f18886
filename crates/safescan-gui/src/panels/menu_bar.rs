use safescan_core::config::ClientConfig;
use safescan_core::media::PickedFile;

use crate::app::SafeScanApp;
use crate::messages::WorkerResult;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

pub fn show(ctx: &egui::Context, app: &mut SafeScanApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the browse dialog off the UI thread and post the chosen file back.
pub(crate) fn open_file(ctx: &egui::Context, app: &SafeScanApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let result = match PickedFile::from_path(&path) {
                Ok(file) => WorkerResult::FilePicked { file },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to read {}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}

fn import_config(ctx: &egui::Context, app: &SafeScanApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            let result = match ClientConfig::load(&path) {
                Ok(config) => WorkerResult::ConfigImported { config },
                Err(e) => WorkerResult::Error {
                    message: format!("Failed to import config: {e}"),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}
