use safescan_core::controller::Phase;

use crate::app::{format_size, SafeScanApp};
use crate::panels::menu_bar::open_file;

const LEFT_PANEL_WIDTH: f32 = 340.0;
const DROP_ZONE_HEIGHT: f32 = 300.0;
const BUTTON_HEIGHT: f32 = 28.0;

pub fn show(ctx: &egui::Context, app: &mut SafeScanApp) {
    egui::SidePanel::left("upload")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);
            super::section_header(ui, "Image", None);
            ui.add_space(4.0);

            drop_zone(ctx, ui, app);

            ui.add_space(8.0);
            actions(ui, app);
        });
}

fn drop_zone(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut SafeScanApp) {
    let stroke_color = if app.ui_state.drag_hover {
        ui.visuals().selection.stroke.color
    } else {
        egui::Color32::from_gray(80)
    };

    egui::Frame::NONE
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .corner_radius(8.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT));

            let Some(image) = app.controller.selected() else {
                empty_drop_zone(ctx, ui, app);
                return;
            };
            let name = image.name().to_string();
            let details = format!("{}, {}", image.media_type(), format_size(image.len()));

            ui.vertical_centered(|ui| {
                if let Some(texture) = &app.preview.texture {
                    let max = egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT - 40.0);
                    let response = ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                            .max_size(max),
                    );
                    if app.controller.phase() == Phase::Analyzing {
                        paint_scan_line(ui, response.rect);
                    }
                } else {
                    ui.add_space(DROP_ZONE_HEIGHT / 3.0);
                    ui.label(egui::RichText::new("No preview").color(egui::Color32::from_gray(120)));
                }
                ui.add_space(4.0);
                ui.label(name);
                ui.small(details);
            });
        });
}

fn empty_drop_zone(ctx: &egui::Context, ui: &mut egui::Ui, app: &SafeScanApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(DROP_ZONE_HEIGHT / 3.0);
        ui.label(
            egui::RichText::new("Drop an image here")
                .size(18.0)
                .color(egui::Color32::from_gray(140)),
        );
        ui.add_space(4.0);
        ui.small("or");
        ui.add_space(4.0);
        if ui.button("Browse...").clicked() {
            open_file(ctx, app);
        }
    });
}

/// Sweep a highlight line over the preview while a request is in flight.
fn paint_scan_line(ui: &egui::Ui, rect: egui::Rect) {
    let t = ui.input(|i| i.time);
    let phase = (t * 0.8).fract() as f32;
    let y = rect.top() + rect.height() * phase;
    ui.painter().line_segment(
        [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
        egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(56, 189, 248, 200)),
    );
    ui.ctx().request_repaint();
}

fn actions(ui: &mut egui::Ui, app: &mut SafeScanApp) {
    let width = ui.available_width();

    let label = if app.controller.phase() == Phase::Analyzing {
        "Analyzing..."
    } else {
        "Analyze"
    };
    if ui
        .add_enabled(
            app.controller.can_analyze(),
            egui::Button::new(label).min_size(egui::vec2(width, BUTTON_HEIGHT)),
        )
        .clicked()
    {
        app.analyze();
    }

    if ui
        .add_enabled(
            app.controller.can_remove(),
            egui::Button::new("Remove").min_size(egui::vec2(width, BUTTON_HEIGHT)),
        )
        .clicked()
    {
        app.remove_image();
    }
}
