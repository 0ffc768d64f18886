use std::time::Instant;

use safescan_core::controller::UiState;
use safescan_core::display::{ResultView, ScoreBar};

use crate::app::SafeScanApp;
use crate::convert::to_color32;
use crate::states::BarReveal;

const BAR_HEIGHT: f32 = 10.0;
/// Seconds the bar width animation takes once revealed.
const BAR_ANIMATION_TIME: f32 = 0.6;

pub fn show(ctx: &egui::Context, app: &mut SafeScanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        super::section_header(ui, "Analysis", None);
        ui.add_space(8.0);

        match app.controller.ui_state() {
            UiState::Empty => show_empty(ui),
            UiState::Loading => show_loading(ui),
            UiState::Result => {
                if let Some(result) = app.controller.result() {
                    let view = ResultView::new(result);
                    show_result(ctx, ui, &view, &app.reveal);
                }
            }
        }
    });
}

fn show_empty(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Upload an image and press Analyze")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn show_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(8.0);
        ui.label("Analyzing image...");
    });
}

fn show_result(ctx: &egui::Context, ui: &mut egui::Ui, view: &ResultView, reveal: &BarReveal) {
    verdict_card(ui, view);
    ui.add_space(16.0);

    let now = Instant::now();
    let revealed = reveal.is_revealed(now);
    if let Some(remaining) = reveal.remaining(now) {
        ctx.request_repaint_after(remaining);
    }

    for bar in &view.bars {
        score_bar(ctx, ui, bar, revealed);
        ui.add_space(8.0);
    }
}

fn verdict_card(ui: &mut egui::Ui, view: &ResultView) {
    let border = to_color32(view.style.border);
    let (start, end) = view.style.gradient;

    egui::Frame::NONE
        .stroke(egui::Stroke::new(2.0, border))
        .corner_radius(8.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.small("Verdict");
            ui.label(
                egui::RichText::new(&view.verdict)
                    .size(28.0)
                    .strong()
                    .color(to_color32(start)),
            );
            // Thin strip standing in for the text gradient.
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 3.0), egui::Sense::hover());
            let mid = egui::pos2(rect.center().x, rect.bottom());
            ui.painter().rect_filled(
                egui::Rect::from_min_max(rect.min, mid),
                0.0,
                to_color32(start),
            );
            ui.painter().rect_filled(
                egui::Rect::from_min_max(egui::pos2(mid.x, rect.top()), rect.max),
                0.0,
                to_color32(end),
            );
            ui.add_space(4.0);
            ui.label(&view.confidence_text);
        });
}

fn score_bar(ctx: &egui::Context, ui: &mut egui::Ui, bar: &ScoreBar, revealed: bool) {
    ui.horizontal(|ui| {
        ui.label(bar.label.short_name());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.strong(&bar.text);
        });
    });

    let target = if revealed { bar.width_fraction() } else { 0.0 };
    let fraction = ctx.animate_value_with_time(
        egui::Id::new(("score_bar", bar.label.as_str())),
        target,
        BAR_ANIMATION_TIME,
    );

    let (track, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), BAR_HEIGHT), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(track, BAR_HEIGHT / 2.0, egui::Color32::from_gray(50));
    if fraction > 0.0 {
        let fill = egui::Rect::from_min_size(
            track.min,
            egui::vec2(track.width() * fraction, track.height()),
        );
        painter.rect_filled(fill, BAR_HEIGHT / 2.0, to_color32(bar.color));
    }
}
