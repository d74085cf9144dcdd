use crate::app::{QuizApp, QuizEvent};
use crate::model::Page;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

pub fn top_panel(app: &QuizApp, ctx: &Context, events: &mut Vec<QuizEvent>) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let pages = [
                (Page::Quiz, "🧩 名前当てクイズ"),
                (Page::StepTable, "📊 歩数結果一覧"),
            ];
            for (page, label) in pages {
                if ui.selectable_label(app.page == page, label).clicked() && app.page != page {
                    events.push(QuizEvent::SwitchPage(page));
                }
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 ダーク").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ ライト").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel central con scroll y anchura máxima
pub fn page_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let w = ui.available_width().min(max_width);
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = ((panel_width - 8.0) / 2.0).max(80.0);
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
