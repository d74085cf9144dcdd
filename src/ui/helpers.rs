// src/ui/helpers.rs
use crate::leaderboard::{SortColumn, SortOrder};
use crate::model::SlotKey;
use crate::view_models::FeedbackRow;
use egui::{Color32, ComboBox, Grid, Label, RichText, Ui};

pub const PLACEHOLDER: &str = "選択してください";

/// Desplegable de un hueco. Devuelve `Some(nueva selección)` sólo si cambió.
/// El placeholder se muestra pero no se puede elegir.
pub fn slot_selector(
    ui: &mut Ui,
    key: SlotKey,
    current: Option<&String>,
    choices: &[String],
) -> Option<Option<String>> {
    let before = current.cloned();
    let mut selected = before.clone();
    ComboBox::from_id_salt(("slot", key.team, key.slot))
        .selected_text(selected.as_deref().unwrap_or(PLACEHOLDER))
        .width(170.0)
        .show_ui(ui, |ui| {
            ui.add_enabled(false, Label::new(PLACEHOLDER));
            for choice in choices {
                ui.selectable_value(&mut selected, Some(choice.clone()), choice.as_str());
            }
        });
    (selected != before).then_some(selected)
}

/// Cabecera clicable de la tabla de resultados
pub fn sort_header(ui: &mut Ui, label: &str, column: SortColumn, order: SortOrder) -> bool {
    let text = if order.column == column {
        let arrow = if order.descending { "▼" } else { "▲" };
        format!("{label} {arrow}")
    } else {
        label.to_string()
    };
    ui.button(RichText::new(text).strong()).clicked()
}

pub fn warning_label(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.add_space(8.0);
        ui.label(RichText::new(message).color(Color32::YELLOW).strong());
    }
}

/// Tabla de aciertos por hueco (ronda actual o historial)
pub fn feedback_grid(ui: &mut Ui, id: &str, rows: &[FeedbackRow], with_question: bool) {
    Grid::new(id)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            if with_question {
                ui.label(RichText::new("問題").strong());
            }
            ui.label(RichText::new("チーム").strong());
            ui.label(RichText::new("欄").strong());
            ui.label(RichText::new("あなたの回答").strong());
            ui.label(RichText::new("正解").strong());
            ui.label(RichText::new("判定").strong());
            ui.end_row();

            for r in rows {
                if with_question {
                    ui.label(r.question.to_string());
                }
                ui.label(r.team_name.as_str());
                ui.label(r.slot_label.as_str());
                ui.label(r.selected.as_str());
                ui.label(r.correct.as_str());
                let color = if r.is_correct { Color32::GREEN } else { Color32::LIGHT_RED };
                ui.label(RichText::new(r.verdict()).color(color));
                ui.end_row();
            }
        });
}
