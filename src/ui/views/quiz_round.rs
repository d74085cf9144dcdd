use crate::QuizApp;
use crate::app::QuizEvent;
use crate::model::{MaskedEntry, MaskedTeam, SlotKey};
use crate::ui::helpers::{slot_selector, warning_label};
use egui::{Button, Grid, RichText, Ui};
use std::collections::BTreeMap;

pub fn ui_quiz_round(app: &QuizApp, ui: &mut Ui, events: &mut Vec<QuizEvent>) {
    let Some(round) = app.current_round() else {
        return;
    };
    let status = app.quiz_status();

    ui.horizontal(|ui| {
        ui.heading(status.progress_label());
        ui.add_space(16.0);
        ui.label(format!("プレイヤー: {}", app.progress.player_name));
    });
    if status.answered_slots > 0 {
        ui.label(status.score_label());
    }
    ui.add_space(8.0);
    ui.label("「？？？」の欄に入る名前を選んでください。");
    ui.add_space(8.0);

    ui.columns(2, |cols| {
        for (i, team) in round.teams.iter().enumerate() {
            masked_team(
                &mut cols[i % 2],
                team,
                &app.progress.selections,
                &round.choices,
                events,
            );
        }
    });

    ui.add_space(12.0);
    let ready = app.all_selected();
    let submit = ui.add_sized([220.0, 40.0], Button::new("✔ 回答する"));
    if submit.clicked() {
        // Aunque falten huecos se envía: la app avisa
        events.push(QuizEvent::Submit);
    }
    if !ready {
        ui.label(RichText::new("未選択の欄があります").weak());
    }

    warning_label(ui, &app.message);
}

fn masked_team(
    ui: &mut Ui,
    team: &MaskedTeam,
    selections: &BTreeMap<SlotKey, Option<String>>,
    choices: &[String],
    events: &mut Vec<QuizEvent>,
) {
    ui.label(RichText::new(format!("📌 {}", team.name)).heading());
    Grid::new(("masked_team", team.name.as_str()))
        .striped(true)
        .num_columns(3)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("");
            ui.label(RichText::new("メンバー名").strong());
            ui.label(RichText::new("歩数").strong());
            ui.end_row();
            for (i, entry) in team.entries.iter().enumerate() {
                ui.label((i + 1).to_string());
                match entry {
                    MaskedEntry::Visible { name, .. } => {
                        ui.label(name.as_str());
                    }
                    MaskedEntry::Hidden { key, .. } => {
                        let current = selections.get(key).and_then(Option::as_ref);
                        if let Some(name) = slot_selector(ui, *key, current, choices) {
                            events.push(QuizEvent::Select { key: *key, name });
                        }
                    }
                }
                ui.label(entry.steps().to_string());
                ui.end_row();
            }
        });
    ui.add_space(8.0);
}
