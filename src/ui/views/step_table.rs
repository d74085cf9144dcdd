use crate::QuizApp;
use crate::stats::average_label;
use crate::view_models::TeamTableView;
use egui::{Grid, RichText, Ui};

pub fn ui_step_table(app: &QuizApp, ui: &mut Ui) {
    ui.heading("📊 チーム別 歩数結果一覧");
    ui.label("各チームのメンバーとその歩数、平均を表示します。　★：各チームの1位");
    ui.add_space(10.0);

    // Resumen por equipos
    Grid::new("team_overview_grid")
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("順位").strong());
            ui.label(RichText::new("チーム").strong());
            ui.label(RichText::new("平均").strong());
            ui.label(RichText::new("合計歩数").strong());
            ui.end_row();
            for row in app.team_overview() {
                ui.label(row.rank.to_string());
                ui.label(row.name.as_str());
                ui.label(average_label(row.average));
                ui.label(format!("{} 歩", row.total));
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.separator();

    let tables = app.team_tables();
    ui.columns(2, |cols| {
        for (i, table) in tables.iter().enumerate() {
            team_table(&mut cols[i % 2], table);
        }
    });
}

fn team_table(ui: &mut Ui, table: &TeamTableView) {
    ui.label(RichText::new(format!("📌 {}", table.name)).heading());
    ui.label(RichText::new(table.average_label()).small().weak());
    ui.add_space(4.0);

    if table.rows.is_empty() {
        ui.label("メンバーがいません。");
    } else {
        Grid::new(("team_table", table.name.as_str()))
            .striped(true)
            .num_columns(3)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.label("");
                ui.label(RichText::new("メンバー名").strong());
                ui.label(RichText::new("歩数").strong());
                ui.end_row();
                for row in &table.rows {
                    ui.label(row.index.to_string());
                    ui.label(row.display_name());
                    ui.label(row.steps.to_string());
                    ui.end_row();
                }
            });
    }

    ui.add_space(8.0);
    ui.separator();
}
