use crate::QuizApp;
use crate::app::QuizEvent;
use crate::leaderboard::SortColumn;
use crate::ui::helpers::sort_header;
use egui::{Button, Grid, RichText, Ui};

pub fn ui_leaderboard(app: &QuizApp, ui: &mut Ui, events: &mut Vec<QuizEvent>) {
    if app.leaderboard.is_empty() {
        ui.label("まだ結果がありません。クイズに挑戦してみましょう！");
        return;
    }

    ui.heading(format!("🏆 トップ{}", app.settings.leaderboard_top));
    ui.add_space(4.0);
    Grid::new("leaderboard_top_grid")
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("順位").strong());
            ui.label(RichText::new("名前").strong());
            ui.label(RichText::new("正答率").strong());
            ui.label(RichText::new("正解数").strong());
            ui.end_row();
            for row in app.leaderboard_top() {
                let medal = match row.rank {
                    1 => "🥇",
                    2 => "🥈",
                    3 => "🥉",
                    _ => "",
                };
                ui.label(format!("{medal}{}", row.rank));
                ui.label(row.player.as_str());
                ui.label(row.accuracy_label());
                ui.label(row.score_label());
                ui.end_row();
            }
        });

    ui.add_space(16.0);
    ui.separator();
    ui.heading("📋 全結果");
    ui.label(RichText::new("見出しをクリックすると並び替えできます").weak());
    ui.add_space(4.0);

    let order = app.leaderboard_order;
    Grid::new("leaderboard_all_grid")
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            let headers = [
                ("#", SortColumn::Recorded),
                ("名前", SortColumn::Player),
                ("正解数", SortColumn::Correct),
                ("正答率", SortColumn::Accuracy),
            ];
            for (label, column) in headers {
                if sort_header(ui, label, column, order) {
                    events.push(QuizEvent::SortLeaderboard(column));
                }
            }
            ui.label(RichText::new("日時").strong());
            ui.end_row();

            for row in app.leaderboard_table() {
                ui.label(row.rank.to_string());
                ui.label(row.player.as_str());
                ui.label(row.score_label());
                ui.label(row.accuracy_label());
                ui.label(row.recorded_at.as_str());
                ui.end_row();
            }
        });

    ui.add_space(16.0);
    if ui
        .add(Button::new("🗑 ランキングをリセット"))
        .on_hover_text("すべての結果を削除します")
        .clicked()
    {
        events.push(QuizEvent::RequestLeaderboardReset);
    }
}
