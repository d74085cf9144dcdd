use crate::QuizApp;
use crate::app::QuizEvent;
use crate::model::QuizTab;
use egui::Ui;

pub fn ui_quiz_tabs(app: &QuizApp, ui: &mut Ui, events: &mut Vec<QuizEvent>) {
    ui.heading("🧩 メンバー名当てクイズ");
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let results = format!("🏆 結果 ({})", app.leaderboard.len());
        for (tab, label) in [(QuizTab::Quiz, "📝 クイズ".to_string()), (QuizTab::Results, results)] {
            if ui.selectable_label(app.tab == tab, label).clicked() && app.tab != tab {
                events.push(QuizEvent::SwitchTab(tab));
            }
        }
    });
}
