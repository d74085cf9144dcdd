use crate::QuizApp;
use crate::app::QuizEvent;
use crate::model::QuizTab;
use crate::ui::helpers::feedback_grid;
use crate::ui::layout::two_button_row;
use egui::{CollapsingHeader, RichText, Ui};

pub fn ui_quiz_finished(app: &QuizApp, ui: &mut Ui, events: &mut Vec<QuizEvent>) {
    let status = app.quiz_status();

    ui.heading(format!("🎉 お疲れさまでした、{}さん！", app.progress.player_name));
    ui.add_space(8.0);
    ui.label(
        RichText::new(format!(
            "最終スコア: {} / {}",
            status.score, status.answered_slots
        ))
        .heading(),
    );
    ui.label(RichText::new(format!("正答率: {:.1}%", status.accuracy)).strong());
    ui.add_space(12.0);

    if let Some(record) = app.last_record() {
        ui.label(format!("問題 {} の結果", record.question));
        feedback_grid(ui, "finished_last_grid", &app.last_feedback(), false);
    }

    ui.add_space(8.0);
    CollapsingHeader::new("📜 回答履歴")
        .default_open(false)
        .show(ui, |ui| {
            feedback_grid(ui, "history_grid", &app.history_rows(), true);
        });

    ui.add_space(16.0);
    let (again, ranking) = two_button_row(ui, 460.0, "🔄 もう一度遊ぶ", "🏆 ランキングを見る");
    if again {
        events.push(QuizEvent::PlayAgain);
    }
    if ranking {
        events.push(QuizEvent::SwitchTab(QuizTab::Results));
    }
}
