use crate::QuizApp;
use crate::app::QuizEvent;
use crate::ui::helpers::feedback_grid;
use egui::{Button, RichText, Ui};

pub fn ui_quiz_review(app: &QuizApp, ui: &mut Ui, events: &mut Vec<QuizEvent>) {
    let Some(record) = app.last_record() else {
        return;
    };
    let status = app.quiz_status();

    ui.heading(format!("問題 {} の結果", record.question));
    ui.label(
        RichText::new(format!(
            "{} / {} 正解",
            record.correct_count(),
            record.answers.len()
        ))
        .strong(),
    );
    ui.label(status.score_label());
    ui.add_space(8.0);

    feedback_grid(ui, "review_grid", &app.last_feedback(), false);

    ui.add_space(12.0);
    if ui
        .add_sized([220.0, 40.0], Button::new("次の問題へ ▶"))
        .clicked()
    {
        events.push(QuizEvent::Next);
    }
}
