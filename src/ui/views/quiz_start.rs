use crate::QuizApp;
use crate::app::QuizEvent;
use crate::ui::helpers::warning_label;
use egui::{Button, Key, Slider, TextEdit, Ui};

pub fn ui_quiz_start(app: &QuizApp, ui: &mut Ui, events: &mut Vec<QuizEvent>) {
    ui.label("各チームの何人かの名前が隠されています。歩数を手がかりに、候補の中から正しい名前を選んでください。");
    ui.add_space(12.0);

    let mut name = app.progress.player_name.clone();
    let mut enter = false;
    ui.horizontal(|ui| {
        ui.label("あなたの名前:");
        let resp = ui.add(
            TextEdit::singleline(&mut name)
                .hint_text("例：山田")
                .desired_width(240.0),
        );
        if resp.changed() {
            events.push(QuizEvent::SetPlayerName(name.clone()));
        }
        enter = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
    });

    ui.add_space(6.0);
    let mut count = app.progress.question_count;
    if ui
        .add(Slider::new(&mut count, app.settings.question_range()).text("問題数"))
        .changed()
    {
        events.push(QuizEvent::SetQuestionCount(count));
    }

    ui.add_space(12.0);
    let start = ui.add_sized([220.0, 40.0], Button::new("▶ クイズを始める"));
    if start.clicked() || enter {
        events.push(QuizEvent::Start);
    }

    warning_label(ui, &app.message);
}
