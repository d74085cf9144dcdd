use super::*;

impl QuizApp {
    /// "もう一度遊ぶ": reinicia la partida, conserva nombre, número de preguntas y ranking
    pub fn jugar_de_nuevo(&mut self) {
        let prog = &mut self.progress;
        prog.phase = QuizPhase::NotStarted;
        prog.current_question = 0;
        prog.score = 0;
        prog.quiz_data.clear();
        prog.answers.clear();
        prog.selections.clear();
        prog.reviewing = false;
        self.message.clear();
        self.tab = QuizTab::Quiz;
    }

    /// Borra todo el ranking (única forma además de reiniciar el proceso)
    pub fn reset_leaderboard(&mut self) {
        log::info!("Ranking borrado ({} resultados)", self.leaderboard.len());
        self.leaderboard.clear();
        self.confirm_reset = false;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();
        egui::Window::new("ランキングのリセット")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("すべての結果を削除しますか？この操作は元に戻せません。");
                ui.horizontal(|ui| {
                    if ui.button("はい、削除する").clicked() {
                        events.push(QuizEvent::ConfirmLeaderboardReset);
                    }
                    if ui.button("いいえ").clicked() {
                        events.push(QuizEvent::CancelLeaderboardReset);
                    }
                });
            });
        self.handle_all(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all_correct(app: &mut QuizApp) {
        app.handle(QuizEvent::Start);
        for _ in 0..app.progress.question_count {
            let round = app.current_round().expect("round").clone();
            for (key, correct) in &round.correct {
                app.handle(QuizEvent::Select { key: *key, name: Some(correct.clone()) });
            }
            app.handle(QuizEvent::Submit);
            app.handle(QuizEvent::Next);
        }
    }

    fn finished_app(name: &str) -> QuizApp {
        let mut app = QuizApp::with_seed(5).expect("app");
        app.handle(QuizEvent::SetPlayerName(name.into()));
        app.handle(QuizEvent::SetQuestionCount(5));
        play_all_correct(&mut app);
        app
    }

    #[test]
    fn play_again_resets_progress_but_keeps_leaderboard() {
        let mut app = finished_app("ana");
        assert_eq!(app.progress.phase, QuizPhase::Finished);
        assert_eq!(app.leaderboard.len(), 1);

        app.handle(QuizEvent::PlayAgain);
        assert_eq!(app.progress.phase, QuizPhase::NotStarted);
        assert_eq!(app.progress.score, 0);
        assert_eq!(app.progress.current_question, 0);
        assert!(app.progress.quiz_data.is_empty());
        assert!(app.progress.answers.is_empty());
        assert_eq!(app.progress.player_name, "ana");
        assert_eq!(app.progress.question_count, 5);
        assert_eq!(app.leaderboard.len(), 1);
    }

    #[test]
    fn replays_append_more_entries() {
        let mut app = finished_app("ana");
        app.handle(QuizEvent::PlayAgain);
        play_all_correct(&mut app);

        assert_eq!(app.progress.phase, QuizPhase::Finished);
        assert_eq!(app.leaderboard.len(), 2);
        assert!(app.leaderboard.entries().iter().all(|e| e.player == "ana"));
        assert!(app.leaderboard.entries().iter().all(|e| e.total == 40));
    }

    #[test]
    fn reset_requires_confirmation() {
        let mut app = finished_app("ana");
        app.handle(QuizEvent::RequestLeaderboardReset);
        assert!(app.confirm_reset);
        app.handle(QuizEvent::CancelLeaderboardReset);
        assert!(!app.confirm_reset);
        assert_eq!(app.leaderboard.len(), 1);

        app.handle(QuizEvent::RequestLeaderboardReset);
        app.handle(QuizEvent::ConfirmLeaderboardReset);
        assert!(!app.confirm_reset);
        assert!(app.leaderboard.is_empty());
        // La partida terminada no se toca
        assert_eq!(app.progress.phase, QuizPhase::Finished);
    }
}
