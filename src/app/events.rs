use super::*;
use crate::leaderboard::SortColumn;

/// Todo lo que la UI puede pedir. Las vistas acumulan eventos mientras
/// pintan y `QuizApp::handle` los aplica después.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizEvent {
    SetPlayerName(String),
    SetQuestionCount(usize),
    Start,
    Select { key: SlotKey, name: Option<String> },
    Submit,
    Next,
    PlayAgain,
    RequestLeaderboardReset,
    ConfirmLeaderboardReset,
    CancelLeaderboardReset,
    SortLeaderboard(SortColumn),
    SwitchPage(Page),
    SwitchTab(QuizTab),
}

impl QuizApp {
    pub fn handle(&mut self, event: QuizEvent) {
        log::trace!("evento: {event:?}");
        match event {
            QuizEvent::SetPlayerName(name) => self.progress.player_name = name,
            QuizEvent::SetQuestionCount(n) => self.set_question_count(n),
            QuizEvent::Start => self.start_quiz(),
            QuizEvent::Select { key, name } => self.select_answer(key, name),
            QuizEvent::Submit => self.procesar_respuestas(),
            QuizEvent::Next => self.next_question(),
            QuizEvent::PlayAgain => self.jugar_de_nuevo(),
            QuizEvent::RequestLeaderboardReset => self.confirm_reset = true,
            QuizEvent::ConfirmLeaderboardReset => self.reset_leaderboard(),
            QuizEvent::CancelLeaderboardReset => self.confirm_reset = false,
            QuizEvent::SortLeaderboard(column) => {
                self.leaderboard_order = self.leaderboard_order.toggled(column);
            }
            QuizEvent::SwitchPage(page) => {
                self.page = page;
                self.message.clear();
            }
            QuizEvent::SwitchTab(tab) => self.tab = tab,
        }
    }

    pub fn handle_all(&mut self, events: impl IntoIterator<Item = QuizEvent>) {
        for event in events {
            self.handle(event);
        }
    }
}
