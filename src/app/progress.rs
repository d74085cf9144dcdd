use super::*;
use crate::leaderboard::accuracy_percent;

impl QuizApp {
    /// Ronda en juego; durante la revisión ya apunta a la siguiente
    pub fn current_round(&self) -> Option<&QuizRound> {
        if self.progress.phase != QuizPhase::InProgress {
            return None;
        }
        self.progress.quiz_data.get(self.progress.current_question)
    }

    pub fn last_record(&self) -> Option<&RoundRecord> {
        self.progress.answers.last()
    }

    /// Huecos de las rondas ya corregidas
    pub fn total_possible(&self) -> usize {
        self.progress.answers.iter().map(|r| r.answers.len()).sum()
    }

    /// 0.0 mientras no haya ningún hueco corregido
    pub fn accuracy(&self) -> f64 {
        accuracy_percent(self.progress.score, self.total_possible())
    }

    pub fn all_selected(&self) -> bool {
        self.progress.selections.values().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_before_any_round_is_zero() {
        let app = QuizApp::with_seed(2).expect("app");
        assert_eq!(app.total_possible(), 0);
        assert_eq!(app.accuracy(), 0.0);
        assert!(app.current_round().is_none());
        assert!(app.last_record().is_none());
    }
}
