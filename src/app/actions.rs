use super::*;
use crate::leaderboard::accuracy_percent;
use crate::model::{AnswerRecord, ResultEntry};
use crate::round::generate_rounds;
use time::OffsetDateTime;

pub const WARN_EMPTY_NAME: &str = "⚠ 名前を入力してください。";
pub const WARN_INCOMPLETE: &str = "⚠ すべての空欄に名前を選択してください。";

impl QuizApp {
    pub fn set_question_count(&mut self, n: usize) {
        // Sólo se puede cambiar antes de empezar
        if self.progress.phase == QuizPhase::NotStarted {
            self.progress.question_count = self.settings.clamp_questions(n);
        }
    }

    pub fn start_quiz(&mut self) {
        if self.progress.phase != QuizPhase::NotStarted {
            return;
        }

        let name = self.progress.player_name.trim().to_string();
        if name.is_empty() {
            self.message = WARN_EMPTY_NAME.into();
            return;
        }

        let count = self.settings.clamp_questions(self.progress.question_count);
        let rounds = generate_rounds(&self.teams, &self.settings, count, &mut self.rng);

        let prog = &mut self.progress;
        prog.player_name = name;
        prog.question_count = count;
        prog.quiz_data = rounds;
        prog.current_question = 0;
        prog.score = 0;
        prog.answers.clear();
        prog.reviewing = false;
        prog.phase = QuizPhase::InProgress;
        self.reset_selections();
        self.message.clear();

        log::info!(
            "Quiz iniciada por '{}' con {} preguntas",
            self.progress.player_name,
            count
        );
    }

    pub fn select_answer(&mut self, key: SlotKey, name: Option<String>) {
        if self.progress.phase != QuizPhase::InProgress || self.progress.reviewing {
            return;
        }
        let Some(round) = self.current_round() else {
            return;
        };
        if !round.correct.contains_key(&key) {
            log::warn!("Hueco desconocido: {key:?}");
            return;
        }
        if let Some(n) = &name {
            if !round.has_choice(n) {
                log::warn!("'{n}' no es una opción de esta ronda");
                return;
            }
        }
        self.progress.selections.insert(key, name);
    }

    /// Corrige la ronda actual. Si falta algún hueco no cambia nada.
    pub fn procesar_respuestas(&mut self) {
        if self.progress.phase != QuizPhase::InProgress || self.progress.reviewing {
            return;
        }
        let Some(records) = self.grade_current_round() else {
            self.message = WARN_INCOMPLETE.into();
            return;
        };

        let hits = records.iter().filter(|r| r.is_correct).count();
        let prog = &mut self.progress;
        prog.score += hits;
        prog.answers.push(RoundRecord {
            question: prog.current_question + 1,
            answers: records,
        });
        prog.current_question += 1;
        self.message.clear();

        log::debug!(
            "Ronda {} corregida: {}/{}",
            self.progress.current_question,
            hits,
            self.progress.answers.last().map_or(0, |r| r.answers.len())
        );

        if self.progress.current_question >= self.progress.quiz_data.len() {
            self.finish_quiz();
        } else {
            self.progress.reviewing = true;
        }
    }

    /// `None` si no hay ronda o queda algún hueco en "選択してください"
    fn grade_current_round(&self) -> Option<Vec<AnswerRecord>> {
        let round = self.current_round()?;
        round
            .correct
            .iter()
            .map(|(key, correct)| {
                let selected = self.progress.selections.get(key)?.clone()?;
                let team_name = round
                    .teams
                    .get(key.team)
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                Some(AnswerRecord {
                    key: *key,
                    team_name,
                    is_correct: selected == *correct,
                    selected,
                    correct: correct.clone(),
                })
            })
            .collect()
    }

    pub fn next_question(&mut self) {
        if self.progress.phase != QuizPhase::InProgress || !self.progress.reviewing {
            return;
        }
        self.progress.reviewing = false;
        self.reset_selections();
    }

    fn finish_quiz(&mut self) {
        self.progress.phase = QuizPhase::Finished;
        self.progress.reviewing = false;
        self.progress.selections.clear();

        let total = self.total_possible();
        self.leaderboard.record(ResultEntry {
            player: self.progress.player_name.clone(),
            correct: self.progress.score,
            total,
            accuracy: accuracy_percent(self.progress.score, total),
            recorded_at: now(),
        });
    }

    fn reset_selections(&mut self) {
        let slots: BTreeMap<SlotKey, Option<String>> = self
            .current_round()
            .map(|r| r.slots().map(|k| (k, None)).collect())
            .unwrap_or_default();
        self.progress.selections = slots;
    }
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
