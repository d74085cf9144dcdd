use super::*;
use crate::model::{ResultEntry, RoundRecord};
use crate::stats::{team_average, team_leader, team_total, teams_by_average};
use crate::view_models::{
    FeedbackRow, LeaderboardRow, MemberRow, QuizScreen, QuizStatus, TeamOverviewRow,
    TeamTableView,
};
use time::macros::format_description;

impl QuizApp {
    pub fn team_tables(&self) -> Vec<TeamTableView> {
        self.teams
            .iter()
            .map(|team| {
                let leader = team_leader(team).map(|m| m.name.as_str());
                let mut leader_marked = false;
                let rows = team
                    .members
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        // Sólo un ★ por equipo aunque haya nombres repetidos
                        let is_leader = !leader_marked && Some(m.name.as_str()) == leader;
                        leader_marked |= is_leader;
                        MemberRow {
                            index: i + 1,
                            name: m.name.clone(),
                            steps: m.steps,
                            is_leader,
                        }
                    })
                    .collect();
                TeamTableView {
                    name: team.name.clone(),
                    rows,
                    average: team_average(team),
                    total: team_total(team),
                }
            })
            .collect()
    }

    pub fn team_overview(&self) -> Vec<TeamOverviewRow> {
        teams_by_average(&self.teams)
            .into_iter()
            .enumerate()
            .map(|(i, team)| TeamOverviewRow {
                rank: i + 1,
                name: team.name.clone(),
                average: team_average(team),
                total: team_total(team),
            })
            .collect()
    }

    pub fn quiz_screen(&self) -> QuizScreen {
        match self.progress.phase {
            QuizPhase::NotStarted => QuizScreen::Start,
            QuizPhase::InProgress if self.progress.reviewing => QuizScreen::Review,
            QuizPhase::InProgress => QuizScreen::Round,
            QuizPhase::Finished => QuizScreen::Finished,
        }
    }

    pub fn quiz_status(&self) -> QuizStatus {
        let total = self.progress.quiz_data.len();
        QuizStatus {
            question_number: (self.progress.current_question + 1).min(total.max(1)),
            question_total: total,
            score: self.progress.score,
            answered_slots: self.total_possible(),
            accuracy: self.accuracy(),
        }
    }

    /// Resultado de la última ronda corregida
    pub fn last_feedback(&self) -> Vec<FeedbackRow> {
        self.last_record().map(feedback_rows).unwrap_or_default()
    }

    /// Historial completo de la partida
    pub fn history_rows(&self) -> Vec<FeedbackRow> {
        self.progress.answers.iter().flat_map(feedback_rows).collect()
    }

    pub fn leaderboard_top(&self) -> Vec<LeaderboardRow> {
        self.leaderboard
            .top(self.settings.leaderboard_top)
            .into_iter()
            .enumerate()
            .map(|(i, (_, e))| leaderboard_row(i + 1, e))
            .collect()
    }

    /// Tabla completa; `rank` es el orden de registro
    pub fn leaderboard_table(&self) -> Vec<LeaderboardRow> {
        self.leaderboard
            .sorted(self.leaderboard_order)
            .into_iter()
            .map(|(i, e)| leaderboard_row(i + 1, e))
            .collect()
    }
}

fn feedback_rows(record: &RoundRecord) -> Vec<FeedbackRow> {
    record
        .answers
        .iter()
        .map(|a| FeedbackRow {
            question: record.question,
            team_name: a.team_name.clone(),
            slot_label: a.key.label(),
            selected: a.selected.clone(),
            correct: a.correct.clone(),
            is_correct: a.is_correct,
        })
        .collect()
}

fn leaderboard_row(rank: usize, e: &ResultEntry) -> LeaderboardRow {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    LeaderboardRow {
        rank,
        player: e.player.clone(),
        correct: e.correct,
        total: e.total,
        accuracy: e.accuracy,
        recorded_at: e
            .recorded_at
            .format(&format)
            .unwrap_or_else(|_| "-".to_string()),
    }
}
