use crate::data::read_teams_embedded;
use crate::error::DataError;
use crate::leaderboard::{Leaderboard, SortOrder};
use crate::model::{Page, QuizPhase, QuizRound, QuizTab, RoundRecord, SlotKey, Team};
use crate::settings::QuizSettings;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

// Submódulos
pub mod actions;
pub mod events;
pub mod progress;
pub mod resets;
pub mod view_models;

pub use events::QuizEvent;

/// Estado de la partida en curso (lo que "Jugar otra vez" reinicia)
#[derive(Clone, Debug)]
pub struct QuizProgress {
    pub player_name: String,
    pub question_count: usize,
    pub phase: QuizPhase,
    pub current_question: usize, // 0-based, índice en quiz_data
    pub score: usize,
    pub quiz_data: Vec<QuizRound>,
    pub answers: Vec<RoundRecord>,
    pub selections: BTreeMap<SlotKey, Option<String>>, // None = "選択してください"
    pub reviewing: bool, // mostrando el resultado de la última ronda
}

impl QuizProgress {
    pub fn new(question_count: usize) -> Self {
        Self {
            player_name: String::new(),
            question_count,
            phase: QuizPhase::NotStarted,
            current_question: 0,
            score: 0,
            quiz_data: Vec::new(),
            answers: Vec::new(),
            selections: BTreeMap::new(),
            reviewing: false,
        }
    }
}

impl Default for QuizProgress {
    fn default() -> Self {
        Self::new(QuizSettings::default().default_questions)
    }
}

pub struct QuizApp {
    pub teams: Vec<Team>,
    pub settings: QuizSettings,
    pub progress: QuizProgress,
    pub leaderboard: Leaderboard,
    pub leaderboard_order: SortOrder,
    pub page: Page,
    pub tab: QuizTab,
    pub message: String,
    pub confirm_reset: bool,
    rng: StdRng,
}

impl QuizApp {
    pub fn new() -> Result<Self, DataError> {
        let teams = read_teams_embedded()?;
        Ok(Self::with_teams(
            teams,
            QuizSettings::default(),
            StdRng::from_entropy(),
        ))
    }

    /// Semilla fija: rondas reproducibles
    pub fn with_seed(seed: u64) -> Result<Self, DataError> {
        let teams = read_teams_embedded()?;
        Ok(Self::with_teams(
            teams,
            QuizSettings::default(),
            StdRng::seed_from_u64(seed),
        ))
    }

    pub fn with_teams(teams: Vec<Team>, settings: QuizSettings, rng: StdRng) -> Self {
        let progress = QuizProgress::new(settings.default_questions);
        Self {
            teams,
            settings,
            progress,
            leaderboard: Leaderboard::default(),
            leaderboard_order: SortOrder::default(),
            page: Page::default(),
            tab: QuizTab::default(),
            message: String::new(),
            confirm_reset: false,
            rng,
        }
    }
}
