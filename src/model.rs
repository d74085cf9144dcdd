use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub steps: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Team {
    pub name: String,
    pub members: Vec<Member>,
    /// Nombres que se ocultan durante la quiz (subconjunto de `members`)
    #[serde(default)]
    pub hidden: Vec<String>,
}

impl Team {
    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden.iter().any(|h| h == name)
    }
}

/// Hueco oculto: (índice de equipo, índice dentro de `hidden`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct SlotKey {
    pub team: usize,
    pub slot: usize,
}

impl SlotKey {
    pub fn new(team: usize, slot: usize) -> Self {
        Self { team, slot }
    }

    /// Etiqueta "humana" del hueco (1-based)
    pub fn label(&self) -> String {
        format!("？？？ ({})", self.slot + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskedEntry {
    Visible { name: String, steps: u32 },
    Hidden { key: SlotKey, steps: u32 },
}

impl MaskedEntry {
    pub fn steps(&self) -> u32 {
        match self {
            MaskedEntry::Visible { steps, .. } | MaskedEntry::Hidden { steps, .. } => *steps,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MaskedTeam {
    pub name: String,
    pub entries: Vec<MaskedEntry>,
}

#[derive(Clone, Debug)]
pub struct QuizRound {
    pub teams: Vec<MaskedTeam>,
    pub correct: std::collections::BTreeMap<SlotKey, String>,
    pub choices: Vec<String>,
}

impl QuizRound {
    pub fn slot_count(&self) -> usize {
        self.correct.len()
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.correct.keys().copied()
    }

    pub fn has_choice(&self, name: &str) -> bool {
        self.choices.iter().any(|c| c == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub key: SlotKey,
    pub team_name: String,
    pub selected: String,
    pub correct: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug)]
pub struct RoundRecord {
    pub question: usize, // 1-based
    pub answers: Vec<AnswerRecord>,
}

impl RoundRecord {
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }
}

#[derive(Clone, Debug)]
pub struct ResultEntry {
    pub player: String,
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
    pub recorded_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Quiz,
    StepTable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizTab {
    #[default]
    Quiz,
    Results,
}
