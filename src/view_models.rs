// src/view_models.rs

#[derive(Clone, Debug, PartialEq)]
pub struct MemberRow {
    pub index: usize, // 1-based, como en la tabla de resultados
    pub name: String,
    pub steps: u32,
    pub is_leader: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamTableView {
    pub name: String,
    pub rows: Vec<MemberRow>,
    pub average: Option<f64>,
    pub total: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamOverviewRow {
    pub rank: usize,
    pub name: String,
    pub average: Option<f64>,
    pub total: u64,
}

/// Pantalla de la pestaña "クイズ"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Start,
    Round,
    Review,
    Finished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizStatus {
    pub question_number: usize, // 1-based
    pub question_total: usize,
    pub score: usize,
    pub answered_slots: usize,
    pub accuracy: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackRow {
    pub question: usize,
    pub team_name: String,
    pub slot_label: String,
    pub selected: String,
    pub correct: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub player: String,
    pub correct: usize,
    pub total: usize,
    pub accuracy: f64,
    pub recorded_at: String,
}

impl MemberRow {
    pub fn display_name(&self) -> String {
        if self.is_leader {
            format!("★{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl TeamTableView {
    pub fn average_label(&self) -> String {
        crate::stats::average_label(self.average)
    }
}

impl QuizStatus {
    pub fn progress_label(&self) -> String {
        format!("問題 {} / {}", self.question_number, self.question_total)
    }

    pub fn score_label(&self) -> String {
        format!(
            "正解数: {} / {}（正答率 {:.1}%）",
            self.score, self.answered_slots, self.accuracy
        )
    }
}

impl FeedbackRow {
    pub fn verdict(&self) -> &'static str {
        if self.is_correct { "✅ 正解" } else { "❌ 不正解" }
    }
}

impl LeaderboardRow {
    pub fn accuracy_label(&self) -> String {
        format!("{:.1}%", self.accuracy)
    }

    pub fn score_label(&self) -> String {
        format!("{} / {}", self.correct, self.total)
    }
}
