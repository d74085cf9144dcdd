use std::ops::RangeInclusive;

/// Parámetros ajustables de la quiz
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSettings {
    pub min_questions: usize,
    pub max_questions: usize,
    pub default_questions: usize,
    /// Base para calcular distractores: max(base - ocultos, min_distractors)
    pub distractor_base: usize,
    pub min_distractors: usize,
    pub leaderboard_top: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            min_questions: 5,
            max_questions: 15,
            default_questions: 10,
            distractor_base: 8,
            min_distractors: 4,
            leaderboard_top: 5,
        }
    }
}

impl QuizSettings {
    pub fn question_range(&self) -> RangeInclusive<usize> {
        self.min_questions..=self.max_questions
    }

    pub fn clamp_questions(&self, n: usize) -> usize {
        n.clamp(self.min_questions, self.max_questions)
    }

    pub fn distractor_count(&self, hidden_count: usize) -> usize {
        self.distractor_base
            .saturating_sub(hidden_count)
            .max(self.min_distractors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distractor_count_never_drops_below_minimum() {
        let s = QuizSettings::default();
        assert_eq!(s.distractor_count(8), 4);
        assert_eq!(s.distractor_count(12), 4);
        assert_eq!(s.distractor_count(2), 6);
        assert_eq!(s.distractor_count(0), 8);
    }

    #[test]
    fn question_count_is_clamped_to_slider_bounds() {
        let s = QuizSettings::default();
        assert_eq!(s.clamp_questions(1), 5);
        assert_eq!(s.clamp_questions(10), 10);
        assert_eq!(s.clamp_questions(40), 15);
    }
}
