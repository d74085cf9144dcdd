use crate::model::ResultEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Recorded,
    Player,
    Correct,
    Accuracy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub column: SortColumn,
    pub descending: bool,
}

impl SortOrder {
    /// Pulsar la columna activa invierte el sentido. "#" y nombre empiezan
    /// ascendentes, las columnas numéricas descendentes.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == column {
            Self {
                column,
                descending: !self.descending,
            }
        } else {
            Self {
                column,
                descending: !matches!(column, SortColumn::Recorded | SortColumn::Player),
            }
        }
    }
}

/// Resultados de la sesión, en orden de inserción
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: Vec<ResultEntry>,
}

impl Leaderboard {
    pub fn record(&mut self, entry: ResultEntry) {
        log::info!(
            "Resultado registrado: {} {}/{} ({:.1}%)",
            entry.player,
            entry.correct,
            entry.total,
            entry.accuracy
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Precisión descendente; los empates conservan el orden de inserción
    pub fn ranked(&self) -> Vec<(usize, &ResultEntry)> {
        let mut ranked: Vec<(usize, &ResultEntry)> = self.entries.iter().enumerate().collect();
        ranked.sort_by(|(_, a), (_, b)| b.accuracy.total_cmp(&a.accuracy));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<(usize, &ResultEntry)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Tabla completa ordenada por columna (estable: empates en orden de inserción)
    pub fn sorted(&self, order: SortOrder) -> Vec<(usize, &ResultEntry)> {
        let mut rows: Vec<(usize, &ResultEntry)> = self.entries.iter().enumerate().collect();
        rows.sort_by(|(ia, a), (ib, b)| {
            let ord = match order.column {
                SortColumn::Recorded => ia.cmp(ib),
                SortColumn::Player => a.player.cmp(&b.player),
                SortColumn::Correct => a.correct.cmp(&b.correct),
                SortColumn::Accuracy => a.accuracy.total_cmp(&b.accuracy),
            };
            if order.descending { ord.reverse() } else { ord }
        });
        rows
    }
}

pub fn accuracy_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn entry(player: &str, correct: usize, total: usize) -> ResultEntry {
        ResultEntry {
            player: player.to_string(),
            correct,
            total,
            accuracy: accuracy_percent(correct, total),
            recorded_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn board(entries: &[(&str, usize)]) -> Leaderboard {
        let mut lb = Leaderboard::default();
        for (p, c) in entries {
            lb.record(entry(p, *c, 10));
        }
        lb
    }

    #[test]
    fn top_ranking_is_stable_on_ties() {
        let lb = board(&[("a", 10), ("b", 8), ("c", 10), ("d", 6)]);
        let top: Vec<&str> = lb.top(5).iter().map(|(_, e)| e.player.as_str()).collect();
        assert_eq!(top, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn top_is_limited_to_n() {
        let lb = board(&[("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5), ("f", 6)]);
        let top = lb.top(5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].1.player, "f");
        assert_eq!(top[4].1.player, "b");
    }

    #[test]
    fn same_player_is_not_deduplicated() {
        let lb = board(&[("a", 3), ("a", 7)]);
        assert_eq!(lb.len(), 2);
    }

    #[test]
    fn clear_empties_the_board() {
        let mut lb = board(&[("a", 3)]);
        lb.clear();
        assert!(lb.is_empty());
        assert!(lb.top(5).is_empty());
    }

    #[test]
    fn sorted_by_player_and_reversed_on_second_click() {
        let lb = board(&[("b", 3), ("a", 7), ("c", 5)]);
        let order = SortOrder::default().toggled(SortColumn::Player);
        let names: Vec<&str> = lb.sorted(order).iter().map(|(_, e)| e.player.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let order = order.toggled(SortColumn::Player);
        let names: Vec<&str> = lb.sorted(order).iter().map(|(_, e)| e.player.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn recorded_column_starts_oldest_first() {
        let lb = board(&[("b", 3), ("a", 7), ("c", 5)]);
        let order = SortOrder::default()
            .toggled(SortColumn::Accuracy)
            .toggled(SortColumn::Recorded);
        assert!(!order.descending);
        let idx: Vec<usize> = lb.sorted(order).iter().map(|(i, _)| *i).collect();
        assert_eq!(idx, vec![0, 1, 2]);

        let order = order.toggled(SortColumn::Recorded);
        let idx: Vec<usize> = lb.sorted(order).iter().map(|(i, _)| *i).collect();
        assert_eq!(idx, vec![2, 1, 0]);
    }

    #[test]
    fn default_order_is_insertion() {
        let lb = board(&[("b", 3), ("a", 7)]);
        let idx: Vec<usize> = lb.sorted(SortOrder::default()).iter().map(|(i, _)| *i).collect();
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn zero_total_accuracy_is_zero() {
        assert_eq!(accuracy_percent(0, 0), 0.0);
        assert_eq!(accuracy_percent(8, 8), 100.0);
        assert_eq!(accuracy_percent(6, 8), 75.0);
    }
}
